criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_minkowski_distance,
        computing_membership_matrix,
        estimating_centroids,
        converging_single_trial,
        searching_elbow,
        optimizing_best_of_restarts,
}

fn blobs() -> Vec<Point> {
    Blobs::new(
        vec![[0.0, 0.0, 0.0], [10.0, 0.0, 5.0], [5.0, 9.0, 0.0], [0.0, 9.0, 9.0]],
        1.0,
        256,
    )
    .points(&mut SmallRng::seed_from_u64(0))
}

fn computing_minkowski_distance(c: &mut criterion::Criterion) {
    let ref a = Point::from([1.0; 12]);
    let ref b = Point::from([-0.5; 12]);
    let euclid = Minkowski::default();
    let fractional = Minkowski::from(1.5);
    c.bench_function("compute a 12-d Euclidean distance", |bench| {
        bench.iter(|| euclid.distance(a, b))
    });
    c.bench_function("compute a 12-d Minkowski distance (p = 1.5)", |bench| {
        bench.iter(|| fractional.distance(a, b))
    });
}

fn computing_membership_matrix(c: &mut criterion::Criterion) {
    let ref points = blobs();
    let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
    let centroids = fcm.extent().centroids(8, &mut SmallRng::seed_from_u64(1));
    c.bench_function("compute a 1024 x 8 Membership", |bench| {
        bench.iter(|| fcm.membership(&centroids))
    });
}

fn estimating_centroids(c: &mut criterion::Criterion) {
    let ref points = blobs();
    let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
    let ref mut rng = SmallRng::seed_from_u64(2);
    let centroids = fcm.extent().centroids(8, rng);
    let membership = fcm.membership(&centroids);
    c.bench_function("estimate 8 centroids from 1024 points", |bench| {
        bench.iter(|| fcm.estimate(&membership, rng))
    });
}

fn converging_single_trial(c: &mut criterion::Criterion) {
    let ref points = blobs();
    let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
    c.bench_function("converge one trial at c = 4", |bench| {
        bench.iter(|| fcm.trial(4, &mut SmallRng::seed_from_u64(3)))
    });
}

fn searching_elbow(c: &mut criterion::Criterion) {
    let ref points = blobs();
    let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
    c.bench_function("search elbow over 2..=8", |bench| {
        bench.iter(|| Elbow::search(&fcm, 2..=8, 4, 4))
    });
}

fn optimizing_best_of_restarts(c: &mut criterion::Criterion) {
    let ref points = blobs();
    let params = Parameters::default().with_seed(5);
    let optimizer = Optimizer::new(points, params).unwrap();
    c.bench_function("best of 10 restarts at c = 4", |bench| {
        bench.iter(|| optimizer.best(4))
    });
}

use fuzzyc::clustering::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
