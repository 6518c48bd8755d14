use super::*;
use crate::Energy;
use crate::Grade;
use serde::Serialize;
use serde::Serializer;

/// Fuzzy partition of N points over C clusters.
///
/// Row-major N×C grades in [0, 1]. Row `i` is point `i`'s degree of
/// belonging to each cluster and always sums to 1.
///
/// # Update rule
///
/// `u_ik = 1 / Σ_j (d_ik / d_ij)^(2/(m-1))`
///
/// A point sitting exactly on a centroid has no finite ratio, so it is
/// given full membership in that cluster and none elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    c: usize,
    grades: Vec<Grade>,
}

impl Membership {
    /// Number of points (rows).
    pub fn n(&self) -> usize {
        if self.c == 0 { 0 } else { self.grades.len() / self.c }
    }
    /// Number of clusters (columns).
    pub fn c(&self) -> usize {
        self.c
    }
    /// Grade of point `i` in cluster `k`.
    pub fn get(&self, i: usize, k: usize) -> Grade {
        self.grades[i * self.c + k]
    }
    /// Grades of point `i` across all clusters.
    pub fn row(&self, i: usize) -> &[Grade] {
        &self.grades[i * self.c..(i + 1) * self.c]
    }
    /// Rows in point order; none when there are no clusters.
    pub fn rows(&self) -> impl Iterator<Item = &[Grade]> + '_ {
        self.grades.chunks(self.c.max(1)).take(self.n())
    }
    /// Grades of every point in cluster `k`.
    pub fn column(&self, k: usize) -> impl Iterator<Item = Grade> + '_ {
        self.rows().map(move |row| row[k])
    }
    /// Cluster with the highest grade for point `i`, ties to the lowest index.
    pub fn dominant(&self, i: usize) -> usize {
        self.row(i)
            .iter()
            .enumerate()
            .fold((0, Grade::NEG_INFINITY), |(j, best), (k, &u)| {
                if u > best { (k, u) } else { (j, best) }
            })
            .0
    }
    /// Largest absolute grade difference against another partition of the same shape.
    ///
    /// NaN if any grade on either side is NaN.
    pub fn delta(&self, other: &Self) -> Grade {
        debug_assert_eq!(self.c, other.c, "mismatched cluster counts");
        debug_assert_eq!(self.grades.len(), other.grades.len(), "mismatched point counts");
        self.grades
            .iter()
            .zip(other.grades.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, |max, d| if d > max || d.is_nan() { d } else { max })
    }

    /// Computes the partition induced by a fixed set of centroids.
    pub fn calculate(
        points: &[Point],
        centroids: &[Centroid],
        metric: &Minkowski,
        fuzziness: f64,
    ) -> Self {
        let exponent = 2.0 / (fuzziness - 1.0);
        let c = centroids.len();
        let grades = points
            .iter()
            .flat_map(|point| {
                let distances = centroids
                    .iter()
                    .map(|centroid| metric.distance(point, centroid))
                    .collect::<Vec<Energy>>();
                Self::grade(&distances, exponent)
            })
            .collect();
        Self { c, grades }
    }

    /// One row of grades from a point's distances to every centroid.
    fn grade(distances: &[Energy], exponent: Energy) -> Vec<Grade> {
        match distances.iter().position(|&d| d == 0.0) {
            Some(hit) => {
                log::trace!("point coincides with centroid {}", hit);
                (0..distances.len())
                    .map(|k| if k == hit { 1.0 } else { 0.0 })
                    .collect()
            }
            None => distances
                .iter()
                .map(|dk| {
                    distances
                        .iter()
                        .map(|dj| (dk / dj).powf(exponent))
                        .sum::<Energy>()
                })
                .map(|denominator| 1.0 / denominator)
                .collect(),
        }
    }
}

impl From<(usize, Vec<Grade>)> for Membership {
    fn from((c, grades): (usize, Vec<Grade>)) -> Self {
        debug_assert!(c > 0 && grades.len() % c == 0, "ragged membership grades");
        Self { c, grades }
    }
}

impl Serialize for Membership {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums_to_one(u: &Membership) -> bool {
        u.rows()
            .map(|row| row.iter().sum::<Grade>())
            .all(|s| (s - 1.0).abs() < 1e-9)
    }

    #[test]
    fn rows_sum_to_one() {
        let ref points = (0..40)
            .map(|i| Point::from([i as f64 * 0.37, (i * i % 17) as f64]))
            .collect::<Vec<_>>();
        let ref centroids = [
            Point::from([1.5, 2.5]),
            Point::from([9.0, 4.0]),
            Point::from([3.3, 15.0]),
            Point::from([12.0, 0.1]),
        ];
        for m in [1.5, 2.0, 3.0] {
            let u = Membership::calculate(points, centroids, &Minkowski::default(), m);
            assert_eq!(u.n(), 40);
            assert_eq!(u.c(), 4);
            assert!(sums_to_one(&u));
            assert!(u.rows().flatten().all(|&g| (0.0..=1.0).contains(&g)));
        }
    }

    #[test]
    fn coincident_point_is_one_hot() {
        let ref points = [Point::from([1.0, 1.0]), Point::from([2.0, 5.0])];
        let ref centroids = [Point::from([0.0, 0.0]), Point::from([1.0, 1.0])];
        let u = Membership::calculate(points, centroids, &Minkowski::default(), 2.0);
        assert_eq!(u.row(0), &[0.0, 1.0]);
        assert!(u.rows().flatten().all(|g| g.is_finite()));
        assert!(sums_to_one(&u));
    }

    #[test]
    fn duplicate_centroids_pick_the_first() {
        let ref points = [Point::from([4.0])];
        let ref centroids = [Point::from([0.0]), Point::from([4.0]), Point::from([4.0])];
        let u = Membership::calculate(points, centroids, &Minkowski::default(), 2.0);
        assert_eq!(u.row(0), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn equidistant_point_splits_evenly() {
        let ref points = [Point::from([0.0, 0.0])];
        let ref centroids = [Point::from([-1.0, 0.0]), Point::from([1.0, 0.0])];
        let u = Membership::calculate(points, centroids, &Minkowski::default(), 2.0);
        assert!((u.get(0, 0) - 0.5).abs() < 1e-12);
        assert!((u.get(0, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn closer_centroid_gets_more_membership() {
        let ref points = [Point::from([1.0])];
        let ref centroids = [Point::from([0.0]), Point::from([4.0])];
        let u = Membership::calculate(points, centroids, &Minkowski::default(), 2.0);
        // d = (1, 3) => u_0 = 1 / (1 + 1/9) = 0.9
        assert!((u.get(0, 0) - 0.9).abs() < 1e-12);
        assert_eq!(u.dominant(0), 0);
    }

    #[test]
    fn delta_is_largest_absolute_change() {
        let a = Membership::from((2, vec![0.5, 0.5, 0.9, 0.1]));
        let b = Membership::from((2, vec![0.4, 0.6, 0.6, 0.4]));
        assert!((a.delta(&b) - 0.3).abs() < 1e-12);
        assert_eq!(a.delta(&a), 0.0);
    }

    #[test]
    fn delta_propagates_nan() {
        let a = Membership::from((2, vec![0.5, 0.5, f64::NAN, 0.1]));
        let b = Membership::from((2, vec![0.4, 0.6, 0.6, 0.4]));
        assert!(a.delta(&b).is_nan());
        assert!(b.delta(&a).is_nan());
        let c = Membership::from((2, vec![0.5, 0.5, 0.9, f64::NAN]));
        assert!(c.delta(&b).is_nan());
    }

    #[test]
    fn no_centroids_yield_no_rows() {
        let ref points = [Point::from([1.0, 2.0]), Point::from([3.0, 4.0])];
        let u = Membership::calculate(points, &[], &Minkowski::default(), 2.0);
        assert_eq!(u.c(), 0);
        assert_eq!(u.n(), 0);
        assert_eq!(u.rows().count(), 0);
        assert_eq!(u.column(0).count(), 0);
        assert_eq!(serde_json::to_string(&u).unwrap(), "[]");
    }

    #[test]
    fn serializes_as_rows() {
        let u = Membership::from((2, vec![0.25, 0.75, 1.0, 0.0]));
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(json, "[[0.25,0.75],[1.0,0.0]]");
    }
}
