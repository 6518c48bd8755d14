use super::*;
use crate::Energy;
use rayon::prelude::*;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Cluster count selection by diminishing error improvement.
///
/// Every candidate count is clustered `restarts` times from fresh random
/// centroids and its errors are averaged. Scanning upward, the first step
/// whose improvement falls below `mean_error[lo] / ELBOW_RATIO` marks the
/// elbow, and the count just before that step is selected: the last count
/// that still paid for itself. Without such a step the largest candidate wins.
#[derive(Debug, Clone, Serialize)]
pub struct Elbow {
    /// (cluster count, mean error) for every candidate, in increasing count.
    curve: Vec<(usize, Energy)>,
    selected: usize,
}

impl Elbow {
    pub fn curve(&self) -> &[(usize, Energy)] {
        &self.curve
    }
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Runs the search over `range`.
    ///
    /// A range reaching past the number of points is clamped to it; a range
    /// starting past it cannot produce any partition and is rejected.
    pub fn search(
        fcm: &FuzzyCMeans,
        range: RangeInclusive<usize>,
        restarts: usize,
        base: u64,
    ) -> Result<Self, ConfigurationError> {
        let (lo, hi) = range.into_inner();
        if lo == 0 || lo > hi {
            return Err(ConfigurationError::EmptyRange(lo, hi));
        }
        if restarts == 0 {
            return Err(ConfigurationError::Restarts);
        }
        fcm.admit(lo)?;
        let hi = if hi > fcm.n() {
            log::warn!("clamping cluster count range {}..={} to {} points", lo, hi, fcm.n());
            fcm.n()
        } else {
            hi
        };
        log::info!("{:<32}{:<32}", "elbow searching", format!("{}..={}", lo, hi));
        let curve = (lo..=hi)
            .into_par_iter()
            .map(|c| Self::mean(fcm, c, restarts, base).map(|e| (c, e)))
            .collect::<Result<Vec<(usize, Energy)>, _>>()?;
        let selected = Self::select(&curve).ok_or(ConfigurationError::EmptyRange(lo, hi))?;
        log::info!("{:<32}{:<32}", "elbow selected", selected);
        Ok(Self { curve, selected })
    }

    /// Mean error of independent trials at count `c`.
    fn mean(
        fcm: &FuzzyCMeans,
        c: usize,
        restarts: usize,
        base: u64,
    ) -> Result<Energy, ConfigurationError> {
        let total = (0..restarts)
            .into_par_iter()
            .map(|t| fcm.trial(c, &mut seed::rng(base, Stage::Elbow, c, t)))
            .map(|run| run.map(|run| run.error))
            .collect::<Result<Vec<Energy>, _>>()?
            .into_iter()
            .sum::<Energy>();
        let mean = total / restarts as Energy;
        log::info!("{:<32}{:<32}", format!("elbow c = {}", c), format!("{:.6}", mean));
        Ok(mean)
    }

    /// Applies the elbow rule to a `(count, mean error)` curve.
    pub fn select(curve: &[(usize, Energy)]) -> Option<usize> {
        let &(_, first) = curve.first()?;
        let &(last, _) = curve.last()?;
        let threshold = first / crate::ELBOW_RATIO;
        curve
            .windows(2)
            .find(|w| w[0].1 - w[1].1 < threshold)
            .map(|w| w[0].0)
            .or(Some(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn selects_count_before_first_small_improvement() {
        // threshold = 10; 2->3 improves by 60, 3->4 by 5
        let curve = [(2, 100.0), (3, 40.0), (4, 35.0), (5, 34.0)];
        assert_eq!(Elbow::select(&curve), Some(3));
    }

    #[test]
    fn immediate_plateau_selects_first_count() {
        let curve = [(2, 100.0), (3, 95.0), (4, 10.0)];
        assert_eq!(Elbow::select(&curve), Some(2));
    }

    #[test]
    fn steady_improvement_selects_largest_count() {
        let curve = [(2, 100.0), (3, 80.0), (4, 60.0), (5, 40.0), (6, 20.0)];
        assert_eq!(Elbow::select(&curve), Some(6));
    }

    #[test]
    fn degenerate_curves() {
        assert_eq!(Elbow::select(&[]), None);
        assert_eq!(Elbow::select(&[(4, 12.0)]), Some(4));
    }

    #[test]
    fn rejects_invalid_ranges() {
        let ref points = [Point::from([0.0]), Point::from([1.0]), Point::from([2.0])];
        let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
        assert!(matches!(
            Elbow::search(&fcm, 3..=2, 4, 0),
            Err(ConfigurationError::EmptyRange(3, 2))
        ));
        assert!(matches!(
            Elbow::search(&fcm, 4..=6, 4, 0),
            Err(ConfigurationError::Clusters { clusters: 4, points: 3 })
        ));
        assert!(matches!(
            Elbow::search(&fcm, 1..=2, 0, 0),
            Err(ConfigurationError::Restarts)
        ));
    }

    #[test]
    fn range_is_clamped_to_point_count() {
        let ref points = [
            Point::from([0.0]),
            Point::from([1.0]),
            Point::from([5.0]),
            Point::from([6.0]),
        ];
        let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
        let elbow = Elbow::search(&fcm, 2..=15, 3, 1).unwrap();
        assert_eq!(elbow.curve().len(), 3);
        assert_eq!(elbow.curve().last().map(|&(c, _)| c), Some(4));
    }

    #[test]
    fn search_is_reproducible() {
        let blobs = Blobs::new(vec![[0.0, 0.0], [10.0, 10.0]], 0.5, 15);
        let ref points = blobs.points(&mut SmallRng::seed_from_u64(0));
        let fcm = FuzzyCMeans::new(points, &Parameters::default()).unwrap();
        let a = Elbow::search(&fcm, 2..=5, 4, 42).unwrap();
        let b = Elbow::search(&fcm, 2..=5, 4, 42).unwrap();
        assert_eq!(a.curve(), b.curve());
        assert_eq!(a.selected(), b.selected());
    }

    #[test]
    fn finds_three_separated_blobs() {
        let blobs = Blobs::new(vec![[0.0, 0.0], [20.0, 0.0], [10.0, 17.0]], 0.5, 25);
        let ref params = Parameters::default();
        let seeds = 0..10u64;
        let hits = seeds
            .clone()
            .map(|seed| {
                let ref points = blobs.points(&mut SmallRng::seed_from_u64(seed));
                let fcm = FuzzyCMeans::new(points, params).unwrap();
                let elbow =
                    Elbow::search(&fcm, params.range.clone(), params.restarts, 1000 + seed)
                        .unwrap();
                assert_eq!(elbow.curve().len(), 14);
                assert!(elbow.curve()[0].1 > elbow.curve()[1].1);
                elbow.selected()
            })
            .filter(|&c| c == 3)
            .count();
        assert!(hits * 2 > seeds.count(), "selected 3 in only {} of 10", hits);
    }
}
