use super::*;
use crate::Energy;

/// Minkowski distance of order `p`.
///
/// `d(a, b) = (Σ_k |a_k − b_k|^p)^(1/p)`
///
/// Order 2 is the Euclidean distance and takes a `sqrt` fast path; any other
/// positive order, integer or not, goes through `powf`. Symmetric, non-negative,
/// and zero exactly when the two points coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minkowski(f64);

impl Minkowski {
    pub fn power(&self) -> f64 {
        self.0
    }
    pub fn distance(&self, a: &Point, b: &Point) -> Energy {
        debug_assert_eq!(a.dimension(), b.dimension(), "mismatched dimensions");
        let diffs = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs());
        if self.0 == 2.0 {
            diffs.map(|d| d * d).sum::<Energy>().sqrt()
        } else {
            diffs.map(|d| d.powf(self.0)).sum::<Energy>().powf(1.0 / self.0)
        }
    }
}

impl Default for Minkowski {
    fn default() -> Self {
        Self(crate::DISTANCE_POWER)
    }
}

impl From<f64> for Minkowski {
    fn from(power: f64) -> Self {
        debug_assert!(power > 0.0, "non-positive minkowski power");
        Self(power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![
            Point::from([0.0, 0.0, 0.0]),
            Point::from([1.0, -2.0, 3.5]),
            Point::from([-4.25, 8.0, 0.125]),
            Point::from([1e-3, 1e3, -7.0]),
        ]
    }

    #[test]
    fn euclidean_matches_pythagoras() {
        let a = Point::from([0.0, 0.0]);
        let b = Point::from([3.0, 4.0]);
        assert!((Minkowski::default().distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn manhattan_sums_absolute_differences() {
        let a = Point::from([1.0, -1.0]);
        let b = Point::from([-2.0, 3.0]);
        assert!((Minkowski::from(1.0).distance(&a, &b) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn general_power_agrees_with_fast_path() {
        let ref a = Point::from([1.0, 2.0, 3.0]);
        let ref b = Point::from([-1.0, 0.5, 7.0]);
        let fast = Minkowski::from(2.0).distance(a, b);
        let slow = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs().powf(2.0))
            .sum::<f64>()
            .powf(0.5);
        assert!((fast - slow).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        for p in [0.5, 1.0, 1.5, 2.0, 3.0, 7.25] {
            let metric = Minkowski::from(p);
            for a in points().iter() {
                for b in points().iter() {
                    assert_eq!(metric.distance(a, b), metric.distance(b, a));
                }
            }
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        for p in [0.5, 1.0, 2.0, 3.0] {
            let metric = Minkowski::from(p);
            for a in points().iter() {
                assert_eq!(metric.distance(a, a), 0.0);
            }
        }
    }

    #[test]
    fn distance_is_positive_between_distinct_points() {
        let metric = Minkowski::from(1.5);
        let ref points = points();
        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                assert!(metric.distance(a, b) > 0.0);
            }
        }
    }
}
