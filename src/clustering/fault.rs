/// Invalid input or configuration, the only fault surfaced to callers.
///
/// Numerical edge cases (coincident points, empty clusters, non-convergence)
/// are recovered inside the algorithm and never show up here.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The feature group selected none of the record's fields.
    NoFeatures(String),
    /// Fuzzy exponent must be a finite number greater than 1.
    Fuzziness(f64),
    /// Minkowski power must be a finite positive number.
    Power(f64),
    /// Termination threshold must be non-negative.
    Tolerance(f64),
    /// At least one restart is required.
    Restarts,
    /// Candidate cluster counts must be a non-empty range starting at 1 or above.
    EmptyRange(usize, usize),
    /// Nothing to cluster.
    Empty,
    /// A point's dimension differs from the first point's.
    Ragged {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A point has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// Cluster count is zero or exceeds the number of points.
    Clusters { clusters: usize, points: usize },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFeatures(group) => write!(f, "feature group {} matches no fields", group),
            Self::Fuzziness(m) => write!(f, "fuzzy exponent must exceed 1, got {}", m),
            Self::Power(p) => write!(f, "distance power must be positive, got {}", p),
            Self::Tolerance(e) => write!(f, "termination threshold must be non-negative, got {}", e),
            Self::Restarts => write!(f, "restart count must be at least 1"),
            Self::EmptyRange(lo, hi) => write!(f, "invalid cluster count range {}..={}", lo, hi),
            Self::Empty => write!(f, "empty point collection"),
            Self::Ragged {
                index,
                expected,
                found,
            } => write!(
                f,
                "point {} has dimension {}, expected {}",
                index, found, expected
            ),
            Self::NonFinite { index } => write!(f, "point {} has a non-finite coordinate", index),
            Self::Clusters { clusters, points } => write!(
                f,
                "cannot form {} clusters from {} points",
                clusters, points
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}
