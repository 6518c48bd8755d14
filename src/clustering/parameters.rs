use super::*;
use crate::Energy;
use crate::Grade;
use std::ops::RangeInclusive;

/// Tuning surface of the clustering pipeline.
///
/// Every field is independently adjustable. Defaults come from the crate
/// constants; [`Parameters::validate`] rejects values outside their domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    /// Fuzzy exponent m (> 1).
    pub fuzziness: f64,
    /// Minkowski power p (> 0).
    pub power: f64,
    /// Convergence threshold ε on the largest membership change (≥ 0).
    pub tolerance: Grade,
    /// Trials per candidate count, and final restarts R (≥ 1).
    pub restarts: usize,
    /// Candidate cluster counts searched by the elbow heuristic.
    pub range: RangeInclusive<usize>,
    /// Iteration cap of a single trial.
    pub iterations: usize,
    /// Base seed. `None` draws a fresh one per optimization.
    pub seed: Option<u64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            fuzziness: crate::FUZZINESS,
            power: crate::DISTANCE_POWER,
            tolerance: crate::TERMINATION_CRITERIA,
            restarts: crate::RESTARTS,
            range: crate::MIN_CLUSTERS..=crate::MAX_CLUSTERS,
            iterations: crate::MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl Parameters {
    pub fn with_fuzziness(self, fuzziness: f64) -> Self {
        Self { fuzziness, ..self }
    }
    pub fn with_power(self, power: f64) -> Self {
        Self { power, ..self }
    }
    pub fn with_tolerance(self, tolerance: Grade) -> Self {
        Self { tolerance, ..self }
    }
    pub fn with_restarts(self, restarts: usize) -> Self {
        Self { restarts, ..self }
    }
    pub fn with_range(self, range: RangeInclusive<usize>) -> Self {
        Self { range, ..self }
    }
    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Minkowski metric of order `power`.
    pub fn metric(&self) -> Minkowski {
        Minkowski::from(self.power)
    }

    /// Checks every field against its domain.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.fuzziness.is_finite() && self.fuzziness > 1.0) {
            return Err(ConfigurationError::Fuzziness(self.fuzziness));
        }
        if !(self.power.is_finite() && self.power > 0.0) {
            return Err(ConfigurationError::Power(self.power));
        }
        if !(self.tolerance >= 0.0) {
            return Err(ConfigurationError::Tolerance(self.tolerance));
        }
        if self.restarts == 0 {
            return Err(ConfigurationError::Restarts);
        }
        let (lo, hi) = (*self.range.start(), *self.range.end());
        if lo == 0 || lo > hi {
            return Err(ConfigurationError::EmptyRange(lo, hi));
        }
        Ok(())
    }

    /// Exponent 2/(m-1) applied to distance ratios in the membership update.
    pub fn exponent(&self) -> Energy {
        2.0 / (self.fuzziness - 1.0)
    }
}
