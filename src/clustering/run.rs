use super::*;
use crate::Energy;
use serde::Serialize;

/// How a trial's iteration ended.
///
/// Both variants carry a usable partition; `NonConvergence` only reports that the
/// iteration cap was hit before the membership change fell under the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "iterations", rename_all = "snake_case")]
pub enum Status {
    Converged(usize),
    NonConvergence(usize),
}

impl Status {
    pub fn converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }
    pub fn iterations(&self) -> usize {
        match self {
            Self::Converged(t) | Self::NonConvergence(t) => *t,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converged(t) => write!(f, "converged after {} iterations", t),
            Self::NonConvergence(t) => write!(f, "did not converge within {} iterations", t),
        }
    }
}

/// Outcome of one full clustering trial at a fixed cluster count.
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    pub membership: Membership,
    pub centroids: Vec<Centroid>,
    pub error: Energy,
    pub status: Status,
}

impl Run {
    /// Number of clusters.
    pub fn c(&self) -> usize {
        self.centroids.len()
    }
    /// Dominant cluster of every point.
    pub fn assignments(&self) -> Vec<usize> {
        (0..self.membership.n())
            .map(|i| self.membership.dominant(i))
            .collect()
    }
}
