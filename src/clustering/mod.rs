//! Fuzzy C-Means clustering.
//!
//! ## Core Types
//!
//! - [`Point`] — One observation's selected features, also the shape of a centroid
//! - [`Membership`] — N×C fuzzy partition, every row summing to 1
//! - [`Run`] — Result of one converged (or capped) trial
//!
//! ## Algorithms
//!
//! - [`Minkowski`] — Generalized point distance
//! - [`Extent`] — Bounding box sampling for centroid initialization and recovery
//! - [`FuzzyCMeans`] — Alternating membership/centroid iteration until convergence
//! - [`Elbow`] — Cluster count selection by diminishing error improvement
//! - [`Optimizer`] — Elbow search followed by best-of-R restarts
pub mod elbow;
pub use elbow::*;

pub mod estimator;
pub use estimator::*;

pub mod extent;
pub use extent::*;

pub mod fault;
pub use fault::*;

pub mod fuzzy;
pub use fuzzy::*;

pub mod membership;
pub use membership::*;

pub mod minkowski;
pub use minkowski::*;

pub mod objective;
pub use objective::*;

pub mod optimizer;
pub use optimizer::*;

pub mod parameters;
pub use parameters::*;

pub mod point;
pub use point::*;

pub mod run;
pub use run::*;

pub mod seed;
pub use seed::Stage;

pub mod synthetic;
pub use synthetic::*;
