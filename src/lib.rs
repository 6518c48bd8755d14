//! Fuzzy C-Means clustering with automatic cluster count selection.
//!
//! Points are derived once from labeled records, then clustered into an
//! unknown number of overlapping groups. The cluster count is picked by an
//! elbow search over a range of candidates, and the final partition is the
//! lowest-error run among independent restarts.
//!
//! ## Modules
//!
//! - [`records`] — Record vectorization by feature group
//! - [`clustering`] — Distance, initialization, membership, estimation, convergence and selection

pub mod clustering;
pub mod records;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coordinates, distances, and clustering error.
pub type Energy = f64;
/// Degree of membership of a point in a cluster, in [0, 1].
pub type Grade = f64;

// ============================================================================
// FUZZY C-MEANS
// u_ik = 1 / Σ_j (d_ik / d_ij)^(2/(m-1)), c_k = Σ_i u_ik^m x_i / Σ_i u_ik^m
// ============================================================================
/// Fuzzy exponent (m). Higher values produce softer memberships. Must exceed 1.
pub const FUZZINESS: f64 = 2.0;
/// Minkowski power (p) of the point-centroid distance. 2 is Euclidean.
pub const DISTANCE_POWER: f64 = 2.0;
/// Largest change of any membership grade between iterations that counts as converged.
pub const TERMINATION_CRITERIA: Grade = 0.1;
/// Hard cap on alternating iterations per trial.
pub const MAX_ITERATIONS: usize = 1024;

// ============================================================================
// MODEL SELECTION
// Elbow search over [MIN_CLUSTERS, MAX_CLUSTERS], then best-of-RESTARTS.
// ============================================================================
/// Independent trials per candidate cluster count, and final restarts.
pub const RESTARTS: usize = 10;
/// Smallest candidate cluster count of the elbow search.
pub const MIN_CLUSTERS: usize = 2;
/// Largest candidate cluster count of the elbow search.
pub const MAX_CLUSTERS: usize = 15;
/// Significant improvement threshold is the first mean error divided by this.
pub const ELBOW_RATIO: Energy = 10.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/fcm-{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
