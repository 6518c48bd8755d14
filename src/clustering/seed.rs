use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Which pipeline stage a trial belongs to.
///
/// Part of the seed derivation so the elbow search and the final restarts
/// never replay the same initializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Elbow,
    Restart,
}

/// Deterministic per-trial random source.
///
/// Hashes `(base, stage, clusters, trial)` into an independent `SmallRng`
/// seed, so parallel trials never share or correlate their streams and a
/// fixed base reproduces the whole optimization.
pub fn rng(base: u64, stage: Stage, clusters: usize, trial: usize) -> SmallRng {
    let ref mut hasher = DefaultHasher::default();
    base.hash(hasher);
    stage.hash(hasher);
    clusters.hash(hasher);
    trial.hash(hasher);
    SmallRng::seed_from_u64(hasher.finish())
}

/// A fresh base seed from the thread-local generator.
pub fn entropy() -> u64 {
    use rand::Rng;
    rand::rng().random()
}
