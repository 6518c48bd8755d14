use super::*;
use crate::Energy;
use rand::Rng;

/// Synthetic fixture of isotropic Gaussian blobs.
///
/// Generates `size` points around each center with per-coordinate standard
/// deviation `spread`. Points are laid out center by center, so point `i`
/// belongs to blob `i / size`. Used to exercise convergence, elbow selection
/// and restarts on data whose true partition is known.
#[derive(Debug, Clone)]
pub struct Blobs<const D: usize> {
    centers: Vec<[Energy; D]>,
    spread: Energy,
    size: usize,
}

impl<const D: usize> Blobs<D> {
    pub fn new(centers: Vec<[Energy; D]>, spread: Energy, size: usize) -> Self {
        Self {
            centers,
            spread,
            size,
        }
    }
    /// Number of blobs.
    pub fn k(&self) -> usize {
        self.centers.len()
    }
    /// Total number of points.
    pub fn n(&self) -> usize {
        self.centers.len() * self.size
    }
    /// Blob that generated point `i`.
    pub fn label(&self, i: usize) -> usize {
        i / self.size
    }
    /// Samples every blob.
    pub fn points<R: Rng>(&self, rng: &mut R) -> Vec<Point> {
        self.centers
            .iter()
            .flat_map(|center| std::iter::repeat(center).take(self.size))
            .map(|center| {
                center
                    .iter()
                    .map(|x| x + self.spread * Self::normal(rng))
                    .collect::<Point>()
            })
            .collect()
    }
    /// Standard normal draw via Box-Muller.
    fn normal<R: Rng>(rng: &mut R) -> Energy {
        let u1 = 1.0 - rng.random::<Energy>();
        let u2 = rng.random::<Energy>();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}
