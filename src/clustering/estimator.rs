use super::*;
use crate::Energy;
use rand::Rng;

impl Membership {
    /// Re-estimates centroids as membership-weighted means of the points.
    ///
    /// `c_kj = Σ_i u_ik^m · x_ij / Σ_i u_ik^m`
    ///
    /// A cluster whose total weight vanishes has no mean. Its centroid is
    /// redrawn uniformly inside the data's bounding box instead, which keeps
    /// NaNs out of the next membership update.
    pub fn centroids<R: Rng>(
        &self,
        points: &[Point],
        fuzziness: f64,
        extent: &Extent,
        rng: &mut R,
    ) -> Vec<Centroid> {
        debug_assert_eq!(self.n(), points.len(), "membership rows != points");
        let d = extent.dimension();
        (0..self.c())
            .map(|k| {
                let (weight, sums) = self
                    .column(k)
                    .map(|u| u.powf(fuzziness))
                    .zip(points.iter())
                    .fold((0.0, vec![0.0; d]), |(weight, mut sums), (w, point)| {
                        sums.iter_mut()
                            .zip(point.iter())
                            .for_each(|(s, x)| *s += w * x);
                        (weight + w, sums)
                    });
                if weight > 0.0 && weight.is_finite() {
                    sums.into_iter().map(|s| s / weight).collect::<Centroid>()
                } else {
                    log::debug!("cluster {} lost all weight, redrawing centroid", k);
                    extent.sample(rng)
                }
            })
            .collect()
    }

    /// Total weight Σ_i u_ik^m carried by cluster `k`.
    pub fn weight(&self, k: usize, fuzziness: f64) -> Energy {
        self.column(k).map(|u| u.powf(fuzziness)).sum()
    }
}
