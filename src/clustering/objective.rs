use super::*;
use crate::Energy;

impl Membership {
    /// Fuzzy clustering objective of a partition against its centroids.
    ///
    /// `J = Σ_i Σ_k u_ik^m · d(x_i, c_k)^2`
    ///
    /// Lower is tighter and more confident. This is the quantity the
    /// alternating updates minimize, so it ranks both restarts and
    /// candidate cluster counts.
    pub fn error(
        &self,
        points: &[Point],
        centroids: &[Centroid],
        metric: &Minkowski,
        fuzziness: f64,
    ) -> Energy {
        debug_assert_eq!(self.c(), centroids.len(), "membership columns != centroids");
        self.rows()
            .zip(points.iter())
            .map(|(row, point)| {
                row.iter()
                    .zip(centroids.iter())
                    .map(|(u, centroid)| (u.powf(fuzziness), metric.distance(point, centroid)))
                    .map(|(w, d)| w * d * d)
                    .sum::<Energy>()
            })
            .sum()
    }
}
