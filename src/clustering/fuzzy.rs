use super::*;
use crate::Energy;
use crate::Grade;
use rand::Rng;

/// Fuzzy C-Means over a fixed, validated point collection.
///
/// Owns the pieces every trial shares (the metric, the data's bounding box,
/// the fuzzy exponent and the stopping rule) and borrows the points, which
/// stay immutable for the lifetime of the engine. Trials own everything they
/// mutate, so independent trials can run in parallel against one engine.
///
/// # Iteration
///
/// Starting from random centroids and the membership they induce:
/// 1. Re-estimate centroids from the current membership
/// 2. Recompute membership from the new centroids
/// 3. Stop once no grade moved by `tolerance` or more, or once the cap is hit
pub struct FuzzyCMeans<'a> {
    points: &'a [Point],
    extent: Extent,
    metric: Minkowski,
    fuzziness: f64,
    tolerance: Grade,
    iterations: usize,
}

impl<'a> FuzzyCMeans<'a> {
    /// Validates parameters and points.
    ///
    /// Rejects an empty collection, points whose dimension differs from
    /// the first point's, and points with NaN or infinite coordinates.
    pub fn new(points: &'a [Point], params: &Parameters) -> Result<Self, ConfigurationError> {
        params.validate()?;
        let expected = points
            .first()
            .map(Point::dimension)
            .ok_or(ConfigurationError::Empty)?;
        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.dimension() != expected)
        {
            return Err(ConfigurationError::Ragged {
                index,
                expected,
                found: point.dimension(),
            });
        }
        if let Some(index) = points
            .iter()
            .position(|p| p.iter().any(|x| !x.is_finite()))
        {
            return Err(ConfigurationError::NonFinite { index });
        }
        Ok(Self {
            points,
            extent: Extent::from(points),
            metric: params.metric(),
            fuzziness: params.fuzziness,
            tolerance: params.tolerance,
            iterations: params.iterations,
        })
    }

    pub fn points(&self) -> &[Point] {
        self.points
    }
    pub fn n(&self) -> usize {
        self.points.len()
    }
    pub fn extent(&self) -> &Extent {
        &self.extent
    }
    pub fn metric(&self) -> &Minkowski {
        &self.metric
    }
    pub fn fuzziness(&self) -> f64 {
        self.fuzziness
    }

    /// Rejects cluster counts that cannot partition the points.
    pub fn admit(&self, c: usize) -> Result<(), ConfigurationError> {
        if c == 0 || c > self.n() {
            Err(ConfigurationError::Clusters {
                clusters: c,
                points: self.n(),
            })
        } else {
            Ok(())
        }
    }

    /// Membership induced by a set of centroids.
    pub fn membership(&self, centroids: &[Centroid]) -> Membership {
        Membership::calculate(self.points, centroids, &self.metric, self.fuzziness)
    }
    /// Centroids implied by a membership.
    pub fn estimate<R: Rng>(&self, membership: &Membership, rng: &mut R) -> Vec<Centroid> {
        membership.centroids(self.points, self.fuzziness, &self.extent, rng)
    }
    /// Objective of a membership against its centroids.
    pub fn error(&self, membership: &Membership, centroids: &[Centroid]) -> Energy {
        membership.error(self.points, centroids, &self.metric, self.fuzziness)
    }

    /// One trial from random initialization to a final partition.
    pub fn trial<R: Rng>(&self, c: usize, rng: &mut R) -> Result<Run, ConfigurationError> {
        self.admit(c)?;
        let centroids = self.extent.centroids(c, rng);
        let membership = self.membership(&centroids);
        Ok(self.converge(membership, centroids, rng))
    }

    /// Alternates centroid estimation and membership updates.
    ///
    /// Always returns a usable run. When the cap is reached first the last
    /// partition is returned tagged [`Status::NonConvergence`]; a cap of zero
    /// hands back the initial membership and centroids untouched.
    pub fn converge<R: Rng>(
        &self,
        membership: Membership,
        centroids: Vec<Centroid>,
        rng: &mut R,
    ) -> Run {
        let mut membership = membership;
        let mut centroids = centroids;
        for t in 0..self.iterations {
            let next = self.estimate(&membership, rng);
            let updated = self.membership(&next);
            let delta = updated.delta(&membership);
            log::trace!("{:<32}{:<32}", format!("iteration {:>4}", t), delta);
            membership = updated;
            centroids = next;
            if delta < self.tolerance || delta == 0.0 {
                return self.finish(membership, centroids, Status::Converged(t + 1));
            }
        }
        log::warn!(
            "{:<32}{:<32}",
            format!("non-convergence at c = {}", centroids.len()),
            format!("cap {}", self.iterations)
        );
        self.finish(membership, centroids, Status::NonConvergence(self.iterations))
    }

    fn finish(&self, membership: Membership, centroids: Vec<Centroid>, status: Status) -> Run {
        let error = self.error(&membership, &centroids);
        Run {
            membership,
            centroids,
            error,
            status,
        }
    }
}
