use super::*;
use crate::Energy;
use rand::Rng;

/// Axis-aligned bounding box of a point collection.
///
/// Stores the observed `[min_k, max_k]` of every dimension. Initial centroids
/// are drawn uniformly inside this box, one dimension at a time, and so are
/// replacements for centroids that lose all their weight during estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct Extent {
    lower: Vec<Energy>,
    upper: Vec<Energy>,
}

impl Extent {
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }
    pub fn lower(&self) -> &[Energy] {
        &self.lower
    }
    pub fn upper(&self) -> &[Energy] {
        &self.upper
    }
    /// Whether the point lies inside the box (bounds inclusive).
    pub fn contains(&self, point: &Point) -> bool {
        point
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }

    /// Draws one point uniformly inside the box.
    ///
    /// A dimension where every point agrees (min = max) yields that constant.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(lo, hi)| lo + rng.random::<Energy>() * (hi - lo))
            .collect()
    }

    /// Draws `c` initial centroids independently inside the box.
    pub fn centroids<R: Rng>(&self, c: usize, rng: &mut R) -> Vec<Centroid> {
        (0..c).map(|_| self.sample(rng)).collect()
    }
}

impl From<&[Point]> for Extent {
    fn from(points: &[Point]) -> Self {
        let d = points.first().map(Point::dimension).unwrap_or(0);
        let lower = (0..d)
            .map(|k| points.iter().map(|p| p[k]).fold(Energy::INFINITY, Energy::min))
            .collect();
        let upper = (0..d)
            .map(|k| points.iter().map(|p| p[k]).fold(Energy::NEG_INFINITY, Energy::max))
            .collect();
        Self { lower, upper }
    }
}
