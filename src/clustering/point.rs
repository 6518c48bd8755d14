use crate::Energy;
use serde::Serialize;

/// One observation as an ordered sequence of `d` coordinates.
///
/// Every point of a dataset shares the same dimension. Centroids use the
/// same representation, so the alias [`Centroid`] is only a naming aid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Point(Vec<Energy>);

/// A cluster prototype, shaped like the points it summarizes.
pub type Centroid = Point;

impl Point {
    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    /// Coordinates in dimension order.
    pub fn coords(&self) -> &[Energy] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Energy> + '_ {
        self.0.iter()
    }
}

impl From<Vec<Energy>> for Point {
    fn from(coords: Vec<Energy>) -> Self {
        Self(coords)
    }
}

impl<const D: usize> From<[Energy; D]> for Point {
    fn from(coords: [Energy; D]) -> Self {
        Self(coords.to_vec())
    }
}

impl From<Point> for Vec<Energy> {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl std::ops::Index<usize> for Point {
    type Output = Energy;
    fn index(&self, k: usize) -> &Energy {
        &self.0[k]
    }
}

impl FromIterator<Energy> for Point {
    fn from_iter<I: IntoIterator<Item = Energy>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (k, x) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", x)?;
        }
        write!(f, ")")
    }
}
