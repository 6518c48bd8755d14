use super::*;
use crate::clustering::ConfigurationError;
use crate::clustering::Point;

/// Turns records into fixed-dimension points.
///
/// The feature group is resolved against the record's field table once, at
/// construction. Building points afterwards is a plain read of the selected
/// accessors, in table order, for every record.
pub struct VectorBuilder<R: Record> {
    group: FeatureGroup,
    fields: Vec<&'static Field<R>>,
}

impl<R: Record> VectorBuilder<R> {
    /// Resolves `group` against `R`'s fields.
    ///
    /// Fails when the group selects nothing.
    pub fn new(group: FeatureGroup) -> Result<Self, ConfigurationError> {
        let fields = R::fields()
            .iter()
            .filter(|f| group.admits(f.name()))
            .collect::<Vec<_>>();
        if fields.is_empty() {
            return Err(ConfigurationError::NoFeatures(group.to_string()));
        }
        log::debug!("{:<32}{:<32}", format!("vectorizing {}", group), fields.len());
        Ok(Self { group, fields })
    }
    pub fn group(&self) -> FeatureGroup {
        self.group
    }
    /// Dimension of every produced point.
    pub fn dimension(&self) -> usize {
        self.fields.len()
    }
    /// Names of the selected fields, in coordinate order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name()).collect()
    }
    pub fn point(&self, record: &R) -> Point {
        self.fields.iter().map(|f| f.read(record)).collect()
    }
    pub fn build(&self, records: &[R]) -> Vec<Point> {
        records.iter().map(|r| self.point(r)).collect()
    }
}
