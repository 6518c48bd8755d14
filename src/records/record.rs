use crate::Energy;

/// A named numeric field of a record type.
pub struct Field<R> {
    name: &'static str,
    read: fn(&R) -> Energy,
}

impl<R> Field<R> {
    pub const fn new(name: &'static str, read: fn(&R) -> Energy) -> Self {
        Self { name, read }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn read(&self, record: &R) -> Energy {
        (self.read)(record)
    }
}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

/// A record with a fixed, named set of numeric fields.
///
/// The table is static so field selection can be resolved before any record
/// is seen, and its order fixes the order of point coordinates.
pub trait Record: Sized + 'static {
    fn fields() -> &'static [Field<Self>];
}
