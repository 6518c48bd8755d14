//! Record vectorization.
//!
//! Records publish a static table of named numeric fields. A [`FeatureGroup`]
//! selects fields by name prefix once, when a [`VectorBuilder`] is built, and
//! every record is then read through the resolved accessors.
pub mod group;
pub use group::*;

pub mod record;
pub use record::*;

pub mod skill;
pub use skill::*;

pub mod vectorizer;
pub use vectorizer::*;
