//! Common types shared across the SST comparison crates.

pub mod composite;
pub mod error;
pub mod field;
pub mod range;

pub use composite::RawComposite;
pub use error::{SstError, SstResult};
pub use field::{AxisOrder, FieldMetadata, GriddedField};
pub use range::ValidRange;
