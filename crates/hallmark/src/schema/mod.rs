//! Schema types for representing cataloged column metadata.

mod field;
mod types;

pub use field::Field;
pub use types::{BaseType, SpecialType};
