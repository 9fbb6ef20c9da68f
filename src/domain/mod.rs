//! Entity columns and validation rules.

pub mod field;
pub mod validate;

pub use field::{Field, FieldKind, PostField, UserField};
