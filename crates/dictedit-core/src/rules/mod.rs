pub mod validation;

pub use validation::{validate, validate_fields, ValidatedEntry};
