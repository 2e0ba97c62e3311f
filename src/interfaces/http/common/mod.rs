//! Shared HTTP building blocks

pub mod error;
pub mod validated_json;

pub use error::*;
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
