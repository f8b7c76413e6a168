//! Record validation.
//!
//! Raw records arrive as decoded JSON objects. Each typed record declares a
//! static field table ([`Schema`]); [`validate`] checks a raw object against
//! that table and [`Record::from_value`] maps the checked object into the
//! typed struct. Construction either yields a complete record or fails with a
//! [`ValidationError`] listing every bad field by path.

pub mod error;
pub mod field;
pub mod validate;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::{FieldIssue, ValidationError};
pub use field::{defaulted, nullable_defaulted, optional, required, DefaultValue, FieldType, Schema};
pub use validate::validate;

/// A typed record backed by a declaration table.
pub trait Record: DeserializeOwned {
    fn schema() -> &'static Schema;

    /// Validate a decoded JSON value and build the record.
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let normalized = validate(Self::schema(), value)?;
        serde_json::from_value(normalized).map_err(|source| ValidationError::Mapping {
            record: Self::schema().name,
            source,
        })
    }

    /// Parse JSON text, then validate and build the record.
    fn from_json(text: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}
