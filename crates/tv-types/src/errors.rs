//! Validation error types

use thiserror::Error;

/// Structural validation failure for a single untyped record.
///
/// Names the offending field (dotted/indexed path for nested antenna
/// entries, e.g. `antennas[2].technology`) and the violated constraint.
/// Validation is structural and type-level only; no cross-field or
/// cross-record rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` has the wrong type (expected {expected})")]
    WrongType { field: String, expected: &'static str },
}

impl ValidationError {
    /// Prefix the field path, turning e.g. `technology` into
    /// `antennas[2].technology` when validating a nested antenna entry.
    pub fn nested(self, prefix: &str) -> Self {
        match self {
            Self::NotAnObject => Self::WrongType {
                field: prefix.to_string(),
                expected: "object",
            },
            Self::MissingField(field) => Self::MissingField(format!("{prefix}.{field}")),
            Self::WrongType { field, expected } => Self::WrongType {
                field: format!("{prefix}.{field}"),
                expected,
            },
        }
    }
}
