//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is valid JSON but not an object
    NotAnObject,

    /// One or more required fields are absent (or null)
    MissingFields { fields: Vec<&'static str> },

    /// Field is present with the wrong JSON type
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// True when the error is about absent fields rather than malformed input.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingFields { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::MissingFields { fields } => {
                write!(f, "missing required field(s): {}", fields.join(", "))
            }
            Self::InvalidType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingFields {
            fields: vec!["age", "diagnosis"],
        };
        assert_eq!(err.to_string(), "missing required field(s): age, diagnosis");

        let err = ValidationError::InvalidType {
            field: "age",
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "age must be an integer");
    }

    #[test]
    fn missing_field_classification() {
        assert!(ValidationError::MissingFields { fields: vec!["name"] }.is_missing_field());
        assert!(!ValidationError::NotAnObject.is_missing_field());
    }
}
