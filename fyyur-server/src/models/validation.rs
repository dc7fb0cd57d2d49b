//! Validation error types

use std::fmt;

/// Validation error for submitted form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or blank
    Empty { field: &'static str },

    /// Field exceeds the column width
    TooLong { field: &'static str, max: usize },

    /// Value doesn't parse (URL, id, timestamp)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value is not one of the allowed choices
    InvalidChoice { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidChoice { field, value } => {
                write!(f, "'{}' is not a valid choice for {}", value, field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim a required field, rejecting blanks and values wider than `max`.
pub(crate) fn required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    bounded(field, trimmed, max)?;
    Ok(trimmed.to_owned())
}

/// Trim an optional field; blank input becomes `None`.
pub(crate) fn optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            bounded(field, v, max)?;
            Ok(Some(v.to_owned()))
        }
        None => Ok(None),
    }
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "city",
            max: 120,
        };
        assert_eq!(err.to_string(), "city exceeds maximum length of 120 characters");

        let err = ValidationError::InvalidChoice {
            field: "state",
            value: "ZZ".into(),
        };
        assert_eq!(err.to_string(), "'ZZ' is not a valid choice for state");
    }

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("name", "  Hop ", 10).unwrap(), "Hop");
        assert_eq!(
            required("name", "   ", 10).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional("phone", Some("  "), 10).unwrap(), None);
        assert_eq!(optional("phone", None, 10).unwrap(), None);
        assert_eq!(
            optional("phone", Some("555"), 10).unwrap(),
            Some("555".to_owned())
        );
        assert!(matches!(
            optional("phone", Some("12345678901"), 10),
            Err(ValidationError::TooLong { max: 10, .. })
        ));
    }
}
