//! Field-level validation shared by the entity drafts.
//!
//! Every text column has a maximum width. Drafts arrive with optional fields
//! so a missing value can be reported against the field that lacks it rather
//! than as an opaque deserialisation failure.

use std::fmt;

/// A single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was not supplied.
    Missing { field: &'static str },
    /// A required field only contained whitespace.
    Blank { field: &'static str },
    /// The value is wider than its column.
    TooLong { field: &'static str, max: usize },
}

impl FieldError {
    /// Name of the offending field as it appears in request bodies.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Blank { field } | Self::TooLong { field, .. } => field,
        }
    }

    /// Machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::Blank { .. } => "blank_field",
            Self::TooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field: {field}"),
            Self::Blank { field } => write!(f, "{field} must not be blank"),
            Self::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for FieldError {}

fn check_width(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }
    Ok(())
}

/// Validate a required text field.
pub(crate) fn required(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<String, FieldError> {
    let value = value.ok_or(FieldError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(FieldError::Blank { field });
    }
    check_width(field, &value, max)?;
    Ok(value)
}

/// Validate an optional text field. Blank input is stored as absent.
pub(crate) fn optional(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, FieldError> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            check_width(field, &value, max)?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, FieldError::Missing { field: "pin" })]
    #[case(Some("  "), FieldError::Blank { field: "pin" })]
    #[case(Some("1234567"), FieldError::TooLong { field: "pin", max: 6 })]
    fn required_rejects(#[case] input: Option<&str>, #[case] expected: FieldError) {
        let err = required("pin", input.map(str::to_owned), 6).expect_err("must reject");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn required_counts_characters_not_bytes() {
        let value = required("firstname", Some("Zoë".to_owned()), 3).expect("three chars");
        assert_eq!(value, "Zoë");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(" "), None)]
    #[case(Some("Flat 4"), Some("Flat 4"))]
    fn optional_treats_blank_as_absent(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        let value = optional("address_line2", input.map(str::to_owned), 100).expect("valid");
        assert_eq!(value.as_deref(), expected);
    }

    #[rstest]
    fn optional_still_checks_width() {
        let err = optional("address_line2", Some("x".repeat(101)), 100).expect_err("too long");
        assert_eq!(err.code(), "too_long");
        assert_eq!(err.field(), "address_line2");
    }
}
