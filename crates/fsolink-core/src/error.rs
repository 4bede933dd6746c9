//! Link budget error types

use thiserror::Error;

/// Result type for link budget operations
pub type FsoResult<T> = Result<T, FsoError>;

/// Errors that can occur while building a link budget
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FsoError {
    /// Input rejected by the validator: missing required fields or values
    /// out of range. The only error an end user should ever see.
    #[error("{}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    /// Logarithm of a non-positive power or linear value
    #[error("{name} must be positive, got {value}")]
    NonPositiveValue { name: &'static str, value: f64 },

    /// Non-positive diameter, wavelength, or distance reached a formula
    #[error("{name} must be positive, got {value}")]
    InvalidGeometry { name: &'static str, value: f64 },

    /// Efficiency outside the open interval (0, 1]
    #[error("Efficiency must be between 0 and 1, got {value}")]
    InvalidEfficiency { value: f64 },
}

impl FsoError {
    /// Build a validation error from the accumulated messages.
    pub fn validation(messages: Vec<String>) -> Self {
        FsoError::Validation { messages }
    }

    /// Check whether this is a user-facing validation error.
    ///
    /// Everything else signals an internal invariant violation: the
    /// validator enforces the same constraints the formulas require, so the
    /// formula-level errors cannot fire once validation has passed.
    pub fn is_validation(&self) -> bool {
        matches!(self, FsoError::Validation { .. })
    }

    /// The individual validation messages, if this is a validation error.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            FsoError::Validation { messages } => Some(messages),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = FsoError::validation(vec![
            "Wavelength must be positive".to_string(),
            "Distance must be positive".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Wavelength must be positive; Distance must be positive"
        );
    }

    #[test]
    fn test_is_validation() {
        let err = FsoError::validation(vec!["x".to_string()]);
        assert!(err.is_validation());
        assert_eq!(err.validation_messages().map(|m| m.len()), Some(1));

        let err = FsoError::NonPositiveValue {
            name: "Power",
            value: -3.0,
        };
        assert!(!err.is_validation());
        assert!(err.validation_messages().is_none());
    }

    #[test]
    fn test_domain_error_display() {
        let err = FsoError::InvalidGeometry {
            name: "Distance",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "Distance must be positive, got 0");

        let err = FsoError::InvalidEfficiency { value: 1.5 };
        assert_eq!(err.to_string(), "Efficiency must be between 0 and 1, got 1.5");
    }
}
