//! Error types for confidence estimation
//!
//! Provides a unified error type for all confidence-stats crates. Every
//! failure is surfaced as a distinguishable value; nothing here is recovered
//! from internally.

use std::fmt;
use thiserror::Error;

/// Core error type for confidence estimation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Confidence level outside the supported set
    #[error("Unsupported confidence level: {0} (supported: 90, 95, 99)")]
    UnsupportedConfidenceLevel(f64),

    /// Descriptive statistics requested for an empty sample
    #[error("Empty sample: at least one value is required")]
    EmptySample,

    /// Synthesis requested with an unusable size or spread
    #[error("Invalid synthesis parameters: {0}")]
    InvalidSynthesisParameters(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside {90, 95, 99}
    pub fn unsupported_level(level: f64) -> Self {
        Self::UnsupportedConfidenceLevel(level)
    }

    /// Create an error for a rejected synthesis request
    pub fn invalid_synthesis(reason: impl Into<String>) -> Self {
        Self::InvalidSynthesisParameters(reason.into())
    }

    /// Whether this error came from field validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation failure, if any
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }

    /// The validation reason, if any
    pub fn validation_reason(&self) -> Option<&ValidationReason> {
        self.validation_error().map(|e| &e.reason)
    }
}

/// A single field that failed validation
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid field `{field}`: {message}")]
pub struct ValidationError {
    /// Name of the offending field (e.g. `mean`, `pop2.std_dev`)
    pub field: String,
    /// Which rule failed
    pub reason: ValidationReason,
    /// Human-readable message, possibly overridden by the rule
    pub message: String,
}

impl ValidationError {
    /// Create a validation error with the reason's default message
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        let message = reason.to_string();
        Self {
            field: field.into(),
            reason,
            message,
        }
    }

    /// Replace the message shown to callers
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Prefix the field name, e.g. `mean` -> `pop1.mean`
    pub fn scoped(mut self, scope: &str) -> Self {
        self.field = format!("{scope}.{}", self.field);
        self
    }
}

/// Why a field was rejected, in rule evaluation order
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationReason {
    /// Required field was absent or blank
    RequiredFieldMissing,
    /// Value could not be read as a finite number
    NotANumber,
    /// Value below the rule's minimum
    BelowMinimum { min: f64, value: f64 },
    /// Value above the rule's maximum
    AboveMaximum { max: f64, value: f64 },
    /// Integer or custom predicate failed
    CustomConstraintViolation(String),
}

impl ValidationReason {
    /// Stable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => "RequiredFieldMissing",
            Self::NotANumber => "NotANumber",
            Self::BelowMinimum { .. } => "BelowMinimum",
            Self::AboveMaximum { .. } => "AboveMaximum",
            Self::CustomConstraintViolation(_) => "CustomConstraintViolation",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFieldMissing => write!(f, "this field is required"),
            Self::NotANumber => write!(f, "must be a valid number"),
            Self::BelowMinimum { min, value } => write!(f, "{value} is below the minimum {min}"),
            Self::AboveMaximum { max, value } => write!(f, "{value} is above the maximum {max}"),
            Self::CustomConstraintViolation(msg) => write!(f, "{msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedConfidenceLevel(80.0);
        assert_eq!(
            err.to_string(),
            "Unsupported confidence level: 80 (supported: 90, 95, 99)"
        );

        let err = Error::EmptySample;
        assert_eq!(err.to_string(), "Empty sample: at least one value is required");

        let err = Error::invalid_synthesis("n must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid synthesis parameters: n must be at least 1"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(
            "std_dev",
            ValidationReason::BelowMinimum { min: 0.001, value: 0.0 },
        );
        assert_eq!(err.to_string(), "Invalid field `std_dev`: 0 is below the minimum 0.001");

        let err = err.with_message("standard deviation must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid field `std_dev`: standard deviation must be positive"
        );
    }

    #[test]
    fn test_scoped_field() {
        let err = ValidationError::new("mean", ValidationReason::NotANumber).scoped("pop2");
        assert_eq!(err.field, "pop2.mean");
    }

    #[test]
    fn test_from_validation_error() {
        let err: Error = ValidationError::new("mean", ValidationReason::RequiredFieldMissing).into();
        assert!(err.is_validation());
        assert_eq!(err.validation_reason(), Some(&ValidationReason::RequiredFieldMissing));
        // Transparent: display is the inner error's
        assert_eq!(err.to_string(), "Invalid field `mean`: this field is required");

        assert!(!Error::EmptySample.is_validation());
        assert!(Error::EmptySample.validation_reason().is_none());
    }

    #[test]
    fn test_reason_kinds() {
        assert_eq!(ValidationReason::RequiredFieldMissing.kind(), "RequiredFieldMissing");
        assert_eq!(ValidationReason::NotANumber.kind(), "NotANumber");
        assert_eq!(
            ValidationReason::BelowMinimum { min: 1.0, value: 0.0 }.kind(),
            "BelowMinimum"
        );
        assert_eq!(
            ValidationReason::AboveMaximum { max: 1.0, value: 2.0 }.kind(),
            "AboveMaximum"
        );
        assert_eq!(
            ValidationReason::CustomConstraintViolation("x".into()).kind(),
            "CustomConstraintViolation"
        );
    }
}
