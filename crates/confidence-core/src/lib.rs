//! Core types for confidence estimation
//!
//! This crate provides the pieces shared by the interval engine and the
//! sample synthesizer:
//!
//! - **Errors**: one [`Error`] enum covering validation, unsupported
//!   confidence levels, empty samples and bad synthesis requests
//! - **Validation**: declarative [`FieldRule`]s applied by [`validate`]
//! - **Descriptive statistics**: mean, Bessel-corrected standard deviation,
//!   min and max via [`DescriptiveStats`]
//!
//! # Example
//!
//! ```rust
//! use confidence_core::{validate, DescriptiveStats, FieldRule, StatBounds};
//!
//! let stats = DescriptiveStats::from_text("12.5, 14.3, 11.9, 13.2").unwrap();
//! assert_eq!(stats.sample_size, 4);
//!
//! let rule = StatBounds::default().sample_size_rule();
//! assert!(validate("30", "sample_size", &rule).is_ok());
//! assert!(validate("30.5", "sample_size", &rule).is_err());
//! ```

pub mod descriptive;
pub mod error;
pub mod validation;

// Re-export core types
pub use descriptive::{parse_data_points, DescriptiveStats};
pub use error::{Error, Result, ValidationError, ValidationReason};
pub use validation::{
    validate, validate_required, Bounds, CustomRule, FieldInput, FieldRule, NumberKind,
    StatBounds,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
