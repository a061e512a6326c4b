//! Confidence interval estimation from sample statistics
//!
//! This crate re-exports the workspace members:
//!
//! - [`confidence_core`]: errors, field validation and descriptive statistics
//! - [`confidence_interval`]: confidence table, interval engine and
//!   sample-size planning
//! - [`confidence_synth`]: synthetic normal/uniform samples for demonstrations
//!
//! All three input paths (summary statistics, raw values, synthetic data)
//! end in the same [`IntervalEngine`](confidence_interval::IntervalEngine).
//!
//! # Example
//!
//! ```rust
//! use confidence_stats::prelude::*;
//!
//! // Raw values
//! let stats = DescriptiveStats::from_text("12.5, 14.3, 11.9, 13.2").unwrap();
//! let ci = compute_interval(&SampleSummary::from(stats), ConfidenceLevel::Ninety).unwrap();
//! assert!(ci.contains(stats.mean));
//!
//! // Synthetic data
//! let sample = SampleSynthesizer::seeded(1)
//!     .generate(Distribution::Normal, 50.0, 10.0, 30)
//!     .unwrap();
//! let ci = compute_interval(&sample.summary(), 95.0).unwrap();
//! assert!(ci.lower < ci.upper);
//! ```

// Re-export workspace crates
pub use confidence_core;
pub use confidence_interval;
pub use confidence_synth;

pub use confidence_core::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use confidence_core::{
        parse_data_points, validate, DescriptiveStats, Error, FieldInput, FieldRule, Result,
        StatBounds, ValidationError, ValidationReason,
    };
    pub use confidence_interval::{
        compute_interval, compute_two_population_interval, determine_sample_size,
        ConfidenceInterval, ConfidenceLevel, DifferenceInterval, IntervalEngine,
        SampleSizeResult, SampleSummary, TwoPopulationSummary,
    };
    pub use confidence_synth::{
        synthesize, Distribution, RngSource, SampleSynthesizer, ScriptedSource,
        SyntheticSample, UniformSource,
    };
}
