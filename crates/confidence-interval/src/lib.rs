//! Normal-theory confidence interval estimation
//!
//! This crate provides:
//!
//! - **Confidence table**: the supported levels (90%, 95%, 99%) and their
//!   two-tailed z-scores
//! - **One-population intervals**: `mean ± z · s/√n`
//! - **Two-population intervals**: difference of means with unpooled
//!   (Welch-style) standard error
//! - **Sample-size planning**: the smallest `n` reaching a target margin
//!
//! # Overview
//!
//! Inputs are summary statistics. Raw observations can be summarised with
//! [`confidence_core::DescriptiveStats`] first. Every input is validated
//! against [`confidence_core::StatBounds`]; errors are returned, never
//! papered over.
//!
//! # Examples
//!
//! ## One population
//!
//! ```rust
//! use confidence_interval::{compute_interval, SampleSummary};
//!
//! let summary = SampleSummary::new(780.0, 40.0, 30);
//! let ci = compute_interval(&summary, 95.0).unwrap();
//! println!("95% CI: [{:.2}, {:.2}]", ci.lower, ci.upper);
//! assert!(ci.contains(780.0));
//! ```
//!
//! ## Sample size
//!
//! ```rust
//! use confidence_interval::{determine_sample_size, ConfidenceLevel};
//!
//! let plan = determine_sample_size(5.0, 40.0, ConfidenceLevel::NinetyFive).unwrap();
//! assert_eq!(plan.sample_size, 246);
//! ```

mod engine;
mod table;
mod types;

// Re-exports
pub use engine::{
    compute_interval, compute_two_population_interval, determine_sample_size,
    intervals_at_all_levels, IntervalEngine,
};
pub use table::{z_for, ConfidenceLevel, IntoConfidenceLevel};
pub use types::{
    ConfidenceInterval, DifferenceInterval, SampleSizeResult, SampleSummary, TwoPopulationSummary,
};
