//! Synthetic sample generation for demonstrations
//!
//! Generates normal (Box–Muller) or uniform samples around a target mean
//! and standard deviation, then reports the statistics the sample actually
//! has. The random source is pluggable through [`UniformSource`]: use
//! [`RngSource`] for real draws and [`ScriptedSource`] to replay an exact
//! sequence.
//!
//! # Example
//!
//! ```rust
//! use confidence_synth::{Distribution, SampleSynthesizer};
//!
//! let mut synth = SampleSynthesizer::seeded(42);
//! let sample = synth.generate(Distribution::Normal, 50.0, 10.0, 30).unwrap();
//! assert_eq!(sample.values.len(), 30);
//! println!("realized mean {:.2}, sd {:.2}", sample.stats.mean, sample.stats.std_dev);
//! ```

mod source;
mod synthesizer;

// Re-exports
pub use source::{RngSource, ScriptedSource, UniformSource};
pub use synthesizer::{synthesize, Distribution, SampleSynthesizer, SyntheticSample};
