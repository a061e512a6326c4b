//! Synthetic sample generation
//!
//! Normal values come from the Box–Muller transform; uniform values from a
//! symmetric range whose variance matches the requested standard deviation.
//! The reported statistics are always recomputed from the generated values,
//! never copied from the targets.

use crate::source::{RngSource, UniformSource};
use confidence_core::{DescriptiveStats, Error, Result};
use confidence_interval::SampleSummary;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Redraws allowed when the source keeps returning exactly zero
const MAX_ZERO_REDRAWS: usize = 64;

/// Shape of the generated sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Normal,
    Uniform,
}

impl Distribution {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "uniform" => Ok(Self::Uniform),
            other => Err(Error::invalid_synthesis(format!(
                "unknown distribution `{other}` (expected normal or uniform)"
            ))),
        }
    }
}

/// Generated values together with their realized statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSample {
    pub values: Vec<f64>,
    pub stats: DescriptiveStats,
    pub distribution: Distribution,
}

impl SyntheticSample {
    /// Realized statistics as input for the interval engine
    pub fn summary(&self) -> SampleSummary {
        SampleSummary::from(self.stats)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Draws synthetic samples from a [`UniformSource`]
#[derive(Debug, Clone)]
pub struct SampleSynthesizer<S> {
    source: S,
    precision: Option<u32>,
}

impl SampleSynthesizer<RngSource<StdRng>> {
    /// Synthesizer backed by an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_source(RngSource::entropy())
    }

    /// Synthesizer with a reproducible stream
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl Default for SampleSynthesizer<RngSource<StdRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSource> SampleSynthesizer<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            precision: None,
        }
    }

    /// Round each generated value to `decimals` places before statistics
    /// are computed
    pub fn with_precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals);
        self
    }

    /// Give back the underlying source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Generate `n` values with the given target mean and standard deviation.
    ///
    /// Fails with `InvalidSynthesisParameters` unless `n >= 1`, the target
    /// mean is finite and the target standard deviation is finite and positive.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(
        &mut self,
        distribution: Distribution,
        target_mean: f64,
        target_std_dev: f64,
        n: usize,
    ) -> Result<SyntheticSample> {
        if n < 1 {
            return Err(Error::invalid_synthesis("sample size must be at least 1"));
        }
        if !target_mean.is_finite() {
            return Err(Error::invalid_synthesis("target mean must be finite"));
        }
        if !(target_std_dev.is_finite() && target_std_dev > 0.0) {
            return Err(Error::invalid_synthesis(format!(
                "target standard deviation must be positive, got {target_std_dev}"
            )));
        }

        let mut values = Vec::with_capacity(n);
        match distribution {
            Distribution::Normal => {
                for _ in 0..n {
                    let z = self.standard_normal()?;
                    values.push(self.round(target_mean + target_std_dev * z));
                }
            }
            Distribution::Uniform => {
                // Var(U[a, b]) = (b - a)² / 12
                let range = target_std_dev * 12f64.sqrt();
                let lower = target_mean - range / 2.0;
                for _ in 0..n {
                    let u = self.source.next_uniform();
                    values.push(self.round(lower + range * u));
                }
            }
        }

        let stats = DescriptiveStats::from_values(&values)?;
        debug!(
            realized_mean = stats.mean,
            realized_std_dev = stats.std_dev,
            min = stats.min,
            max = stats.max,
            "sample synthesized"
        );

        Ok(SyntheticSample {
            values,
            stats,
            distribution,
        })
    }

    /// One standard normal variate via Box–Muller
    pub fn standard_normal(&mut self) -> Result<f64> {
        let u = self.nonzero_uniform()?;
        let v = self.nonzero_uniform()?;
        Ok((-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos())
    }

    /// Draw until the source yields something other than exactly zero
    fn nonzero_uniform(&mut self) -> Result<f64> {
        for _ in 0..MAX_ZERO_REDRAWS {
            let u = self.source.next_uniform();
            if u != 0.0 {
                return Ok(u);
            }
        }
        Err(Error::invalid_synthesis(
            "uniform source returned only zeros",
        ))
    }

    fn round(&self, value: f64) -> f64 {
        match self.precision {
            Some(decimals) => {
                let scale = 10f64.powi(decimals as i32);
                (value * scale).round() / scale
            }
            None => value,
        }
    }
}

/// Generate a sample from the process-wide entropy source
pub fn synthesize(
    distribution: Distribution,
    target_mean: f64,
    target_std_dev: f64,
    n: usize,
) -> Result<SyntheticSample> {
    SampleSynthesizer::new().generate(distribution, target_mean, target_std_dev, n)
}
