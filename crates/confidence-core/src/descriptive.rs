//! Descriptive statistics over raw observations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Mean, spread and range of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    /// Bessel-corrected sample standard deviation; `0` for a single value
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sample_size: usize,
}

impl DescriptiveStats {
    /// Compute statistics from a sequence of values.
    ///
    /// Values are not rounded. A single observation has `std_dev == 0`.
    pub fn from_values(data: &[f64]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        let n = data.len();
        let mean = data.iter().sum::<f64>() / n as f64;

        let std_dev = if n > 1 {
            let ss = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
            (ss / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        let (min, max) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Ok(Self {
            mean,
            std_dev,
            min,
            max,
            sample_size: n,
        })
    }

    /// Parse a comma-separated list and compute its statistics
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_values(&parse_data_points(text))
    }

    /// Difference between the largest and smallest value
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Parse comma-separated data points.
///
/// Tokens that do not read as finite numbers are dropped, so `"1, x, 3"`
/// yields `[1.0, 3.0]`.
pub fn parse_data_points(text: &str) -> Vec<f64> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter_map(|t| t.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}
