//! Input summaries and result records for interval estimation

use crate::table::ConfidenceLevel;
use confidence_core::{validate_required, DescriptiveStats, FieldInput, Result, StatBounds};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics of one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub sample_size: u64,
}

impl SampleSummary {
    pub fn new(mean: f64, std_dev: f64, sample_size: u64) -> Self {
        Self {
            mean,
            std_dev,
            sample_size,
        }
    }

    /// Build a summary from raw field values, validating each against the
    /// default bounds in the order mean, std_dev, sample_size
    pub fn from_fields(
        mean: impl Into<FieldInput>,
        std_dev: impl Into<FieldInput>,
        sample_size: impl Into<FieldInput>,
    ) -> Result<Self> {
        Self::from_fields_with_bounds(mean, std_dev, sample_size, &StatBounds::default())
    }

    /// As [`SampleSummary::from_fields`] with explicit bounds
    pub fn from_fields_with_bounds(
        mean: impl Into<FieldInput>,
        std_dev: impl Into<FieldInput>,
        sample_size: impl Into<FieldInput>,
        bounds: &StatBounds,
    ) -> Result<Self> {
        let mean = validate_required(mean, "mean", &bounds.mean_rule())?;
        let std_dev = validate_required(std_dev, "std_dev", &bounds.std_dev_rule())?;
        let sample_size = validate_required(sample_size, "sample_size", &bounds.sample_size_rule())?;
        Ok(Self::new(mean, std_dev, sample_size as u64))
    }

    /// Standard error of the mean, `std_dev / sqrt(n)`
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.sample_size as f64).sqrt()
    }
}

impl From<DescriptiveStats> for SampleSummary {
    fn from(stats: DescriptiveStats) -> Self {
        Self::new(stats.mean, stats.std_dev, stats.sample_size as u64)
    }
}

/// Two independent samples compared at one confidence level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoPopulationSummary {
    pub pop1: SampleSummary,
    pub pop2: SampleSummary,
    pub confidence_level: ConfidenceLevel,
}

impl TwoPopulationSummary {
    pub fn new(pop1: SampleSummary, pop2: SampleSummary, confidence_level: ConfidenceLevel) -> Self {
        Self {
            pop1,
            pop2,
            confidence_level,
        }
    }

    /// Same comparison with the populations exchanged
    pub fn swapped(&self) -> Self {
        Self::new(self.pop2, self.pop1, self.confidence_level)
    }
}

/// Confidence interval for a single population mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Half-width, `z_score * standard_error`
    pub margin: f64,
    pub standard_error: f64,
    pub z_score: f64,
    pub confidence_level: ConfidenceLevel,
}

impl ConfidenceInterval {
    /// Interval centred on `estimate`
    pub fn centered(
        estimate: f64,
        standard_error: f64,
        confidence_level: ConfidenceLevel,
    ) -> Self {
        let z_score = confidence_level.z_score();
        let margin = z_score * standard_error;
        Self {
            lower: estimate - margin,
            upper: estimate + margin,
            margin,
            standard_error,
            z_score,
            confidence_level,
        }
    }

    /// Point estimate (center of interval)
    pub fn estimate(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CI: [{:.2}, {:.2}], margin: {:.2}",
            self.confidence_level, self.lower, self.upper, self.margin
        )
    }
}

/// Confidence interval for the difference of two population means
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub margin: f64,
    /// `sqrt(s1²/n1 + s2²/n2)`
    pub standard_error: f64,
    /// `pop1.mean - pop2.mean`
    pub diff_mean: f64,
    pub z_score: f64,
    pub confidence_level: ConfidenceLevel,
}

impl DifferenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Whether "no difference" lies inside the interval
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }
}

impl fmt::Display for DifferenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CI for mean difference {:.2}: [{:.2}, {:.2}]",
            self.confidence_level, self.diff_mean, self.lower, self.upper
        )
    }
}

/// Sample size needed to reach a target margin of error
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    /// `ceil((z_score * std_dev / margin)²)`
    pub sample_size: u64,
    pub z_score: f64,
    pub margin: f64,
    pub std_dev: f64,
    pub confidence_level: ConfidenceLevel,
}

impl SampleSizeResult {
    /// Margin actually achieved with `sample_size` observations; never above `margin`
    pub fn realized_margin(&self) -> f64 {
        self.z_score * self.std_dev / (self.sample_size as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::centered(5.0, 1.0, ConfidenceLevel::NinetyFive);

        assert_relative_eq!(ci.margin, 1.96);
        assert_relative_eq!(ci.width(), 3.92, epsilon = 1e-12);
        assert_relative_eq!(ci.estimate(), 5.0, epsilon = 1e-12);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(2.0));
        assert!(!ci.contains(7.0));
    }

    #[test]
    fn test_overlap() {
        let ci1 = ConfidenceInterval::centered(4.0, 1.0, ConfidenceLevel::Ninety);
        let ci2 = ConfidenceInterval::centered(6.0, 1.0, ConfidenceLevel::Ninety);
        let ci3 = ConfidenceInterval::centered(10.0, 1.0, ConfidenceLevel::Ninety);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
    }

    #[test]
    fn test_confidence_interval_display() {
        let ci = ConfidenceInterval::centered(780.0, 40.0 / 30f64.sqrt(), ConfidenceLevel::NinetyFive);
        assert_eq!(ci.to_string(), "95% CI: [765.69, 794.31], margin: 14.31");
    }

    #[test]
    fn test_difference_contains_zero() {
        let diff = DifferenceInterval {
            lower: -1.0,
            upper: 3.0,
            margin: 2.0,
            standard_error: 2.0 / 1.96,
            diff_mean: 1.0,
            z_score: 1.96,
            confidence_level: ConfidenceLevel::NinetyFive,
        };
        assert!(diff.contains_zero());
        assert_eq!(diff.width(), 4.0);
        assert_eq!(
            diff.to_string(),
            "95% CI for mean difference 1.00: [-1.00, 3.00]"
        );

        let shifted = DifferenceInterval {
            lower: 0.5,
            upper: 4.5,
            ..diff
        };
        assert!(!shifted.contains_zero());
    }

    #[test]
    fn test_summary_from_fields() {
        let summary = SampleSummary::from_fields("780", "40", "30").unwrap();
        assert_eq!(summary, SampleSummary::new(780.0, 40.0, 30));

        // A zero mean is present, not missing
        let summary = SampleSummary::from_fields(0.0, 1.0, 2u32).unwrap();
        assert_eq!(summary.mean, 0.0);

        let err = SampleSummary::from_fields("", "40", "30").unwrap_err();
        assert_eq!(err.validation_error().unwrap().field, "mean");

        let err = SampleSummary::from_fields("1", "40", "30.5").unwrap_err();
        assert_eq!(err.validation_error().unwrap().field, "sample_size");
    }

    #[test]
    fn test_summary_from_descriptive() {
        let stats = DescriptiveStats::from_values(&[1.0, 2.0, 3.0]).unwrap();
        let summary = SampleSummary::from(stats);
        assert_eq!(summary.sample_size, 3);
        assert_relative_eq!(summary.mean, 2.0);
        assert_relative_eq!(summary.standard_error(), 1.0 / 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_realized_margin() {
        let result = SampleSizeResult {
            sample_size: 246,
            z_score: 1.96,
            margin: 5.0,
            std_dev: 40.0,
            confidence_level: ConfidenceLevel::NinetyFive,
        };
        assert!(result.realized_margin() <= result.margin);
    }
}
