//! Normal-theory interval engine
//!
//! All operations validate their inputs against the engine's [`StatBounds`]
//! before resolving the confidence level, and fail with the first violation
//! found. Nothing is defaulted: an unsupported level is an error, not 95%.

use crate::table::{ConfidenceLevel, IntoConfidenceLevel};
use crate::types::{
    ConfidenceInterval, DifferenceInterval, SampleSizeResult, SampleSummary, TwoPopulationSummary,
};
use confidence_core::{validate_required, Result, StatBounds, ValidationError, ValidationReason};
use tracing::{debug, instrument, warn};

/// Computes confidence intervals and required sample sizes
#[derive(Debug, Clone, Default)]
pub struct IntervalEngine {
    bounds: StatBounds,
}

impl IntervalEngine {
    /// Engine with the default statistical bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the validation bounds
    pub fn with_bounds(mut self, bounds: StatBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> &StatBounds {
        &self.bounds
    }

    /// Check mean, std_dev and sample_size, in that order
    pub fn validate_summary(
        &self,
        summary: &SampleSummary,
    ) -> std::result::Result<(), ValidationError> {
        validate_required(summary.mean, "mean", &self.bounds.mean_rule())?;
        validate_required(summary.std_dev, "std_dev", &self.bounds.std_dev_rule())?;
        validate_required(
            summary.sample_size,
            "sample_size",
            &self.bounds.sample_size_rule(),
        )?;
        Ok(())
    }

    /// Confidence interval for a single population mean
    #[instrument(level = "debug", skip(self, confidence_level))]
    pub fn compute_interval(
        &self,
        summary: &SampleSummary,
        confidence_level: impl IntoConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        self.validate_summary(summary)?;
        let level = confidence_level.into_confidence_level()?;

        let ci = ConfidenceInterval::centered(summary.mean, summary.standard_error(), level);
        debug!(lower = ci.lower, upper = ci.upper, margin = ci.margin, "interval computed");
        Ok(ci)
    }

    /// Confidence interval for `pop1.mean - pop2.mean`
    ///
    /// Population 1 is validated before population 2; the first failing field
    /// is reported with a `pop1.`/`pop2.` prefix.
    pub fn compute_two_population_interval(
        &self,
        summary: &TwoPopulationSummary,
    ) -> Result<DifferenceInterval> {
        self.compute_difference_interval(&summary.pop1, &summary.pop2, summary.confidence_level)
    }

    /// As [`IntervalEngine::compute_two_population_interval`] with the level given separately
    #[instrument(level = "debug", skip(self, confidence_level))]
    pub fn compute_difference_interval(
        &self,
        pop1: &SampleSummary,
        pop2: &SampleSummary,
        confidence_level: impl IntoConfidenceLevel,
    ) -> Result<DifferenceInterval> {
        self.validate_summary(pop1).map_err(|e| e.scoped("pop1"))?;
        self.validate_summary(pop2).map_err(|e| e.scoped("pop2"))?;
        let level = confidence_level.into_confidence_level()?;

        let diff_mean = pop1.mean - pop2.mean;
        // Unpooled variances, no degrees-of-freedom correction
        let standard_error = (pop1.std_dev.powi(2) / pop1.sample_size as f64
            + pop2.std_dev.powi(2) / pop2.sample_size as f64)
            .sqrt();
        let z_score = level.z_score();
        let margin = z_score * standard_error;

        let interval = DifferenceInterval {
            lower: diff_mean - margin,
            upper: diff_mean + margin,
            margin,
            standard_error,
            diff_mean,
            z_score,
            confidence_level: level,
        };
        debug!(
            diff_mean,
            lower = interval.lower,
            upper = interval.upper,
            "difference interval computed"
        );
        Ok(interval)
    }

    /// Smallest sample size whose margin of error does not exceed `margin`
    ///
    /// The result is rounded up and not capped; sizes outside the sample-size
    /// bounds are returned with a warning. A size that does not fit in `u64`
    /// is reported against `margin`.
    #[instrument(level = "debug", skip(self, confidence_level))]
    pub fn determine_sample_size(
        &self,
        margin: f64,
        std_dev: f64,
        confidence_level: impl IntoConfidenceLevel,
    ) -> Result<SampleSizeResult> {
        let margin = validate_required(margin, "margin", &self.bounds.margin_rule())?;
        let std_dev = validate_required(std_dev, "std_dev", &self.bounds.std_dev_rule())?;
        let level = confidence_level.into_confidence_level()?;

        let z_score = level.z_score();
        let required = (z_score * std_dev / margin).powi(2).ceil();
        // u64::MAX as f64 rounds up to 2^64, which is itself out of range
        if !(required.is_finite() && required < u64::MAX as f64) {
            return Err(ValidationError::new(
                "margin",
                ValidationReason::CustomConstraintViolation(format!(
                    "margin {margin} is too small for a representable sample size"
                )),
            )
            .into());
        }
        let sample_size = required as u64;

        if !self.bounds.sample_size.contains(required) {
            warn!(
                sample_size,
                min = self.bounds.sample_size.min,
                max = self.bounds.sample_size.max,
                "required sample size is outside the sample-size bounds"
            );
        }
        debug!(sample_size, "sample size determined");

        Ok(SampleSizeResult {
            sample_size,
            z_score,
            margin,
            std_dev,
            confidence_level: level,
        })
    }
}

/// Confidence interval at `level` using the default engine
pub fn compute_interval(
    summary: &SampleSummary,
    level: impl IntoConfidenceLevel,
) -> Result<ConfidenceInterval> {
    IntervalEngine::new().compute_interval(summary, level)
}

/// Difference interval using the default engine
pub fn compute_two_population_interval(
    summary: &TwoPopulationSummary,
) -> Result<DifferenceInterval> {
    IntervalEngine::new().compute_two_population_interval(summary)
}

/// Required sample size using the default engine
pub fn determine_sample_size(
    margin: f64,
    std_dev: f64,
    level: impl IntoConfidenceLevel,
) -> Result<SampleSizeResult> {
    IntervalEngine::new().determine_sample_size(margin, std_dev, level)
}

/// Intervals at every supported level, narrowest first
pub fn intervals_at_all_levels(summary: &SampleSummary) -> Result<Vec<ConfidenceInterval>> {
    let engine = IntervalEngine::new();
    ConfidenceLevel::ALL
        .iter()
        .map(|&level| engine.compute_interval(summary, level))
        .collect()
}
