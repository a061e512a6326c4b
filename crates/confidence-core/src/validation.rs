//! Field validation for numeric inputs
//!
//! A [`FieldRule`] describes the constraints on one field; [`validate`]
//! applies them in a fixed order and reports the first violation:
//!
//! 1. required and absent/blank -> `RequiredFieldMissing`
//! 2. optional and absent/blank -> `Ok(None)`
//! 3. not a finite number -> `NotANumber`
//! 4. below `min` -> `BelowMinimum`
//! 5. above `max` -> `AboveMaximum`
//! 6. integer kind with a fractional value, or custom predicate false ->
//!    `CustomConstraintViolation`
//!
//! Presence is explicit: a value of `0` is present and is checked against the
//! bounds like any other number.

use crate::error::{Result, ValidationError, ValidationReason};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw field value as handed over by an input layer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldInput {
    /// Nothing was provided
    #[default]
    Absent,
    /// Text that still has to be read as a number
    Text(String),
    /// An already-numeric value
    Number(f64),
}

impl FieldInput {
    /// Absent, or text that is empty after trimming
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Read the value as a finite number
    fn coerce(&self) -> Option<f64> {
        let value = match self {
            Self::Absent => return None,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Number(v) => *v,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for FieldInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldInput {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for FieldInput {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for FieldInput {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for FieldInput {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<FieldInput>> From<Option<T>> for FieldInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Numeric kind a field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberKind {
    #[default]
    Number,
    Integer,
}

/// Extra predicate with the message reported when it fails
#[derive(Debug, Clone)]
pub struct CustomRule {
    pub predicate: fn(f64) -> bool,
    pub message: String,
}

/// Constraints for a single numeric field
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub kind: NumberKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Overrides the message for both bound violations
    pub range_message: Option<String>,
    pub custom: Option<CustomRule>,
}

impl FieldRule {
    /// Optional real-valued field with no bounds
    pub fn number() -> Self {
        Self::default()
    }

    /// Optional integer field with no bounds
    pub fn integer() -> Self {
        Self {
            kind: NumberKind::Integer,
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Inclusive range `[bounds.min, bounds.max]`
    pub fn within(self, bounds: Bounds) -> Self {
        self.min(bounds.min).max(bounds.max)
    }

    pub fn range_message(mut self, message: impl Into<String>) -> Self {
        self.range_message = Some(message.into());
        self
    }

    pub fn custom(mut self, predicate: fn(f64) -> bool, message: impl Into<String>) -> Self {
        self.custom = Some(CustomRule {
            predicate,
            message: message.into(),
        });
        self
    }

    fn fail(&self, field: &str, reason: ValidationReason) -> ValidationError {
        let bound_violation = matches!(
            reason,
            ValidationReason::BelowMinimum { .. } | ValidationReason::AboveMaximum { .. }
        );
        let err = ValidationError::new(field, reason);
        match &self.range_message {
            Some(msg) if bound_violation => err.with_message(msg.clone()),
            _ => err,
        }
    }
}

/// Validate one field against its rule.
///
/// Returns `Ok(None)` only for an optional field that was left empty.
pub fn validate(
    value: impl Into<FieldInput>,
    field: &str,
    rule: &FieldRule,
) -> std::result::Result<Option<f64>, ValidationError> {
    let input = value.into();

    if input.is_empty() {
        if rule.required {
            debug!(field, "required field missing");
            return Err(rule.fail(field, ValidationReason::RequiredFieldMissing));
        }
        return Ok(None);
    }

    let value = input
        .coerce()
        .ok_or_else(|| rule.fail(field, ValidationReason::NotANumber))?;

    if let Some(min) = rule.min {
        if value < min {
            debug!(field, value, min, "value below minimum");
            return Err(rule.fail(field, ValidationReason::BelowMinimum { min, value }));
        }
    }

    if let Some(max) = rule.max {
        if value > max {
            debug!(field, value, max, "value above maximum");
            return Err(rule.fail(field, ValidationReason::AboveMaximum { max, value }));
        }
    }

    if rule.kind == NumberKind::Integer && value.fract() != 0.0 {
        return Err(rule.fail(
            field,
            ValidationReason::CustomConstraintViolation("must be an integer".to_string()),
        ));
    }

    if let Some(custom) = &rule.custom {
        if !(custom.predicate)(value) {
            return Err(rule.fail(
                field,
                ValidationReason::CustomConstraintViolation(custom.message.clone()),
            ));
        }
    }

    Ok(Some(value))
}

/// Validate a field whose rule is required, yielding the number itself
pub fn validate_required(
    value: impl Into<FieldInput>,
    field: &str,
    rule: &FieldRule,
) -> std::result::Result<f64, ValidationError> {
    validate(value, field, rule)?
        .ok_or_else(|| ValidationError::new(field, ValidationReason::RequiredFieldMissing))
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Global bounds applied to statistical fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBounds {
    pub mean: Bounds,
    pub std_dev: Bounds,
    pub sample_size: Bounds,
    pub margin: Bounds,
}

impl Default for StatBounds {
    fn default() -> Self {
        Self {
            mean: Bounds::new(-100_000.0, 10_000_000.0),
            std_dev: Bounds::new(0.001, 1_000_000.0),
            sample_size: Bounds::new(2.0, 10_000.0),
            margin: Bounds::new(0.001, 1_000.0),
        }
    }
}

impl StatBounds {
    /// Load bounds from JSON; keys left out keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let bounds: Self = serde_json::from_str(json).map_err(|e| {
            ValidationError::new(
                "bounds",
                ValidationReason::CustomConstraintViolation(format!("invalid bounds config: {e}")),
            )
        })?;
        bounds.check()?;
        Ok(bounds)
    }

    /// Reject ranges the engine cannot work with: every range must be ordered
    /// and finite, and the std_dev, sample_size and margin minimums must be
    /// positive.
    pub fn check(&self) -> Result<()> {
        let ranges = [
            ("mean", self.mean, false),
            ("std_dev", self.std_dev, true),
            ("sample_size", self.sample_size, true),
            ("margin", self.margin, true),
        ];
        for (name, bounds, positive) in ranges {
            let reason = if !(bounds.min.is_finite() && bounds.max.is_finite()) {
                Some("bounds must be finite")
            } else if bounds.min > bounds.max {
                Some("min must not exceed max")
            } else if positive && bounds.min <= 0.0 {
                Some("min must be positive")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ValidationError::new(
                    format!("bounds.{name}"),
                    ValidationReason::CustomConstraintViolation(reason.to_string()),
                )
                .into());
            }
        }
        Ok(())
    }

    pub fn mean_rule(&self) -> FieldRule {
        FieldRule::number()
            .required()
            .within(self.mean)
            .range_message(format!(
                "mean must be between {} and {}",
                self.mean.min, self.mean.max
            ))
    }

    pub fn std_dev_rule(&self) -> FieldRule {
        FieldRule::number()
            .required()
            .within(self.std_dev)
            .range_message(format!(
                "standard deviation must be between {} and {}",
                self.std_dev.min, self.std_dev.max
            ))
    }

    pub fn sample_size_rule(&self) -> FieldRule {
        FieldRule::integer().required().within(self.sample_size)
    }

    pub fn margin_rule(&self) -> FieldRule {
        FieldRule::number()
            .required()
            .within(self.margin)
            .range_message(format!(
                "margin of error must be between {} and {}",
                self.margin.min, self.margin.max
            ))
    }
}
