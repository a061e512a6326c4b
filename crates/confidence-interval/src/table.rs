//! Supported confidence levels and their critical values

use confidence_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level restricted to the supported set
///
/// Each level maps to the two-tailed standard-normal critical value used
/// for its interval. Unsupported levels are rejected, never rounded to a
/// neighbouring level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ConfidenceLevel {
    /// 90%, z = 1.645
    Ninety,
    /// 95%, z = 1.96
    #[default]
    NinetyFive,
    /// 99%, z = 2.576
    NinetyNine,
}

impl ConfidenceLevel {
    /// All supported levels, narrowest interval first
    pub const ALL: [ConfidenceLevel; 3] = [Self::Ninety, Self::NinetyFive, Self::NinetyNine];

    /// Two-tailed standard-normal critical value
    pub const fn z_score(self) -> f64 {
        match self {
            Self::Ninety => 1.645,
            Self::NinetyFive => 1.96,
            Self::NinetyNine => 2.576,
        }
    }

    /// Level as a percentage (90, 95, 99)
    pub const fn percent(self) -> u32 {
        match self {
            Self::Ninety => 90,
            Self::NinetyFive => 95,
            Self::NinetyNine => 99,
        }
    }

    /// Level as a fraction (0.90, 0.95, 0.99)
    pub fn fraction(self) -> f64 {
        self.percent() as f64 / 100.0
    }

    /// Significance level, 1 - fraction
    pub fn alpha(self) -> f64 {
        1.0 - self.fraction()
    }
}

/// Look up the critical value for a level given in percent
pub fn z_for(level: f64) -> Result<f64> {
    ConfidenceLevel::try_from(level).map(ConfidenceLevel::z_score)
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        if level == 90.0 {
            Ok(Self::Ninety)
        } else if level == 95.0 {
            Ok(Self::NinetyFive)
        } else if level == 99.0 {
            Ok(Self::NinetyNine)
        } else {
            Err(Error::unsupported_level(level))
        }
    }
}

impl TryFrom<u32> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: u32) -> Result<Self> {
        Self::try_from(level as f64)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.percent() as f64
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Anything that names a confidence level: the enum itself or a percentage
pub trait IntoConfidenceLevel {
    fn into_confidence_level(self) -> Result<ConfidenceLevel>;
}

impl IntoConfidenceLevel for ConfidenceLevel {
    fn into_confidence_level(self) -> Result<ConfidenceLevel> {
        Ok(self)
    }
}

impl IntoConfidenceLevel for f64 {
    fn into_confidence_level(self) -> Result<ConfidenceLevel> {
        ConfidenceLevel::try_from(self)
    }
}

impl IntoConfidenceLevel for u32 {
    fn into_confidence_level(self) -> Result<ConfidenceLevel> {
        ConfidenceLevel::try_from(self)
    }
}

impl IntoConfidenceLevel for i32 {
    fn into_confidence_level(self) -> Result<ConfidenceLevel> {
        ConfidenceLevel::try_from(self as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{ContinuousCDF, Normal};

    #[test]
    fn test_table_values() {
        assert_eq!(z_for(90.0).unwrap(), 1.645);
        assert_eq!(z_for(95.0).unwrap(), 1.96);
        assert_eq!(z_for(99.0).unwrap(), 2.576);
    }

    #[test]
    fn test_unsupported_levels() {
        for level in [80.0, 94.9, 95.5, 100.0, 0.95, -95.0, f64::NAN] {
            match z_for(level) {
                Err(Error::UnsupportedConfidenceLevel(_)) => {}
                other => panic!("level {level} should be unsupported, got {other:?}"),
            }
        }
        assert!(ConfidenceLevel::try_from(80u32).is_err());
    }

    #[test]
    fn test_table_matches_normal_quantiles() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        for level in ConfidenceLevel::ALL {
            let exact = normal.inverse_cdf(1.0 - level.alpha() / 2.0);
            assert!(
                (exact - level.z_score()).abs() < 1e-3,
                "{level}: table {} vs exact {exact}",
                level.z_score()
            );
        }
    }

    #[test]
    fn test_levels_are_ordered() {
        let z: Vec<f64> = ConfidenceLevel::ALL.iter().map(|l| l.z_score()).collect();
        assert!(z.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::NinetyFive);
        assert_eq!(95u32.into_confidence_level().unwrap(), ConfidenceLevel::NinetyFive);
        assert_eq!(99i32.into_confidence_level().unwrap(), ConfidenceLevel::NinetyNine);
        assert_eq!(f64::from(ConfidenceLevel::Ninety), 90.0);
        assert!((ConfidenceLevel::NinetyNine.alpha() - 0.01).abs() < 1e-12);
        assert_eq!(ConfidenceLevel::NinetyFive.to_string(), "95%");
    }

    #[test]
    fn test_serde_as_percent() {
        let json = serde_json::to_string(&ConfidenceLevel::Ninety).unwrap();
        assert_eq!(json, "90.0");
        let level: ConfidenceLevel = serde_json::from_str("99").unwrap();
        assert_eq!(level, ConfidenceLevel::NinetyNine);
        assert!(serde_json::from_str::<ConfidenceLevel>("80").is_err());
    }
}
