//! The closed set of chrono equations.

use crate::error::EquationError;
use crate::params::EquationParams;
use crt_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default time unit for rate-based laws: one day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// A time-dependent balance law.
///
/// Tags are stable: `Subscription = 0` through `Exponential = 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChronoEquation {
    /// Full balance until `expiration_time`, zero afterwards.
    Subscription,
    /// Grows by `inflation_rate` per `time_unit`.
    Inflationary,
    /// Shrinks by `decay_rate` per `time_unit`, floored at zero.
    Deflationary,
    /// Moves by `slope` per second.
    Linear,
    /// Decays continuously with `decay_constant` per `time_unit`.
    Exponential,
}

impl ChronoEquation {
    pub const ALL: [ChronoEquation; 5] = [
        Self::Subscription,
        Self::Inflationary,
        Self::Deflationary,
        Self::Linear,
        Self::Exponential,
    ];

    pub fn tag(&self) -> u8 {
        match self {
            Self::Subscription => 0,
            Self::Inflationary => 1,
            Self::Deflationary => 2,
            Self::Linear => 3,
            Self::Exponential => 4,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, EquationError> {
        Self::ALL
            .into_iter()
            .find(|eq| eq.tag() == tag)
            .ok_or_else(|| EquationError::UnknownEquation(format!("tag {tag}")))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Subscription => "Subscription",
            Self::Inflationary => "Inflationary",
            Self::Deflationary => "Deflationary",
            Self::Linear => "Linear",
            Self::Exponential => "Exponential",
        }
    }

    /// Human-readable form of the law, `x` being the last snapshot and `t` elapsed seconds.
    pub fn formula(&self) -> &'static str {
        match self {
            Self::Subscription => "x * (now <= expiration_time ? 1 : 0)",
            Self::Inflationary => "x + t * inflation_rate / time_unit",
            Self::Deflationary => "max(0, x - t * decay_rate / time_unit)",
            Self::Linear => "x + t * slope",
            Self::Exponential => "x * exp(-decay_constant * t / time_unit)",
        }
    }

    /// Parameters used when neither the account nor the mint supplies any.
    ///
    /// Every default leaves the balance where it is (zero rates, zero slope),
    /// except `Subscription`, whose default expiry is the epoch.
    pub fn default_params(&self) -> EquationParams {
        match self {
            Self::Subscription => EquationParams {
                expiration_time: Some(Timestamp::EPOCH),
                ..Default::default()
            },
            Self::Inflationary => EquationParams {
                inflation_rate: Some(0),
                time_unit: Some(SECONDS_PER_DAY),
                ..Default::default()
            },
            Self::Deflationary => EquationParams {
                decay_rate: Some(0),
                time_unit: Some(SECONDS_PER_DAY),
                ..Default::default()
            },
            Self::Linear => EquationParams {
                slope: Some(0),
                ..Default::default()
            },
            Self::Exponential => EquationParams {
                decay_constant: Some(0.0),
                time_unit: Some(SECONDS_PER_DAY),
                ..Default::default()
            },
        }
    }

    /// Whether the law divides by `time_unit`.
    pub fn uses_time_unit(&self) -> bool {
        matches!(
            self,
            Self::Inflationary | Self::Deflationary | Self::Exponential
        )
    }
}

impl fmt::Display for ChronoEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChronoEquation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|eq| eq.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EquationError::UnknownEquation(format!("{s:?}")))
    }
}

impl TryFrom<u8> for ChronoEquation {
    type Error = EquationError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

impl From<ChronoEquation> for u8 {
    fn from(eq: ChronoEquation) -> u8 {
        eq.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        let tags: Vec<u8> = ChronoEquation::ALL.iter().map(|eq| eq.tag()).collect();
        assert_eq!(tags, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tag_and_name_forms_agree() {
        for eq in ChronoEquation::ALL {
            assert_eq!(ChronoEquation::try_from(eq.tag()).unwrap(), eq);
            assert_eq!(eq.to_string().parse::<ChronoEquation>().unwrap(), eq);
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(
            "exponential".parse::<ChronoEquation>().unwrap(),
            ChronoEquation::Exponential
        );
    }

    #[test]
    fn unknown_tag_is_unknown_equation() {
        let err = ChronoEquation::from_tag(5).unwrap_err();
        assert!(matches!(err, EquationError::UnknownEquation(_)));
    }

    #[test]
    fn unknown_name_is_unknown_equation() {
        let err = "Logistic".parse::<ChronoEquation>().unwrap_err();
        assert!(matches!(err, EquationError::UnknownEquation(_)));
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&ChronoEquation::Deflationary).unwrap();
        assert_eq!(json, "\"Deflationary\"");
        let back: ChronoEquation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChronoEquation::Deflationary);
    }

    #[test]
    fn default_params_cover_required_fields() {
        assert_eq!(
            ChronoEquation::Inflationary.default_params().time_unit,
            Some(SECONDS_PER_DAY)
        );
        assert_eq!(ChronoEquation::Linear.default_params().slope, Some(0));
        assert_eq!(
            ChronoEquation::Subscription.default_params().expiration_time,
            Some(Timestamp::EPOCH)
        );
    }
}
