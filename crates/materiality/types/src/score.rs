//! Risk score, band and scoring policy types

use crate::error::{InputField, MaterialityError, Result};
use crate::profile::normalize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scoring policy selecting the score scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// 0–100 integer scale with three bands
    #[default]
    Percentage,

    /// 1–5 integer scale with five bands
    FivePoint,
}

impl ScoringPolicy {
    pub const ALL: [ScoringPolicy; 2] = [ScoringPolicy::Percentage, ScoringPolicy::FivePoint];

    /// Lowest reachable score
    pub fn scale_min(&self) -> u8 {
        match self {
            ScoringPolicy::Percentage => 0,
            ScoringPolicy::FivePoint => 1,
        }
    }

    /// Highest reachable score
    pub fn scale_max(&self) -> u8 {
        match self {
            ScoringPolicy::Percentage => 100,
            ScoringPolicy::FivePoint => 5,
        }
    }

    /// Bands this policy can produce, lowest first
    pub fn bands(&self) -> &'static [RiskBand] {
        match self {
            ScoringPolicy::Percentage => &[RiskBand::Low, RiskBand::Medium, RiskBand::High],
            ScoringPolicy::FivePoint => &RiskBand::ALL,
        }
    }
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringPolicy::Percentage => write!(f, "percentage"),
            ScoringPolicy::FivePoint => write!(f, "five-point"),
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = MaterialityError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "percentage" | "percent" | "0 100" | "100" => Ok(ScoringPolicy::Percentage),
            "five point" | "fivepoint" | "1 5" | "5" => Ok(ScoringPolicy::FivePoint),
            _ => Err(MaterialityError::invalid_enum(
                InputField::Policy,
                s,
                ["percentage", "five-point"],
            )),
        }
    }
}

/// Qualitative risk band
///
/// Ordered from least to most severe, so band comparisons follow score order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    #[serde(rename = "Low–Medium")]
    LowMedium,
    Medium,
    #[serde(rename = "Medium–High")]
    MediumHigh,
    High,
}

impl RiskBand {
    pub const ALL: [RiskBand; 5] = [
        RiskBand::Low,
        RiskBand::LowMedium,
        RiskBand::Medium,
        RiskBand::MediumHigh,
        RiskBand::High,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::LowMedium => "Low–Medium",
            RiskBand::Medium => "Medium",
            RiskBand::MediumHigh => "Medium–High",
            RiskBand::High => "High",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Integer risk score on a policy's scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskScore {
    pub value: u8,
    pub policy: ScoringPolicy,
}

impl RiskScore {
    /// Create a score, clamped into the policy's scale
    pub fn new(value: u8, policy: ScoringPolicy) -> Self {
        Self {
            value: value.clamp(policy.scale_min(), policy.scale_max()),
            policy,
        }
    }

    /// Upper bound of the scale
    pub fn max(&self) -> u8 {
        self.policy.scale_max()
    }

    /// Score as a fraction of the scale, in [0, 1]
    pub fn ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(self.max())
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.value, self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default_is_percentage() {
        assert_eq!(ScoringPolicy::default(), ScoringPolicy::Percentage);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("five-point".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::FivePoint);
        assert_eq!("1-5".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::FivePoint);
        assert_eq!("Percentage".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Percentage);
        assert_eq!("0-100".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Percentage);

        let err = "ten-point".parse::<ScoringPolicy>().unwrap_err();
        assert_eq!(err.field(), InputField::Policy);
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in ScoringPolicy::ALL {
            assert_eq!(policy.to_string().parse::<ScoringPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_serde_kebab_case() {
        let json = serde_json::to_string(&ScoringPolicy::FivePoint).unwrap();
        assert_eq!(json, "\"five-point\"");
    }

    #[test]
    fn test_bands_are_ordered() {
        for policy in ScoringPolicy::ALL {
            let bands = policy.bands();
            assert!(bands.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_band_labels_serialize() {
        let json = serde_json::to_string(&RiskBand::LowMedium).unwrap();
        assert_eq!(json, "\"Low–Medium\"");
        assert_eq!(RiskBand::MediumHigh.to_string(), "Medium–High");
    }

    #[test]
    fn test_score_display_and_clamp() {
        let score = RiskScore::new(72, ScoringPolicy::Percentage);
        assert_eq!(score.to_string(), "72 / 100");

        let clamped = RiskScore::new(9, ScoringPolicy::FivePoint);
        assert_eq!(clamped.value, 5);

        let floor = RiskScore::new(0, ScoringPolicy::FivePoint);
        assert_eq!(floor.value, 1);
        assert!((floor.ratio() - 0.2).abs() < f64::EPSILON);
    }
}
