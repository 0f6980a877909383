//! PCAP-style risk scoring
//!
//! Two interchangeable risk models share the [`RiskModel`] trait:
//!
//! - [`PercentageRiskModel`]: `floor(min((sector + geography) × size × 5, 100))`,
//!   banded Low below 35, Medium below 70, High otherwise
//! - [`FivePointRiskModel`]: `clamp(round_half_up((sector + geography) × size), 1, 5)`,
//!   banded one label per point
//!
//! All arithmetic runs on fixed-point integers from [`crate::tables`], so
//! `12 × 1.2 × 5` is exactly 72 and a raw five-point score of exactly 2.5
//! rounds up to 3.

use crate::tables::{
    lookup, FIVE_POINT_SIZE_MULTIPLIER, GEOGRAPHY_RISK, GEOGRAPHY_WEIGHT, NEUTRAL_MULTIPLIER,
    PERCENTAGE_SCALE_FACTOR, SECTOR_RISK, SECTOR_WEIGHT, SIZE_MULTIPLIER,
};
use materiality_types::{
    CompanyProfile, CompanySize, Geography, RiskBand, RiskScore, ScoringPolicy, Sector,
};
use std::sync::Arc;

/// Percentage scores below this are Low
pub const LOW_BAND_CEILING: u8 = 35;

/// Percentage scores below this (and not Low) are Medium
pub const MEDIUM_BAND_CEILING: u8 = 70;

/// A risk scoring policy
pub trait RiskModel: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this model
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Policy this model implements
    fn policy(&self) -> ScoringPolicy;

    /// Compute the score for a profile
    fn score(&self, profile: &CompanyProfile) -> RiskScore;

    /// Band for a score on this model's scale
    fn band(&self, score: RiskScore) -> RiskBand;

    /// Score and band together
    fn evaluate(&self, profile: &CompanyProfile) -> (RiskScore, RiskBand) {
        let score = self.score(profile);
        (score, self.band(score))
    }
}

/// 0–100 scale with three bands
#[derive(Debug, Default, Clone, Copy)]
pub struct PercentageRiskModel;

impl PercentageRiskModel {
    pub fn new() -> Self {
        Self
    }
}

impl RiskModel for PercentageRiskModel {
    fn id(&self) -> &str {
        "pcap-percentage"
    }

    fn name(&self) -> &str {
        "PCAP Percentage Risk Model"
    }

    fn policy(&self) -> ScoringPolicy {
        ScoringPolicy::Percentage
    }

    fn score(&self, profile: &CompanyProfile) -> RiskScore {
        let base = lookup(SECTOR_RISK, profile.sector).unwrap_or(0)
            + lookup(GEOGRAPHY_RISK, profile.geography).unwrap_or(0);
        let multiplier = lookup(SIZE_MULTIPLIER, profile.size).unwrap_or(NEUTRAL_MULTIPLIER);

        // Integer division floors the hundredths away.
        let scaled = base * multiplier * PERCENTAGE_SCALE_FACTOR / 100;
        let value = scaled.min(u32::from(ScoringPolicy::Percentage.scale_max()));

        RiskScore::new(value as u8, ScoringPolicy::Percentage)
    }

    fn band(&self, score: RiskScore) -> RiskBand {
        if score.value < LOW_BAND_CEILING {
            RiskBand::Low
        } else if score.value < MEDIUM_BAND_CEILING {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }
}

/// 1–5 scale with five bands
#[derive(Debug, Default, Clone, Copy)]
pub struct FivePointRiskModel;

impl FivePointRiskModel {
    pub fn new() -> Self {
        Self
    }

    /// Raw score in thousandths, before rounding
    pub fn raw_milli(profile: &CompanyProfile) -> u32 {
        let weight = lookup(SECTOR_WEIGHT, profile.sector).unwrap_or(0)
            + lookup(GEOGRAPHY_WEIGHT, profile.geography).unwrap_or(0);
        let multiplier =
            lookup(FIVE_POINT_SIZE_MULTIPLIER, profile.size).unwrap_or(NEUTRAL_MULTIPLIER);

        // tenths × hundredths = thousandths
        weight * multiplier
    }
}

impl RiskModel for FivePointRiskModel {
    fn id(&self) -> &str {
        "pcap-five-point"
    }

    fn name(&self) -> &str {
        "PCAP Five-Point Risk Model"
    }

    fn policy(&self) -> ScoringPolicy {
        ScoringPolicy::FivePoint
    }

    fn score(&self, profile: &CompanyProfile) -> RiskScore {
        let rounded = (Self::raw_milli(profile) + 500) / 1000;
        let policy = ScoringPolicy::FivePoint;
        let value = rounded.clamp(
            u32::from(policy.scale_min()),
            u32::from(policy.scale_max()),
        );

        RiskScore::new(value as u8, policy)
    }

    fn band(&self, score: RiskScore) -> RiskBand {
        match score.value {
            0 | 1 => RiskBand::Low,
            2 => RiskBand::LowMedium,
            3 => RiskBand::Medium,
            4 => RiskBand::MediumHigh,
            _ => RiskBand::High,
        }
    }
}

/// Create the risk model for a scoring policy
pub fn create_risk_model(policy: ScoringPolicy) -> Arc<dyn RiskModel> {
    match policy {
        ScoringPolicy::Percentage => Arc::new(PercentageRiskModel::new()),
        ScoringPolicy::FivePoint => Arc::new(FivePointRiskModel::new()),
    }
}

/// Score a profile under a policy
pub fn score(
    sector: Sector,
    geography: Geography,
    size: CompanySize,
    policy: ScoringPolicy,
) -> (RiskScore, RiskBand) {
    create_risk_model(policy).evaluate(&CompanyProfile::new(sector, geography, size))
}
