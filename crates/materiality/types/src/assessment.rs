//! Assessment output and catalog types

use crate::profile::{CompanyProfile, CompanySize, Geography, Sector};
use crate::score::{RiskBand, RiskScore, ScoringPolicy};
use serde::{Deserialize, Serialize};

/// Result of classifying one company profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialityAssessment {
    /// Profile that was assessed
    pub profile: CompanyProfile,

    /// Policy the score was computed under
    pub policy: ScoringPolicy,

    /// Likely material emission scopes, sorted ascending
    pub scopes: Vec<String>,

    /// Key ESG and climate topics, sorted ascending
    pub topics: Vec<String>,

    /// Integer risk score
    pub score: u8,

    /// Upper bound of the score's scale
    pub scale_max: u8,

    /// Qualitative band
    pub band: RiskBand,

    /// Generated narrative paragraph
    pub narrative: String,
}

impl MaterialityAssessment {
    /// Score paired with its policy
    pub fn risk_score(&self) -> RiskScore {
        RiskScore::new(self.score, self.policy)
    }
}

/// Accepted input values and the active scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub sectors: Vec<String>,
    pub geographies: Vec<String>,
    pub sizes: Vec<String>,
    pub size_help: String,
    pub policy: ScoringPolicy,
    pub scale_min: u8,
    pub scale_max: u8,
    pub bands: Vec<RiskBand>,
}

impl Catalog {
    /// Build the catalog for a scoring policy
    pub fn for_policy(policy: ScoringPolicy) -> Self {
        Self {
            sectors: Sector::ALL.iter().map(|s| s.label().to_string()).collect(),
            geographies: Geography::ALL.iter().map(|g| g.label().to_string()).collect(),
            sizes: CompanySize::ALL.iter().map(|s| s.label().to_string()).collect(),
            size_help: CompanySize::HELP.to_string(),
            policy,
            scale_min: policy.scale_min(),
            scale_max: policy.scale_max(),
            bands: policy.bands().to_vec(),
        }
    }
}
