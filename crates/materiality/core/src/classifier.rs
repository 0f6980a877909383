//! Classifier facade
//!
//! Bundles inference, scoring and narrative generation behind one call.

use crate::inference::infer;
use crate::narrative::narrate;
use crate::scoring::{create_risk_model, RiskModel};
use materiality_types::{Catalog, CompanyProfile, MaterialityAssessment, ScoringPolicy};
use std::sync::Arc;

/// Materiality classifier bound to one risk model
#[derive(Debug, Clone)]
pub struct Classifier {
    model: Arc<dyn RiskModel>,
}

impl Classifier {
    /// Create a classifier for a scoring policy
    pub fn new(policy: ScoringPolicy) -> Self {
        Self::with_model(create_risk_model(policy))
    }

    /// Create a classifier with a specific risk model
    pub fn with_model(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }

    /// Active scoring policy
    pub fn policy(&self) -> ScoringPolicy {
        self.model.policy()
    }

    /// Active risk model
    pub fn model(&self) -> &dyn RiskModel {
        self.model.as_ref()
    }

    /// Accepted inputs and scale for the active policy
    pub fn catalog(&self) -> Catalog {
        Catalog::for_policy(self.policy())
    }

    /// Assess a company profile
    pub fn assess(&self, profile: &CompanyProfile) -> MaterialityAssessment {
        let (scopes, topics) = infer(profile.sector, profile.geography, profile.size);
        let (score, band) = self.model.evaluate(profile);
        let narrative = narrate(profile, &scopes, &topics, score, band);

        tracing::debug!(
            profile = %profile,
            model = self.model.id(),
            score = score.value,
            band = %band,
            scopes = scopes.len(),
            topics = topics.len(),
            "Assessed materiality profile"
        );

        MaterialityAssessment {
            profile: *profile,
            policy: score.policy,
            scopes: scopes.into_iter().map(String::from).collect(),
            topics: topics.into_iter().map(String::from).collect(),
            score: score.value,
            scale_max: score.max(),
            band,
            narrative,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}
