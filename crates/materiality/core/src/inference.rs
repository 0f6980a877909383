//! Scope and topic inference
//!
//! Unions the sector, geography and size contributions into two ordered
//! sets. `BTreeSet` gives both the deduplication and the ascending order.

use crate::tables::{lookup, GEOGRAPHY_TOPICS, SECTOR_MATERIALITY, SIZE_TOPICS};
use materiality_types::{CompanySize, Geography, Sector};
use std::collections::BTreeSet;

/// Emission scope labels, ascending
pub type ScopeSet = BTreeSet<&'static str>;

/// ESG/climate topic labels, ascending
pub type TopicSet = BTreeSet<&'static str>;

/// Infer likely material emission scopes and ESG topics
pub fn infer(sector: Sector, geography: Geography, size: CompanySize) -> (ScopeSet, TopicSet) {
    let mut scopes = ScopeSet::new();
    let mut topics = TopicSet::new();

    if let Some(materiality) = lookup(SECTOR_MATERIALITY, sector) {
        scopes.extend(materiality.scopes.iter().copied());
        topics.extend(materiality.topics.iter().copied());
    }

    if let Some(extra) = lookup(GEOGRAPHY_TOPICS, geography) {
        topics.extend(extra.iter().copied());
    }

    if let Some(extra) = lookup(SIZE_TOPICS, size) {
        topics.extend(extra.iter().copied());
    }

    (scopes, topics)
}

/// Join a label set for display
pub fn join_labels(labels: &BTreeSet<&'static str>) -> String {
    labels.iter().copied().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturing_canada_large() {
        let (scopes, topics) = infer(Sector::Manufacturing, Geography::Canada, CompanySize::Large);

        assert_eq!(
            scopes.into_iter().collect::<Vec<_>>(),
            vec!["Scope 1", "Scope 2", "Scope 3 (Upstream Supply Chain)"]
        );
        assert_eq!(
            topics.into_iter().collect::<Vec<_>>(),
            vec![
                "Carbon Pricing Exposure",
                "Climate Policy Risk",
                "Emissions",
                "Energy Use",
                "Governance & Oversight",
                "Internal Controls",
                "Supply Chain Management",
                "Waste",
                "Water",
                "Worker Safety",
            ]
        );
    }

    #[test]
    fn test_overlapping_topics_are_deduplicated() {
        // Energy and Asia both contribute "Physical Climate Risk"
        let (_, topics) = infer(Sector::Energy, Geography::Asia, CompanySize::Small);
        let count = topics.iter().filter(|t| **t == "Physical Climate Risk").count();
        assert_eq!(count, 1);
        assert_eq!(topics.len(), 5);
    }

    #[test]
    fn test_united_states_small_adds_only_sector_topics() {
        let (scopes, topics) = infer(Sector::Software, Geography::UnitedStates, CompanySize::Small);
        assert_eq!(
            scopes.into_iter().collect::<Vec<_>>(),
            vec!["Scope 2", "Scope 3 (Business Travel, Cloud Services)"]
        );
        assert_eq!(
            topics.into_iter().collect::<Vec<_>>(),
            vec![
                "Data Security",
                "Diversity & Inclusion",
                "Privacy",
                "Workforce Wellbeing"
            ]
        );
    }

    #[test]
    fn test_medium_adds_growth_topic() {
        let (_, topics) = infer(Sector::Retail, Geography::Europe, CompanySize::Medium);
        assert!(topics.contains("Growth & Scaling Risk"));
        assert!(topics.contains("Regulatory Compliance (EU)"));
        assert!(!topics.contains("Internal Controls"));
    }

    #[test]
    fn test_financial_services_scopes() {
        let (scopes, topics) =
            infer(Sector::FinancialServices, Geography::Global, CompanySize::Medium);
        assert_eq!(
            scopes.into_iter().collect::<Vec<_>>(),
            vec!["Financed Emissions", "Operational Scope 2"]
        );
        assert!(topics.contains("Financed Emissions"));
        assert!(topics.contains("Multi-Region Supply Chains"));
    }

    #[test]
    fn test_join_labels() {
        let mut labels = BTreeSet::new();
        assert_eq!(join_labels(&labels), "");
        labels.insert("Scope 2");
        labels.insert("Scope 1");
        assert_eq!(join_labels(&labels), "Scope 1, Scope 2");
    }
}
