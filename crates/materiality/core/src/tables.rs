//! Fixed lookup tables
//!
//! Every rule of the classifier lives here as an immutable mapping keyed by
//! an input enumeration. A key missing from a table contributes nothing:
//! no labels for the set tables, zero for additive risk tables, and a
//! neutral multiplier for the size tables.
//!
//! Fractional constants are stored in fixed point so that scoring is exact:
//! multipliers in hundredths (`120` is ×1.2) and five-point weights in
//! tenths (`45` is 4.5).

use materiality_types::{CompanySize, Geography, Sector};

/// Scopes and topics contributed by a sector
#[derive(Debug, Clone, Copy)]
pub struct SectorMateriality {
    pub scopes: &'static [&'static str],
    pub topics: &'static [&'static str],
}

pub static SECTOR_MATERIALITY: &[(Sector, SectorMateriality)] = &[
    (
        Sector::Manufacturing,
        SectorMateriality {
            scopes: &["Scope 1", "Scope 2", "Scope 3 (Upstream Supply Chain)"],
            topics: &["Energy Use", "Emissions", "Waste", "Water", "Worker Safety"],
        },
    ),
    (
        Sector::Software,
        SectorMateriality {
            scopes: &["Scope 2", "Scope 3 (Business Travel, Cloud Services)"],
            topics: &[
                "Data Security",
                "Privacy",
                "Workforce Wellbeing",
                "Diversity & Inclusion",
            ],
        },
    ),
    (
        Sector::Retail,
        SectorMateriality {
            scopes: &["Scope 2", "Scope 3 (Purchased Goods, Logistics, Use Phase)"],
            topics: &["Supply Chain Impacts", "Packaging & Waste", "Labour Practices"],
        },
    ),
    (
        Sector::Transportation,
        SectorMateriality {
            scopes: &["Scope 1 (Fuel)", "Scope 2", "Scope 3 (Logistics & Upstream Fuel)"],
            topics: &["Fuel Efficiency", "Emissions", "Safety", "Logistics Resilience"],
        },
    ),
    (
        Sector::Energy,
        SectorMateriality {
            scopes: &["Scope 1", "Scope 2", "Scope 3 (Use of Sold Products)"],
            topics: &[
                "Transition Risk",
                "Physical Climate Risk",
                "Community Impact",
                "Biodiversity",
            ],
        },
    ),
    (
        Sector::FinancialServices,
        SectorMateriality {
            scopes: &["Financed Emissions", "Operational Scope 2"],
            topics: &[
                "Financed Emissions",
                "Portfolio Alignment",
                "Risk Management",
                "Governance",
            ],
        },
    ),
];

/// Geography topic modifiers. United States adds nothing.
pub static GEOGRAPHY_TOPICS: &[(Geography, &[&str])] = &[
    (
        Geography::Canada,
        &["Climate Policy Risk", "Carbon Pricing Exposure"],
    ),
    (
        Geography::Europe,
        &["Regulatory Compliance (EU)", "Supply Chain Due Diligence"],
    ),
    (
        Geography::Asia,
        &["Supply Chain Risk", "Physical Climate Risk"],
    ),
    (
        Geography::Global,
        &["Cross-Jurisdictional Compliance", "Multi-Region Supply Chains"],
    ),
];

/// Size topic modifiers. Small adds nothing.
pub static SIZE_TOPICS: &[(CompanySize, &[&str])] = &[
    (CompanySize::Medium, &["Growth & Scaling Risk"]),
    (
        CompanySize::Large,
        &[
            "Governance & Oversight",
            "Supply Chain Management",
            "Internal Controls",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Percentage (0–100) policy
// ---------------------------------------------------------------------------

/// Sector risk baseline (0–10)
pub static SECTOR_RISK: &[(Sector, u32)] = &[
    (Sector::Manufacturing, 8),
    (Sector::Software, 4),
    (Sector::Retail, 6),
    (Sector::Transportation, 9),
    (Sector::Energy, 10),
    (Sector::FinancialServices, 7),
];

/// Geography risk baseline (0–5)
pub static GEOGRAPHY_RISK: &[(Geography, u32)] = &[
    (Geography::Canada, 4),
    (Geography::UnitedStates, 3),
    (Geography::Europe, 4),
    (Geography::Asia, 3),
    (Geography::Global, 5),
];

/// Size multiplier, hundredths
pub static SIZE_MULTIPLIER: &[(CompanySize, u32)] = &[
    (CompanySize::Small, 80),
    (CompanySize::Medium, 100),
    (CompanySize::Large, 120),
];

/// Factor converting the scaled baseline onto 0–100
pub const PERCENTAGE_SCALE_FACTOR: u32 = 5;

// ---------------------------------------------------------------------------
// Five-point (1–5) policy
// ---------------------------------------------------------------------------

/// Sector weight (2–5), tenths
pub static SECTOR_WEIGHT: &[(Sector, u32)] = &[
    (Sector::Manufacturing, 40),
    (Sector::Software, 20),
    (Sector::Retail, 30),
    (Sector::Transportation, 45),
    (Sector::Energy, 50),
    (Sector::FinancialServices, 35),
];

/// Geography weight (0.5–1.5), tenths
pub static GEOGRAPHY_WEIGHT: &[(Geography, u32)] = &[
    (Geography::Canada, 10),
    (Geography::UnitedStates, 5),
    (Geography::Europe, 10),
    (Geography::Asia, 5),
    (Geography::Global, 15),
];

/// Size multiplier for the five-point policy, hundredths
pub static FIVE_POINT_SIZE_MULTIPLIER: &[(CompanySize, u32)] = &[
    (CompanySize::Small, 90),
    (CompanySize::Medium, 100),
    (CompanySize::Large, 120),
];

/// Neutral multiplier, hundredths
pub const NEUTRAL_MULTIPLIER: u32 = 100;

/// Find the value stored for `key`
pub fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tables_are_total() {
        for sector in Sector::ALL {
            assert!(lookup(SECTOR_MATERIALITY, sector).is_some(), "{sector}");
            assert!(lookup(SECTOR_RISK, sector).is_some(), "{sector}");
            assert!(lookup(SECTOR_WEIGHT, sector).is_some(), "{sector}");
        }
        for geography in Geography::ALL {
            assert!(lookup(GEOGRAPHY_RISK, geography).is_some(), "{geography}");
            assert!(lookup(GEOGRAPHY_WEIGHT, geography).is_some(), "{geography}");
        }
        for size in CompanySize::ALL {
            assert!(lookup(SIZE_MULTIPLIER, size).is_some(), "{size}");
            assert!(lookup(FIVE_POINT_SIZE_MULTIPLIER, size).is_some(), "{size}");
        }
    }

    #[test]
    fn test_tables_have_unique_keys() {
        fn unique<K: PartialEq, V>(table: &[(K, V)]) -> bool {
            table
                .iter()
                .enumerate()
                .all(|(i, (k, _))| table[i + 1..].iter().all(|(other, _)| other != k))
        }
        assert!(unique(SECTOR_MATERIALITY));
        assert!(unique(GEOGRAPHY_TOPICS));
        assert!(unique(SIZE_TOPICS));
        assert!(unique(SECTOR_RISK));
        assert!(unique(GEOGRAPHY_RISK));
        assert!(unique(SIZE_MULTIPLIER));
        assert!(unique(SECTOR_WEIGHT));
        assert!(unique(GEOGRAPHY_WEIGHT));
        assert!(unique(FIVE_POINT_SIZE_MULTIPLIER));
    }

    #[test]
    fn test_weights_stay_in_documented_ranges() {
        assert!(SECTOR_RISK.iter().all(|(_, v)| (4..=10).contains(v)));
        assert!(GEOGRAPHY_RISK.iter().all(|(_, v)| (3..=5).contains(v)));
        assert!(SECTOR_WEIGHT.iter().all(|(_, v)| (20..=50).contains(v)));
        assert!(GEOGRAPHY_WEIGHT.iter().all(|(_, v)| (5..=15).contains(v)));
    }

    #[test]
    fn test_silent_geography_and_size() {
        assert!(lookup(GEOGRAPHY_TOPICS, Geography::UnitedStates).is_none());
        assert!(lookup(SIZE_TOPICS, CompanySize::Small).is_none());
    }
}
