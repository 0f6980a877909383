//! Company profile enumerations
//!
//! Each enumeration is closed. Its display label is the canonical string
//! used on the wire; parsing is forgiving about case and separators so that
//! `financial-services`, `FINANCIAL_SERVICES` and `Financial Services` all
//! resolve to [`Sector::FinancialServices`].

use crate::error::{InputField, MaterialityError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Company sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Manufacturing,
    Software,
    Retail,
    Transportation,
    Energy,
    #[serde(rename = "Financial Services")]
    FinancialServices,
}

impl Sector {
    /// All sectors, in presentation order
    pub const ALL: [Sector; 6] = [
        Sector::Manufacturing,
        Sector::Software,
        Sector::Retail,
        Sector::Transportation,
        Sector::Energy,
        Sector::FinancialServices,
    ];

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Manufacturing => "Manufacturing",
            Sector::Software => "Software",
            Sector::Retail => "Retail",
            Sector::Transportation => "Transportation",
            Sector::Energy => "Energy",
            Sector::FinancialServices => "Financial Services",
        }
    }
}

/// Operating geography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Geography {
    Canada,
    #[serde(rename = "United States")]
    UnitedStates,
    Europe,
    Asia,
    Global,
}

impl Geography {
    /// All geographies, in presentation order
    pub const ALL: [Geography; 5] = [
        Geography::Canada,
        Geography::UnitedStates,
        Geography::Europe,
        Geography::Asia,
        Geography::Global,
    ];

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            Geography::Canada => "Canada",
            Geography::UnitedStates => "United States",
            Geography::Europe => "Europe",
            Geography::Asia => "Asia",
            Geography::Global => "Global",
        }
    }
}

/// Company size
///
/// Approximate scale based on revenue, assets or headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// All sizes, smallest first
    pub const ALL: [CompanySize; 3] = [CompanySize::Small, CompanySize::Medium, CompanySize::Large];

    /// Help text shown next to the size choice
    pub const HELP: &'static str = "Approximate scale based on revenue, assets or headcount.";

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Small => "Small",
            CompanySize::Medium => "Medium",
            CompanySize::Large => "Large",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Geography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = MaterialityError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(InputField::Sector, s, &Sector::ALL, Sector::label)
    }
}

impl FromStr for Geography {
    type Err = MaterialityError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(InputField::Geography, s, &Geography::ALL, Geography::label)
    }
}

impl FromStr for CompanySize {
    type Err = MaterialityError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice(InputField::Size, s, &CompanySize::ALL, CompanySize::label)
    }
}

/// Company profile: the sole input to classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub sector: Sector,
    pub geography: Geography,
    pub size: CompanySize,
}

impl CompanyProfile {
    /// Create a profile from validated values
    pub fn new(sector: Sector, geography: Geography, size: CompanySize) -> Self {
        Self {
            sector,
            geography,
            size,
        }
    }

    /// Parse a profile from raw boundary strings
    ///
    /// Fields are validated in order (sector, geography, size); the first
    /// invalid one is reported.
    pub fn parse(sector: &str, geography: &str, size: &str) -> Result<Self> {
        Ok(Self {
            sector: sector.parse()?,
            geography: geography.parse()?,
            size: size.parse()?,
        })
    }

    /// Every valid profile
    pub fn all() -> impl Iterator<Item = CompanyProfile> {
        Sector::ALL.into_iter().flat_map(|sector| {
            Geography::ALL.into_iter().flat_map(move |geography| {
                CompanySize::ALL
                    .into_iter()
                    .map(move |size| CompanyProfile::new(sector, geography, size))
            })
        })
    }
}

impl std::fmt::Display for CompanyProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} / {}", self.sector, self.geography, self.size)
    }
}

/// Lower-case, map `-`/`_` to spaces and collapse runs of whitespace
pub(crate) fn normalize(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn parse_choice<T: Copy>(
    field: InputField,
    value: &str,
    choices: &[T],
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let wanted = normalize(value);
    choices
        .iter()
        .find(|choice| normalize(label(*choice)) == wanted)
        .copied()
        .ok_or_else(|| MaterialityError::invalid_enum(field, value, choices.iter().map(label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_labels() {
        for sector in Sector::ALL {
            assert_eq!(sector.label().parse::<Sector>().unwrap(), sector);
        }
        for geography in Geography::ALL {
            assert_eq!(geography.label().parse::<Geography>().unwrap(), geography);
        }
        for size in CompanySize::ALL {
            assert_eq!(size.label().parse::<CompanySize>().unwrap(), size);
        }
    }

    #[test]
    fn test_parse_is_case_and_separator_insensitive() {
        assert_eq!(
            "financial-services".parse::<Sector>().unwrap(),
            Sector::FinancialServices
        );
        assert_eq!(
            "UNITED_STATES".parse::<Geography>().unwrap(),
            Geography::UnitedStates
        );
        assert_eq!("  large ".parse::<CompanySize>().unwrap(), CompanySize::Large);
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = "Mining".parse::<Sector>().unwrap_err();
        match err {
            MaterialityError::InvalidEnum {
                field,
                value,
                accepted,
            } => {
                assert_eq!(field, InputField::Sector);
                assert_eq!(value, "Mining");
                assert_eq!(accepted.len(), 6);
                assert!(accepted.contains(&"Financial Services".to_string()));
            }
        }
    }

    #[test]
    fn test_profile_parse_reports_first_invalid_field() {
        let err = CompanyProfile::parse("Energy", "Mars", "Huge").unwrap_err();
        assert_eq!(err.field(), InputField::Geography);
    }

    #[test]
    fn test_all_profiles() {
        let all: Vec<_> = CompanyProfile::all().collect();
        assert_eq!(all.len(), 6 * 5 * 3);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_serde_uses_labels() {
        let profile = CompanyProfile::new(
            Sector::FinancialServices,
            Geography::UnitedStates,
            CompanySize::Medium,
        );
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["sector"], "Financial Services");
        assert_eq!(json["geography"], "United States");
        assert_eq!(json["size"], "Medium");

        let back: CompanyProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
