//! # Materiality Core
//!
//! Classification engine mapping a company profile to likely material
//! emission scopes, ESG topics, a PCAP-style risk score and a narrative.
//!
//! ## Key Components
//!
//! - [`infer`]: scope and topic inference from the fixed tables
//! - [`RiskModel`]: trait for scoring policies, with
//!   [`PercentageRiskModel`] (0–100) and [`FivePointRiskModel`] (1–5)
//! - [`narrate`]: templated narrative paragraph
//! - [`Classifier`]: facade producing a full [`MaterialityAssessment`]
//!
//! Every function here is pure: the same profile and policy always yield the
//! same assessment.
//!
//! ## Example
//!
//! ```rust
//! use materiality_core::Classifier;
//! use materiality_types::{CompanyProfile, RiskBand, ScoringPolicy};
//!
//! let classifier = Classifier::new(ScoringPolicy::Percentage);
//! let profile = CompanyProfile::parse("Energy", "Global", "Large").unwrap();
//!
//! let assessment = classifier.assess(&profile);
//! assert_eq!(assessment.score, 90);
//! assert_eq!(assessment.band, RiskBand::High);
//! ```
//!
//! [`MaterialityAssessment`]: materiality_types::MaterialityAssessment

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod classifier;
pub mod inference;
pub mod narrative;
pub mod scoring;
pub mod tables;

pub use classifier::Classifier;
pub use inference::{infer, join_labels, ScopeSet, TopicSet};
pub use narrative::narrate;
pub use scoring::{
    create_risk_model, score, FivePointRiskModel, PercentageRiskModel, RiskModel,
};
