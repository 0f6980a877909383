//! # Materiality Types
//!
//! Core types shared by the materiality classifier and its shells.
//!
//! ## Overview
//!
//! A [`CompanyProfile`] is the sole input to every computation. It is built
//! from three closed enumerations:
//!
//! - [`Sector`]: the company's industry
//! - [`Geography`]: where the company operates
//! - [`CompanySize`]: approximate scale
//!
//! Boundaries (CLI flags, JSON bodies) hand over raw strings; they are turned
//! into a profile with [`CompanyProfile::parse`], which rejects anything
//! outside the enumerations with [`MaterialityError::InvalidEnum`].
//!
//! The output side is a [`MaterialityAssessment`], scored under one
//! [`ScoringPolicy`] and labelled with a [`RiskBand`].
//!
//! ## Example
//!
//! ```rust
//! use materiality_types::{CompanyProfile, CompanySize, Geography, Sector};
//!
//! let profile = CompanyProfile::parse("manufacturing", "Canada", "large").unwrap();
//! assert_eq!(profile.sector, Sector::Manufacturing);
//! assert_eq!(profile.geography, Geography::Canada);
//! assert_eq!(profile.size, CompanySize::Large);
//!
//! let err = CompanyProfile::parse("Mining", "Canada", "Large").unwrap_err();
//! assert!(err.to_string().contains("sector"));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod assessment;
pub mod error;
pub mod profile;
pub mod score;

pub use assessment::{Catalog, MaterialityAssessment};
pub use error::{InputField, MaterialityError, Result};
pub use profile::{CompanyProfile, CompanySize, Geography, Sector};
pub use score::{RiskBand, RiskScore, ScoringPolicy};
