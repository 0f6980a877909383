//! Error types for profile validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input field of a company profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Sector,
    Geography,
    Size,
    Policy,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Sector => write!(f, "sector"),
            InputField::Geography => write!(f, "geography"),
            InputField::Size => write!(f, "size"),
            InputField::Policy => write!(f, "policy"),
        }
    }
}

/// Materiality errors
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialityError {
    /// A value outside its closed enumeration
    #[error("Invalid {field} '{value}': expected one of {}", .accepted.join(", "))]
    InvalidEnum {
        field: InputField,
        value: String,
        accepted: Vec<String>,
    },
}

impl MaterialityError {
    /// Create an invalid enumeration error
    pub fn invalid_enum(
        field: InputField,
        value: impl Into<String>,
        accepted: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::InvalidEnum {
            field,
            value: value.into(),
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    /// The field that failed validation
    pub fn field(&self) -> InputField {
        match self {
            Self::InvalidEnum { field, .. } => *field,
        }
    }
}

/// Result type for materiality operations
pub type Result<T> = std::result::Result<T, MaterialityError>;
