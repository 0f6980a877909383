//! CLI error types
//!
//! Profile values are validated by clap through their `FromStr` impls, so a
//! bad `--sector` never reaches command code. What remains is output
//! rendering.

use thiserror::Error;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializer_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CliError::from(json_err);
        assert!(err.to_string().starts_with("Serialization error:"));

        let yaml_err = serde_yaml::from_str::<Vec<u8>>("[1, 2").unwrap_err();
        let err = CliError::from(yaml_err);
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
