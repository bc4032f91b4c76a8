//! Error types for orgplan

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for orgplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while locating or parsing the organization document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Organization document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse organization document: {0}")]
    ParseError(String),

    #[error("Invalid organization document: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Fatal validation errors that abort an organization build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Repository '{0}' is duplicated.")]
    DuplicateRepository(String),

    #[error(
        "Team '{team}' references parent team '{parent}' which is not yet defined. \
         Declare parents before children."
    )]
    UnresolvedParent { team: String, parent: String },

    #[error("Team '{0}' must define 'members'.")]
    MissingMembers(String),

    #[error("Invalid {kind} entry: {message}")]
    InvalidDeclaration { kind: &'static str, message: String },
}

/// Errors reported by the resource provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider rejected {kind} '{name}': {reason}")]
    Rejected {
        kind: String,
        name: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found_names_path() {
        let err = ConfigError::NotFound(PathBuf::from("data/github.yaml"));
        assert!(err.to_string().contains("data/github.yaml"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_build_error_duplicate_names_repo() {
        let err = BuildError::DuplicateRepository("infra".to_string());
        assert_eq!(err.to_string(), "Repository 'infra' is duplicated.");
    }

    #[test]
    fn test_build_error_unresolved_parent_message() {
        let err = BuildError::UnresolvedParent {
            team: "backend".to_string(),
            parent: "engineering".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("backend"));
        assert!(msg.contains("engineering"));
        assert!(msg.contains("Declare parents before children"));
    }

    #[test]
    fn test_build_error_missing_members() {
        let err = BuildError::MissingMembers("ops".to_string());
        assert!(err.to_string().contains("'ops'"));
        assert!(err.to_string().contains("members"));
    }

    #[test]
    fn test_provider_error_message() {
        let err = ProviderError::Rejected {
            kind: "github:Repository".to_string(),
            name: "infra".to_string(),
            reason: "rate limited".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("infra"));
        assert!(msg.contains("rate limited"));
    }

    #[test]
    fn test_error_from_build_error() {
        let err: Error = BuildError::MissingField("organization.name").into();

        match err {
            Error::Build(BuildError::MissingField(field)) => {
                assert_eq!(field, "organization.name")
            }
            _ => panic!("Expected Error::Build(BuildError::MissingField)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
