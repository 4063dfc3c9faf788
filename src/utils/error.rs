//! Error handling for the cost engine
//!
//! This module defines all error types used throughout the engine.

use thiserror::Error;

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main error type for the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// A non-positive or non-finite duration was passed to an estimator
    #[error("Invalid duration: {value} minutes (must be positive)")]
    InvalidDuration {
        /// The rejected duration, in minutes
        value: f64,
    },

    /// Rate table lookup miss
    #[error("Unknown model: {model}")]
    UnknownModel {
        /// The model identifier that was not found
        model: String,
    },

    /// Limit recommender received an unrecognized tier pair
    #[error("Unknown tier combination: size '{size}', budget '{budget}'")]
    UnknownTierCombination {
        /// The unrecognized company size tier
        size: String,
        /// The unrecognized budget tier
        budget: String,
    },

    /// Cost-benefit analysis requires at least one agent
    #[error("Invalid team size: {value} (must be at least 1)")]
    InvalidTeamSize {
        /// The rejected team size
        value: u32,
    },

    /// Persistence collaborator failure
    #[error("Upstream fetch failure: {0}")]
    Upstream(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl EngineError {
    /// Create an upstream fetch failure error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidDuration { value: -1.5 };
        assert_eq!(
            err.to_string(),
            "Invalid duration: -1.5 minutes (must be positive)"
        );

        let err = EngineError::UnknownModel {
            model: "gpt-99".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown model: gpt-99");

        let err = EngineError::UnknownTierCombination {
            size: "tiny".to_string(),
            budget: "none".to_string(),
        };
        assert!(err.to_string().contains("tiny"));
        assert!(err.to_string().contains("none"));
    }

    #[test]
    fn test_upstream_helper() {
        let err = EngineError::upstream("connection refused");
        assert!(matches!(err, EngineError::Upstream(_)));
        assert_eq!(err.to_string(), "Upstream fetch failure: connection refused");
    }
}
