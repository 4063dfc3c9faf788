//! Configuration management for the cost engine
//!
//! This module handles loading and validation of engine configuration:
//! which rate-table entry each pipeline stage is priced against, the
//! estimation constants, warning thresholds, and the failure policy for
//! the limit enforcer.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::utils::error::{EngineError, Result};

/// Main configuration struct for the engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cost estimator configuration
    pub estimator: EstimatorConfig,
    /// Soft-warning thresholds used by the limit enforcer
    pub warnings: WarningThresholds,
    /// What the limit enforcer does when usage data cannot be fetched
    pub failure_policy: FailurePolicy,
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading engine configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EngineError::config(format!("Failed to read config file: {}", e)))?;

        let config: EngineConfig = serde_yaml::from_str(&content)
            .map_err(|e| EngineError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Engine configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.estimator.validate()?;
        self.warnings.validate()?;
        Ok(())
    }
}

/// Cost estimator configuration
///
/// Binds each stage of the call/simulation pipeline to a rate-table entry
/// and fixes the token-volume assumptions that turn a duration into a cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Model used for audio transcription (priced per audio minute)
    pub transcription_model: String,
    /// Model used for tone/sentiment analysis (priced per audio minute)
    pub tone_analysis_model: String,
    /// Model used for transcript content analysis (priced per token)
    pub content_analysis_model: String,
    /// Model used to generate the post-simulation report (priced per token)
    pub report_model: String,
    /// Model used for live voice simulation (priced per realtime minute)
    pub realtime_model: String,
    /// Assumed content-analysis token volume per minute of audio,
    /// split evenly between input and output tokens
    pub content_tokens_per_minute: f64,
    /// Assumed input tokens for one post-simulation report
    pub report_input_tokens: u32,
    /// Assumed output tokens for one post-simulation report
    pub report_output_tokens: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            transcription_model: "whisper-1".to_string(),
            tone_analysis_model: "gpt-4o-audio-preview".to_string(),
            content_analysis_model: "gpt-4o-mini".to_string(),
            report_model: "gpt-4".to_string(),
            realtime_model: "gpt-4o-realtime-preview".to_string(),
            content_tokens_per_minute: 500.0,
            report_input_tokens: 1000,
            report_output_tokens: 2000,
        }
    }
}

impl EstimatorConfig {
    /// Validate the estimator configuration
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("transcription_model", &self.transcription_model),
            ("tone_analysis_model", &self.tone_analysis_model),
            ("content_analysis_model", &self.content_analysis_model),
            ("report_model", &self.report_model),
            ("realtime_model", &self.realtime_model),
        ] {
            if value.is_empty() {
                return Err(EngineError::config(format!("{} must not be empty", field)));
            }
        }

        if !(self.content_tokens_per_minute > 0.0) {
            return Err(EngineError::config(
                "content_tokens_per_minute must be positive",
            ));
        }

        Ok(())
    }
}

/// Soft-warning thresholds, expressed as percentages of the monthly limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningThresholds {
    /// Warn when projected monthly spend reaches this percent of the budget
    pub cost_warning_at_percent: f64,
    /// Warn when the monthly simulation count reaches this percent of the cap
    pub usage_warning_at_percent: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            cost_warning_at_percent: 80.0,
            usage_warning_at_percent: 85.0,
        }
    }
}

impl WarningThresholds {
    /// Validate the thresholds
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("cost_warning_at_percent", self.cost_warning_at_percent),
            ("usage_warning_at_percent", self.usage_warning_at_percent),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::config(format!(
                    "{} must be between 0 and 100, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// What the limit enforcer does when the persistence collaborator fails
///
/// Fail-open trades strict enforcement for availability: a simulation is
/// allowed with a warning rather than blocked on a transient metrics
/// failure. Fail-closed denies instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Allow the simulation and attach a warning (default)
    #[default]
    FailOpen,
    /// Deny the simulation with an explanatory reason
    FailClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.failure_policy, FailurePolicy::FailOpen);
        assert_eq!(config.warnings.cost_warning_at_percent, 80.0);
        assert_eq!(config.warnings.usage_warning_at_percent, 85.0);
    }

    #[test]
    fn test_rejects_out_of_range_thresholds() {
        let mut config = EngineConfig::default();
        config.warnings.cost_warning_at_percent = 120.0;
        assert!(config.validate().is_err());

        config.warnings.cost_warning_at_percent = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_model_binding() {
        let mut config = EngineConfig::default();
        config.estimator.report_model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_token_rate() {
        let mut config = EngineConfig::default();
        config.estimator.content_tokens_per_minute = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
failure_policy: fail_closed
warnings:
  cost_warning_at_percent: 75.0
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::FailClosed);
        assert_eq!(config.warnings.cost_warning_at_percent, 75.0);
        // Untouched sections keep their defaults
        assert_eq!(config.warnings.usage_warning_at_percent, 85.0);
        assert_eq!(config.estimator.transcription_model, "whisper-1");
    }

    #[tokio::test]
    async fn test_from_file_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = serde_yaml::to_string(&EngineConfig::default()).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = EngineConfig::from_file(file.path()).await.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.estimator.realtime_model, "gpt-4o-realtime-preview");
    }

    #[tokio::test]
    async fn test_from_file_missing() {
        let result = EngineConfig::from_file("/nonexistent/engine.yaml").await;
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
