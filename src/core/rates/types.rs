//! Type definitions for the rate table

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::error::{EngineError, Result};

/// Per-unit prices for one model/service tier (USD)
///
/// A model is priced per 1K tokens, per audio minute, per realtime minute,
/// or some combination. At least one price field must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateEntry {
    /// Model identifier (unique key within the table)
    pub model: String,
    /// Human-readable description of what this entry prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input cost per 1K tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_price_per_1k_tokens: Option<f64>,
    /// Output cost per 1K tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_price_per_1k_tokens: Option<f64>,
    /// Audio input cost per minute (transcription, audio analysis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_input_price_per_minute: Option<f64>,
    /// Audio output cost per minute (speech synthesis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_output_price_per_minute: Option<f64>,
    /// Realtime audio input cost per minute (live voice sessions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_input_price_per_minute: Option<f64>,
    /// Realtime audio output cost per minute (live voice sessions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_output_price_per_minute: Option<f64>,
}

impl RateEntry {
    /// Validate the entry: at least one price present, none negative
    pub fn validate(&self) -> Result<()> {
        let prices = [
            self.input_price_per_1k_tokens,
            self.output_price_per_1k_tokens,
            self.audio_input_price_per_minute,
            self.audio_output_price_per_minute,
            self.realtime_input_price_per_minute,
            self.realtime_output_price_per_minute,
        ];

        if prices.iter().all(Option::is_none) {
            return Err(EngineError::config(format!(
                "Rate entry '{}' has no price fields",
                self.model
            )));
        }

        for price in prices.into_iter().flatten() {
            if price < 0.0 || !price.is_finite() {
                return Err(EngineError::config(format!(
                    "Rate entry '{}' has a negative or non-finite price: {}",
                    self.model, price
                )));
            }
        }

        Ok(())
    }

    /// Input token price per 1K, treating an absent price as free
    pub fn input_token_price(&self) -> f64 {
        self.input_price_per_1k_tokens.unwrap_or(0.0)
    }

    /// Output token price per 1K, treating an absent price as free
    pub fn output_token_price(&self) -> f64 {
        self.output_price_per_1k_tokens.unwrap_or(0.0)
    }

    /// Audio input price per minute, treating an absent price as free
    pub fn audio_input_per_minute(&self) -> f64 {
        self.audio_input_price_per_minute.unwrap_or(0.0)
    }

    /// Combined realtime price per minute (input + output)
    pub fn realtime_per_minute(&self) -> f64 {
        self.realtime_input_price_per_minute.unwrap_or(0.0)
            + self.realtime_output_price_per_minute.unwrap_or(0.0)
    }
}

/// Versioned registry of rate entries keyed by model identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Version label for this table (a date works well, e.g. "2025-06")
    pub version: String,
    /// When this table was last updated
    pub updated_at: DateTime<Utc>,
    /// Rate entries keyed by model identifier
    pub models: HashMap<String, RateEntry>,
}

impl RateTable {
    /// Create an empty table with the given version label
    pub fn new<S: Into<String>>(version: S) -> Self {
        Self {
            version: version.into(),
            updated_at: Utc::now(),
            models: HashMap::new(),
        }
    }

    /// Add an entry, keyed by its model identifier
    pub fn insert(&mut self, entry: RateEntry) {
        self.models.insert(entry.model.clone(), entry);
    }

    /// Look up the rate entry for a model
    pub fn lookup(&self, model: &str) -> Result<&RateEntry> {
        self.models.get(model).ok_or_else(|| EngineError::UnknownModel {
            model: model.to_string(),
        })
    }

    /// Validate every entry in the table
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(EngineError::config("Rate table version must not be empty"));
        }
        for entry in self.models.values() {
            entry.validate()?;
        }
        Ok(())
    }

    /// Number of models in the table
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_entry(model: &str) -> RateEntry {
        RateEntry {
            model: model.to_string(),
            input_price_per_1k_tokens: Some(0.01),
            output_price_per_1k_tokens: Some(0.03),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let mut table = RateTable::new("test");
        table.insert(token_entry("gpt-4"));

        assert!(table.lookup("gpt-4").is_ok());
        match table.lookup("gpt-99") {
            Err(EngineError::UnknownModel { model }) => assert_eq!(model, "gpt-99"),
            other => panic!("expected UnknownModel, got {:?}", other),
        }
    }

    #[test]
    fn test_entry_without_prices_rejected() {
        let entry = RateEntry {
            model: "empty".to_string(),
            ..Default::default()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let entry = RateEntry {
            model: "bad".to_string(),
            input_price_per_1k_tokens: Some(-0.01),
            ..Default::default()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_table_validate_covers_entries() {
        let mut table = RateTable::new("test");
        table.insert(token_entry("ok"));
        assert!(table.validate().is_ok());

        table.insert(RateEntry {
            model: "empty".to_string(),
            ..Default::default()
        });
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_absent_prices_read_as_zero() {
        let entry = RateEntry {
            model: "audio-only".to_string(),
            audio_input_price_per_minute: Some(0.006),
            ..Default::default()
        };
        assert_eq!(entry.input_token_price(), 0.0);
        assert_eq!(entry.output_token_price(), 0.0);
        assert_eq!(entry.audio_input_per_minute(), 0.006);
        assert_eq!(entry.realtime_per_minute(), 0.0);
    }
}
