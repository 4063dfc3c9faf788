//! Built-in rate table
//!
//! Deployment-time data: update the entries (and bump the version) when
//! vendor pricing changes. Calculation logic never needs to change for a
//! pricing update.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::types::{RateEntry, RateTable};

static BUILTIN: Lazy<Arc<RateTable>> = Lazy::new(|| {
    let mut table = RateTable::new("2025-06");

    table.insert(RateEntry {
        model: "whisper-1".to_string(),
        description: Some("Audio transcription".to_string()),
        audio_input_price_per_minute: Some(0.006),
        ..Default::default()
    });

    table.insert(RateEntry {
        model: "gpt-4o-audio-preview".to_string(),
        description: Some("Tone and sentiment analysis over audio".to_string()),
        audio_input_price_per_minute: Some(0.010),
        ..Default::default()
    });

    table.insert(RateEntry {
        model: "gpt-4o-mini".to_string(),
        description: Some("Transcript content analysis".to_string()),
        input_price_per_1k_tokens: Some(0.00015),
        output_price_per_1k_tokens: Some(0.0006),
        ..Default::default()
    });

    table.insert(RateEntry {
        model: "gpt-4".to_string(),
        description: Some("Post-simulation report generation".to_string()),
        input_price_per_1k_tokens: Some(0.01),
        output_price_per_1k_tokens: Some(0.03),
        ..Default::default()
    });

    table.insert(RateEntry {
        model: "gpt-4o-realtime-preview".to_string(),
        description: Some("Live voice simulation".to_string()),
        realtime_input_price_per_minute: Some(0.100),
        realtime_output_price_per_minute: Some(0.200),
        ..Default::default()
    });

    Arc::new(table)
});

/// The built-in rate table, shared across the process
pub fn builtin() -> Arc<RateTable> {
    Arc::clone(&BUILTIN)
}
