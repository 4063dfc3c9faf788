//! Type definitions for usage records and totals

use serde::{Deserialize, Serialize};

/// One historical recorded-call usage row, as fetched from storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallRecord {
    /// Recorded duration in minutes; records missing this are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Call type label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
}

/// One historical simulation usage row, as fetched from storage
///
/// Simulation durations are stored in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Recorded duration in seconds; records missing this are skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Simulation type label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_type: Option<String>,
}

impl SimulationRecord {
    /// Convenience constructor used by stores and tests
    pub fn with_duration_seconds(duration_seconds: f64) -> Self {
        Self {
            duration_seconds: Some(duration_seconds),
            simulation_type: None,
        }
    }
}

/// Summary totals for a set of usage records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageTotals {
    /// Combined cost of calls and simulations, rounded to 2 decimals
    pub total_cost: f64,
    /// Cost of recorded-call processing, rounded to 2 decimals
    pub calls_cost: f64,
    /// Cost of live simulations, rounded to 2 decimals
    pub simulations_cost: f64,
    /// Number of call records that carried a usable duration
    pub calls_count: u32,
    /// Number of simulation records that carried a usable duration
    pub simulations_count: u32,
}
