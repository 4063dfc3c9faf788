//! Type definitions for cost estimates

use serde::{Deserialize, Serialize};

/// Per-component costs for one processed call (unrounded USD)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallCostBreakdown {
    /// Audio transcription cost
    pub transcription: f64,
    /// Tone/sentiment analysis cost
    pub tone_analysis: f64,
    /// Transcript content analysis cost
    pub content_analysis: f64,
}

impl CallCostBreakdown {
    /// Sum of all components
    pub fn total(&self) -> f64 {
        self.transcription + self.tone_analysis + self.content_analysis
    }
}

/// Result of pricing one recorded call
///
/// Constructed fresh per call; the engine never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallCostEstimate {
    /// Call type label, carried through verbatim for reporting
    pub call_type: String,
    /// Call duration in minutes
    pub duration_minutes: f64,
    /// Total estimated cost, rounded to 2 decimal places
    pub estimated_cost: f64,
    /// Per-component costs
    pub breakdown: CallCostBreakdown,
    /// Currency (always "USD" today)
    pub currency: String,
}

/// Per-component costs for one live simulation (unrounded USD)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationCostBreakdown {
    /// Realtime voice session cost (the dominant driver)
    pub realtime_audio: f64,
    /// Session transcription cost
    pub transcription: f64,
    /// Post-simulation report generation cost (duration-independent)
    pub report_generation: f64,
}

impl SimulationCostBreakdown {
    /// Sum of all components
    pub fn total(&self) -> f64 {
        self.realtime_audio + self.transcription + self.report_generation
    }
}

/// Result of pricing one live simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationCostEstimate {
    /// Simulation type label, carried through verbatim for reporting
    pub simulation_type: String,
    /// Simulation duration in minutes
    pub duration_minutes: f64,
    /// Total estimated cost, rounded to 2 decimal places
    pub estimated_cost: f64,
    /// Per-component costs
    pub breakdown: SimulationCostBreakdown,
    /// Currency (always "USD" today)
    pub currency: String,
}
