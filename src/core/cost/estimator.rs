//! Cost estimator implementation

use std::sync::Arc;

use crate::config::EstimatorConfig;
use crate::core::rates::{RateEntry, RateTable};
use crate::utils::error::{EngineError, Result};

use super::types::{
    CallCostBreakdown, CallCostEstimate, SimulationCostBreakdown, SimulationCostEstimate,
};
use super::utils::round2;

const CURRENCY: &str = "USD";

/// Prices recorded calls and live simulations against a rate table
///
/// The table is injected at construction so tests can substitute fixture
/// rates; production wiring loads one table at process start. Cloning is
/// cheap (the table is shared).
#[derive(Debug, Clone)]
pub struct CostEstimator {
    rates: Arc<RateTable>,
    config: EstimatorConfig,
}

impl CostEstimator {
    /// Create an estimator over the given rate table and pipeline config
    pub fn new(rates: Arc<RateTable>, config: EstimatorConfig) -> Self {
        Self { rates, config }
    }

    /// The rate table this estimator prices against
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Estimate the cost of processing one recorded call
    ///
    /// Transcription and tone analysis are priced per audio minute; content
    /// analysis assumes a fixed token volume per minute, split evenly
    /// between input and output. `call_type` is carried through for
    /// reporting and does not alter the formula.
    pub fn estimate_call_cost(
        &self,
        duration_minutes: f64,
        call_type: &str,
    ) -> Result<CallCostEstimate> {
        check_duration(duration_minutes)?;

        let transcription =
            duration_minutes * self.lookup(&self.config.transcription_model)?.audio_input_per_minute();
        let tone_analysis =
            duration_minutes * self.lookup(&self.config.tone_analysis_model)?.audio_input_per_minute();

        let content_tokens = self.config.content_tokens_per_minute * duration_minutes;
        let content_analysis = token_cost(
            self.lookup(&self.config.content_analysis_model)?,
            content_tokens / 2.0,
            content_tokens / 2.0,
        );

        let breakdown = CallCostBreakdown {
            transcription,
            tone_analysis,
            content_analysis,
        };

        Ok(CallCostEstimate {
            call_type: call_type.to_string(),
            duration_minutes,
            estimated_cost: round2(breakdown.total()),
            breakdown,
            currency: CURRENCY.to_string(),
        })
    }

    /// Estimate the cost of running one live simulation
    ///
    /// Realtime audio dominates: input and output minutes are both billed
    /// for the full session. The report cost is a fixed token budget,
    /// independent of duration.
    pub fn estimate_simulation_cost(
        &self,
        duration_minutes: f64,
        simulation_type: &str,
    ) -> Result<SimulationCostEstimate> {
        check_duration(duration_minutes)?;

        let realtime_audio =
            duration_minutes * self.lookup(&self.config.realtime_model)?.realtime_per_minute();
        let transcription =
            duration_minutes * self.lookup(&self.config.transcription_model)?.audio_input_per_minute();
        let report_generation = token_cost(
            self.lookup(&self.config.report_model)?,
            f64::from(self.config.report_input_tokens),
            f64::from(self.config.report_output_tokens),
        );

        let breakdown = SimulationCostBreakdown {
            realtime_audio,
            transcription,
            report_generation,
        };

        Ok(SimulationCostEstimate {
            simulation_type: simulation_type.to_string(),
            duration_minutes,
            estimated_cost: round2(breakdown.total()),
            breakdown,
            currency: CURRENCY.to_string(),
        })
    }

    fn lookup(&self, model: &str) -> Result<&RateEntry> {
        self.rates.lookup(model)
    }
}

/// Price a token volume against an entry's per-1K rates
fn token_cost(entry: &RateEntry, input_tokens: f64, output_tokens: f64) -> f64 {
    (input_tokens / 1000.0) * entry.input_token_price()
        + (output_tokens / 1000.0) * entry.output_token_price()
}

fn check_duration(duration_minutes: f64) -> Result<()> {
    if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
        return Err(EngineError::InvalidDuration {
            value: duration_minutes,
        });
    }
    Ok(())
}
