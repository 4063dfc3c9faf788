//! Usage aggregator implementation

use crate::core::cost::{CostEstimator, round2};
use crate::utils::error::Result;

use super::types::{CallRecord, SimulationRecord, UsageTotals};

const DEFAULT_CALL_TYPE: &str = "standard";
const DEFAULT_SIMULATION_TYPE: &str = "simulation";

/// Rolls historical usage records up into cost totals
///
/// Records are re-priced with the current rate table, not rates-at-time-of-
/// use. Historical cost reports therefore shift when the table is updated;
/// time-accurate pricing would require a table snapshot per record.
#[derive(Debug, Clone)]
pub struct UsageAggregator {
    estimator: CostEstimator,
}

impl UsageAggregator {
    /// Create an aggregator over the given estimator
    pub fn new(estimator: CostEstimator) -> Self {
        Self { estimator }
    }

    /// Fold call and simulation records into summary totals
    ///
    /// Records with a missing or non-positive duration are silently
    /// skipped. Simulation durations are stored in seconds and converted
    /// to minutes here.
    pub fn aggregate_actual_costs(
        &self,
        call_records: &[CallRecord],
        simulation_records: &[SimulationRecord],
    ) -> Result<UsageTotals> {
        let mut totals = UsageTotals::default();
        let mut calls_cost = 0.0;
        let mut simulations_cost = 0.0;

        for record in call_records {
            let Some(duration) = record.duration_minutes.filter(|d| *d > 0.0) else {
                continue;
            };
            let call_type = record.call_type.as_deref().unwrap_or(DEFAULT_CALL_TYPE);
            let estimate = self.estimator.estimate_call_cost(duration, call_type)?;
            calls_cost += estimate.estimated_cost;
            totals.calls_count += 1;
        }

        for record in simulation_records {
            let Some(seconds) = record.duration_seconds.filter(|d| *d > 0.0) else {
                continue;
            };
            let simulation_type = record
                .simulation_type
                .as_deref()
                .unwrap_or(DEFAULT_SIMULATION_TYPE);
            let estimate = self
                .estimator
                .estimate_simulation_cost(seconds / 60.0, simulation_type)?;
            simulations_cost += estimate.estimated_cost;
            totals.simulations_count += 1;
        }

        totals.calls_cost = round2(calls_cost);
        totals.simulations_cost = round2(simulations_cost);
        totals.total_cost = round2(calls_cost + simulations_cost);
        Ok(totals)
    }
}
