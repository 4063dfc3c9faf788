//! Historical usage aggregation
//!
//! Folds already-fetched call/simulation records into cost totals by
//! re-pricing each record against the current rate table.

mod aggregator;
mod types;

pub use aggregator::UsageAggregator;
pub use types::{CallRecord, SimulationRecord, UsageTotals};
