//! The persistence collaborator trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::usage::{CallRecord, SimulationRecord};
use crate::utils::error::Result;

/// Coarse company attributes consumed by the limit enforcer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDescriptor {
    /// Number of agents on the team
    pub team_size: u32,
    /// Purchased quota, in minutes per month
    pub quota_total_minutes: u32,
    /// Unmetered/trial accounts skip all limit checks
    pub is_unmetered: bool,
}

/// Read operations (plus one usage write-back) the engine needs from the
/// persistence layer
///
/// Time scoping is the implementer's concern: "current month" means the
/// current calendar month and "today" means since local midnight, in
/// whatever timezone the platform bills in. Failures surface as
/// `EngineError::Upstream`; the enforcer's failure policy decides what
/// happens next.
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Fetch the company descriptor
    async fn fetch_company(&self, company_id: &str) -> Result<CompanyDescriptor>;

    /// Simulation usage rows for the current calendar month
    async fn fetch_current_month_simulations(
        &self,
        company_id: &str,
    ) -> Result<Vec<SimulationRecord>>;

    /// Number of simulations started today
    async fn fetch_today_simulation_count(&self, company_id: &str) -> Result<u32>;

    /// Historical call rows for reporting
    async fn fetch_call_history(&self, company_id: &str) -> Result<Vec<CallRecord>>;

    /// Record one completed simulation
    async fn record_simulation_usage(&self, company_id: &str, duration_seconds: f64)
    -> Result<()>;
}
