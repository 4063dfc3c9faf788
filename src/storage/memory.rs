//! In-memory usage store for tests and local development

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use parking_lot::RwLock;

use crate::core::usage::{CallRecord, SimulationRecord};
use crate::utils::error::{EngineError, Result};

use super::store::{CompanyDescriptor, UsageStore};

#[derive(Debug, Clone)]
struct SimulationRow {
    started_at: DateTime<Utc>,
    duration_seconds: f64,
}

#[derive(Debug, Default)]
struct CompanyState {
    descriptor: Option<CompanyDescriptor>,
    simulations: Vec<SimulationRow>,
    calls: Vec<CallRecord>,
}

/// In-memory [`UsageStore`] keyed by company id
///
/// Month/day scoping uses UTC. Unknown companies surface as upstream
/// failures, matching how a missing row reads from the real store.
#[derive(Debug, Default)]
pub struct InMemoryUsageStore {
    companies: RwLock<HashMap<String, CompanyState>>,
}

impl InMemoryUsageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a company descriptor
    pub fn insert_company(&self, company_id: &str, descriptor: CompanyDescriptor) {
        let mut companies = self.companies.write();
        companies.entry(company_id.to_string()).or_default().descriptor = Some(descriptor);
    }

    /// Record a simulation with an explicit start time (for tests)
    pub fn record_simulation_at(
        &self,
        company_id: &str,
        duration_seconds: f64,
        started_at: DateTime<Utc>,
    ) {
        let mut companies = self.companies.write();
        companies
            .entry(company_id.to_string())
            .or_default()
            .simulations
            .push(SimulationRow {
                started_at,
                duration_seconds,
            });
    }

    /// Add a historical call row (for tests)
    pub fn insert_call(&self, company_id: &str, record: CallRecord) {
        let mut companies = self.companies.write();
        companies
            .entry(company_id.to_string())
            .or_default()
            .calls
            .push(record);
    }
}

fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[async_trait]
impl UsageStore for InMemoryUsageStore {
    async fn fetch_company(&self, company_id: &str) -> Result<CompanyDescriptor> {
        let companies = self.companies.read();
        companies
            .get(company_id)
            .and_then(|state| state.descriptor.clone())
            .ok_or_else(|| EngineError::upstream(format!("company '{}' not found", company_id)))
    }

    async fn fetch_current_month_simulations(
        &self,
        company_id: &str,
    ) -> Result<Vec<SimulationRecord>> {
        let now = Utc::now();
        let companies = self.companies.read();
        let Some(state) = companies.get(company_id) else {
            return Ok(Vec::new());
        };

        Ok(state
            .simulations
            .iter()
            .filter(|row| same_month(row.started_at, now))
            .map(|row| SimulationRecord::with_duration_seconds(row.duration_seconds))
            .collect())
    }

    async fn fetch_today_simulation_count(&self, company_id: &str) -> Result<u32> {
        let today = Utc::now().date_naive();
        let companies = self.companies.read();
        let Some(state) = companies.get(company_id) else {
            return Ok(0);
        };

        Ok(state
            .simulations
            .iter()
            .filter(|row| row.started_at.date_naive() == today)
            .count() as u32)
    }

    async fn fetch_call_history(&self, company_id: &str) -> Result<Vec<CallRecord>> {
        let companies = self.companies.read();
        Ok(companies
            .get(company_id)
            .map(|state| state.calls.clone())
            .unwrap_or_default())
    }

    async fn record_simulation_usage(
        &self,
        company_id: &str,
        duration_seconds: f64,
    ) -> Result<()> {
        self.record_simulation_at(company_id, duration_seconds, Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn descriptor() -> CompanyDescriptor {
        CompanyDescriptor {
            team_size: 8,
            quota_total_minutes: 500,
            is_unmetered: false,
        }
    }

    #[test]
    fn test_unknown_company_is_upstream_failure() {
        let store = InMemoryUsageStore::new();
        let result = tokio_test::block_on(store.fetch_company("missing"));
        assert!(matches!(result, Err(EngineError::Upstream(_))));
    }

    #[test]
    fn test_month_scoping() {
        let store = InMemoryUsageStore::new();
        store.insert_company("acme", descriptor());

        let now = Utc::now();
        store.record_simulation_at("acme", 600.0, now);
        store.record_simulation_at("acme", 300.0, now - Duration::days(62));

        let records =
            tokio_test::block_on(store.fetch_current_month_simulations("acme")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].duration_seconds, Some(600.0));
    }

    #[test]
    fn test_today_scoping() {
        let store = InMemoryUsageStore::new();
        store.insert_company("acme", descriptor());

        let now = Utc::now();
        store.record_simulation_at("acme", 600.0, now);
        store.record_simulation_at("acme", 600.0, now - Duration::days(2));

        let count = tokio_test::block_on(store.fetch_today_simulation_count("acme")).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_write_back_is_visible() {
        let store = InMemoryUsageStore::new();
        store.insert_company("acme", descriptor());

        tokio_test::block_on(store.record_simulation_usage("acme", 420.0)).unwrap();

        let count = tokio_test::block_on(store.fetch_today_simulation_count("acme")).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_call_history_roundtrip() {
        let store = InMemoryUsageStore::new();
        store.insert_call(
            "acme",
            CallRecord {
                duration_minutes: Some(12.0),
                call_type: Some("support".to_string()),
            },
        );

        let calls = tokio_test::block_on(store.fetch_call_history("acme")).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].duration_minutes, Some(12.0));
    }
}
