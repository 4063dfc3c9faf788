//! # coachmeter
//!
//! Cost estimation and usage limiting engine for AI-powered call coaching
//! platforms.
//!
//! The engine prices AI usage (transcription, tone analysis, content
//! analysis, realtime voice simulation) from a versioned rate table,
//! derives recommended per-company operational limits from coarse company
//! attributes, evaluates whether a proposed simulation is allowed against
//! current usage, and rolls historical usage up into cost reports. All of
//! it is deterministic computation; the only I/O is the persistence
//! collaborator behind the [`UsageStore`] trait.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use coachmeter::{CostEngine, InMemoryUsageStore};
//!
//! #[tokio::main]
//! async fn main() -> coachmeter::Result<()> {
//!     let store = Arc::new(InMemoryUsageStore::new());
//!     let engine = CostEngine::with_defaults(store)?;
//!
//!     // Price a 10-minute live simulation
//!     let estimate = engine.estimate_simulation_cost(10.0, "objection-handling")?;
//!     println!("estimated cost: ${:.2}", estimate.estimated_cost);
//!
//!     // Gate a simulation start on the company's limits
//!     let check = engine.check_simulation_allowed("acme", 10.0).await?;
//!     if check.allowed {
//!         println!("go ahead ({:?} left today)", check.remaining_simulations_today);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::{EngineConfig, EstimatorConfig, FailurePolicy, WarningThresholds};
pub use utils::error::{EngineError, Result};

pub use core::analysis::{CostBenefitAnalysis, CostBenefitAnalyzer, RecommendationTier};
pub use core::cost::{
    CallCostBreakdown, CallCostEstimate, CostEstimator, SimulationCostBreakdown,
    SimulationCostEstimate,
};
pub use core::limits::{
    BudgetTier, CompanyLimits, CompanySizeTier, CurrentMonthUsage, LimitEnforcer,
    LimitRecommendation, LimitRecommender, SimulationLimitCheck,
};
pub use core::rates::{RateEntry, RateTable, builtin as builtin_rates};
pub use core::usage::{CallRecord, SimulationRecord, UsageAggregator, UsageTotals};
pub use storage::{CompanyDescriptor, InMemoryUsageStore, UsageStore};

use std::sync::Arc;

use tracing::info;

/// One wired-up engine instance
///
/// Bundles the estimator, recommender, analyzer, aggregator and enforcer
/// over a shared rate table and persistence collaborator. UI/API handlers
/// call these methods directly; none of the results are cached.
pub struct CostEngine {
    estimator: CostEstimator,
    recommender: LimitRecommender,
    analyzer: CostBenefitAnalyzer,
    aggregator: UsageAggregator,
    enforcer: LimitEnforcer,
}

impl CostEngine {
    /// Create an engine over an explicit config, rate table and store
    pub fn new(
        config: EngineConfig,
        rates: Arc<RateTable>,
        store: Arc<dyn UsageStore>,
    ) -> Result<Self> {
        config.validate()?;
        rates.validate()?;
        info!(
            rate_table_version = %rates.version,
            models = rates.len(),
            "cost engine initialized"
        );

        let estimator = CostEstimator::new(rates, config.estimator);
        Ok(Self {
            recommender: LimitRecommender::new(estimator.clone()),
            analyzer: CostBenefitAnalyzer::new(estimator.clone()),
            aggregator: UsageAggregator::new(estimator.clone()),
            enforcer: LimitEnforcer::new(
                store,
                estimator.clone(),
                config.warnings,
                config.failure_policy,
            ),
            estimator,
        })
    }

    /// Create an engine with the default config and built-in rate table
    pub fn with_defaults(store: Arc<dyn UsageStore>) -> Result<Self> {
        Self::new(EngineConfig::default(), builtin_rates(), store)
    }

    /// Price one recorded call of the given duration and type
    pub fn estimate_call_cost(
        &self,
        duration_minutes: f64,
        call_type: &str,
    ) -> Result<CallCostEstimate> {
        self.estimator.estimate_call_cost(duration_minutes, call_type)
    }

    /// Price one live simulation of the given duration and type
    pub fn estimate_simulation_cost(
        &self,
        duration_minutes: f64,
        simulation_type: &str,
    ) -> Result<SimulationCostEstimate> {
        self.estimator
            .estimate_simulation_cost(duration_minutes, simulation_type)
    }

    /// Recommend operational limits for a tier combination
    pub fn recommend_limits(
        &self,
        size: CompanySizeTier,
        budget: BudgetTier,
    ) -> Result<LimitRecommendation> {
        self.recommender.recommend(size, budget)
    }

    /// Recommend operational limits from string tier labels
    pub fn recommend_limits_for(&self, size: &str, budget: &str) -> Result<LimitRecommendation> {
        self.recommender.recommend_for(size, budget)
    }

    /// Classify an adoption scenario into a recommendation tier
    pub fn analyze_cost_benefit(
        &self,
        simulations_per_month: u32,
        avg_duration_minutes: f64,
        team_size: u32,
    ) -> Result<CostBenefitAnalysis> {
        self.analyzer
            .analyze(simulations_per_month, avg_duration_minutes, team_size)
    }

    /// Roll historical usage records up into cost totals
    pub fn aggregate_actual_costs(
        &self,
        call_records: &[CallRecord],
        simulation_records: &[SimulationRecord],
    ) -> Result<UsageTotals> {
        self.aggregator
            .aggregate_actual_costs(call_records, simulation_records)
    }

    /// Decide whether a proposed simulation may start
    pub async fn check_simulation_allowed(
        &self,
        company_id: &str,
        duration_minutes: f64,
    ) -> Result<SimulationLimitCheck> {
        self.enforcer
            .check_simulation_allowed(company_id, duration_minutes)
            .await
    }

    /// Derive the current policy snapshot for a company
    pub async fn company_limits(&self, company_id: &str) -> Result<CompanyLimits> {
        self.enforcer.company_limits(company_id).await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
