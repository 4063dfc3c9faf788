//! Limit enforcer implementation
//!
//! The one orchestration point in the engine: everything else is pure
//! computation, while the enforcer reads company and usage data through
//! the persistence collaborator and applies the recommended policy.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{FailurePolicy, WarningThresholds};
use crate::core::cost::{CostEstimator, round2};
use crate::core::usage::UsageAggregator;
use crate::storage::UsageStore;
use crate::utils::error::{EngineError, Result};

use super::recommender::LimitRecommender;
use super::types::{
    BudgetTier, CompanyLimits, CompanySizeTier, CurrentMonthUsage, LimitRecommendation,
    SimulationLimitCheck,
};

/// Evaluates proposed simulations against per-company limits
///
/// Checks run sequentially and short-circuit on the first failure, cheapest
/// first: the duration cap is tested before any usage query is issued.
/// Nothing is cached between calls; every check recomputes the policy from
/// live inputs.
pub struct LimitEnforcer {
    store: Arc<dyn UsageStore>,
    estimator: CostEstimator,
    recommender: LimitRecommender,
    aggregator: UsageAggregator,
    warnings: WarningThresholds,
    failure_policy: FailurePolicy,
}

impl LimitEnforcer {
    /// Create an enforcer over a store and estimator
    pub fn new(
        store: Arc<dyn UsageStore>,
        estimator: CostEstimator,
        warnings: WarningThresholds,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            store,
            recommender: LimitRecommender::new(estimator.clone()),
            aggregator: UsageAggregator::new(estimator.clone()),
            estimator,
            warnings,
            failure_policy,
        }
    }

    /// Decide whether a proposed simulation may start
    ///
    /// Invalid input (non-positive duration) propagates as an error; an
    /// upstream fetch failure never does. Under the default fail-open
    /// policy it becomes an allow decision with a warning, under
    /// fail-closed a denial — either way the caller gets a decision.
    pub async fn check_simulation_allowed(
        &self,
        company_id: &str,
        duration_minutes: f64,
    ) -> Result<SimulationLimitCheck> {
        let cost_estimate = self
            .estimator
            .estimate_simulation_cost(duration_minutes, "simulation")?
            .estimated_cost;

        match self.evaluate(company_id, duration_minutes, cost_estimate).await {
            Ok(check) => Ok(check),
            Err(EngineError::Upstream(message)) => {
                Ok(self.resolve_upstream_failure(company_id, &message, cost_estimate))
            }
            Err(other) => Err(other),
        }
    }

    /// Derive the current policy snapshot for a company
    ///
    /// Reporting call: upstream failures propagate here, since there is no
    /// allow/deny decision to fall back on.
    pub async fn company_limits(&self, company_id: &str) -> Result<CompanyLimits> {
        let company = self.store.fetch_company(company_id).await?;
        let recommendation = self.recommend_for_company(&company)?;

        let records = self
            .store
            .fetch_current_month_simulations(company_id)
            .await?;
        let totals = self.aggregator.aggregate_actual_costs(&[], &records)?;
        let total_duration_minutes = records
            .iter()
            .filter_map(|r| r.duration_seconds)
            .filter(|d| *d > 0.0)
            .sum::<f64>()
            / 60.0;

        Ok(CompanyLimits {
            company_id: company_id.to_string(),
            max_simulation_duration_minutes: recommendation.max_duration_minutes,
            max_simulations_per_day: recommendation.max_simulations_per_day,
            max_simulations_per_month: recommendation.max_simulations_per_month,
            max_cost_per_month: recommendation.estimated_monthly_cost,
            current_month_usage: CurrentMonthUsage {
                simulations_count: records.len() as u32,
                total_cost: totals.total_cost,
                total_duration_minutes,
            },
            warning_thresholds: self.warnings,
            is_limited: !company.is_unmetered,
            company_size_tier: recommendation.company_size_tier,
            budget_tier: recommendation.budget_tier,
        })
    }

    async fn evaluate(
        &self,
        company_id: &str,
        duration_minutes: f64,
        cost_estimate: f64,
    ) -> Result<SimulationLimitCheck> {
        let company = self.store.fetch_company(company_id).await?;

        if company.is_unmetered {
            debug!(company_id, "unmetered account, skipping limit checks");
            return Ok(SimulationLimitCheck::allowed_with_cost(cost_estimate));
        }

        let limits = self.recommend_for_company(&company)?;

        // Duration cap is pure; deny before touching any usage query
        if duration_minutes > f64::from(limits.max_duration_minutes) {
            return Ok(SimulationLimitCheck::denied(
                format!(
                    "Simulation duration {:.1} min exceeds the {} min limit",
                    duration_minutes, limits.max_duration_minutes
                ),
                cost_estimate,
            ));
        }

        let today_count = self.store.fetch_today_simulation_count(company_id).await?;
        if today_count >= limits.max_simulations_per_day {
            return Ok(SimulationLimitCheck::denied(
                format!(
                    "Daily simulation limit reached ({} of {})",
                    today_count, limits.max_simulations_per_day
                ),
                cost_estimate,
            ));
        }

        let records = self
            .store
            .fetch_current_month_simulations(company_id)
            .await?;
        let month_count = records.len() as u32;
        if month_count >= limits.max_simulations_per_month {
            return Ok(SimulationLimitCheck::denied(
                format!(
                    "Monthly simulation limit reached ({} of {})",
                    month_count, limits.max_simulations_per_month
                ),
                cost_estimate,
            ));
        }

        let totals = self.aggregator.aggregate_actual_costs(&[], &records)?;
        let projected_cost = round2(totals.total_cost + cost_estimate);
        if projected_cost > limits.estimated_monthly_cost {
            return Ok(SimulationLimitCheck::denied(
                format!(
                    "Monthly budget would be exceeded (${:.2} projected of ${:.2})",
                    projected_cost, limits.estimated_monthly_cost
                ),
                cost_estimate,
            ));
        }

        Ok(self.allow(&limits, today_count, month_count, projected_cost, cost_estimate))
    }

    fn allow(
        &self,
        limits: &LimitRecommendation,
        today_count: u32,
        month_count: u32,
        projected_cost: f64,
        cost_estimate: f64,
    ) -> SimulationLimitCheck {
        let mut check = SimulationLimitCheck::allowed_with_cost(cost_estimate);
        check.remaining_simulations_today =
            Some(limits.max_simulations_per_day.saturating_sub(today_count + 1));
        check.remaining_simulations_month =
            Some(limits.max_simulations_per_month.saturating_sub(month_count + 1));
        check.remaining_budget =
            Some(round2((limits.estimated_monthly_cost - projected_cost).max(0.0)));

        let cost_percent = if limits.estimated_monthly_cost > 0.0 {
            projected_cost / limits.estimated_monthly_cost * 100.0
        } else {
            0.0
        };
        if cost_percent >= self.warnings.cost_warning_at_percent {
            check.warnings.push(format!(
                "Projected spend is {:.0}% of the monthly budget (${:.2} of ${:.2})",
                cost_percent, projected_cost, limits.estimated_monthly_cost
            ));
        }

        let usage_percent =
            f64::from(month_count + 1) / f64::from(limits.max_simulations_per_month) * 100.0;
        if usage_percent >= self.warnings.usage_warning_at_percent {
            check.warnings.push(format!(
                "This month's simulation count is at {:.0}% of the limit ({} of {})",
                usage_percent,
                month_count + 1,
                limits.max_simulations_per_month
            ));
        }

        check
    }

    fn recommend_for_company(
        &self,
        company: &crate::storage::CompanyDescriptor,
    ) -> Result<LimitRecommendation> {
        let size = CompanySizeTier::from_team_size(company.team_size);
        let budget = BudgetTier::from_quota_minutes(company.quota_total_minutes);
        self.recommender.recommend(size, budget)
    }

    fn resolve_upstream_failure(
        &self,
        company_id: &str,
        message: &str,
        cost_estimate: f64,
    ) -> SimulationLimitCheck {
        warn!(
            company_id,
            error = message,
            policy = ?self.failure_policy,
            "usage data unavailable during limit check"
        );

        match self.failure_policy {
            FailurePolicy::FailOpen => {
                let mut check = SimulationLimitCheck::allowed_with_cost(cost_estimate);
                check.warnings.push(format!(
                    "Usage data is temporarily unavailable; the simulation was allowed without limit checks ({})",
                    message
                ));
                check
            }
            FailurePolicy::FailClosed => SimulationLimitCheck::denied(
                format!(
                    "Usage data is temporarily unavailable and limit enforcement is configured to fail closed ({})",
                    message
                ),
                cost_estimate,
            ),
        }
    }
}
