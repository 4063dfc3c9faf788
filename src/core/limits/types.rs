//! Type definitions for limit recommendation and enforcement

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::WarningThresholds;

/// Coarse company size classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySizeTier {
    /// Up to 10 agents
    Small,
    /// 11 to 50 agents
    Medium,
    /// More than 50 agents
    Large,
}

impl CompanySizeTier {
    /// Derive the size tier from a team headcount
    pub fn from_team_size(team_size: u32) -> Self {
        match team_size {
            0..=10 => Self::Small,
            11..=50 => Self::Medium,
            _ => Self::Large,
        }
    }
}

impl FromStr for CompanySizeTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for CompanySizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// Coarse budget classification, derived from the purchased quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    /// Under 1,000 quota minutes per month
    Low,
    /// 1,000 to 4,999 quota minutes per month
    Medium,
    /// 5,000 quota minutes per month and up
    High,
}

impl BudgetTier {
    /// Derive the budget tier from purchased quota minutes
    pub fn from_quota_minutes(quota_total_minutes: u32) -> Self {
        match quota_total_minutes {
            0..=999 => Self::Low,
            1000..=4999 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Recommended operational policy for one tier combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitRecommendation {
    /// Company size tier this recommendation applies to
    pub company_size_tier: CompanySizeTier,
    /// Budget tier this recommendation applies to
    pub budget_tier: BudgetTier,
    /// Longest single simulation, in minutes
    pub max_duration_minutes: u32,
    /// Simulations allowed per calendar day
    pub max_simulations_per_day: u32,
    /// Simulations allowed per calendar month
    pub max_simulations_per_month: u32,
    /// Budget ceiling derived from the live rate table: the cost of a
    /// month of maximum-length simulations at the monthly cap
    pub estimated_monthly_cost: f64,
    /// Human-readable rationale for the cell
    pub reasoning: String,
}

/// Current-month usage aggregate for one company
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentMonthUsage {
    /// Simulations started this calendar month
    pub simulations_count: u32,
    /// Re-priced cost of this month's simulations
    pub total_cost: f64,
    /// Total simulated minutes this month
    pub total_duration_minutes: f64,
}

/// Derived, non-persisted policy snapshot for one company
///
/// Recomputed on every limit check from live inputs; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyLimits {
    /// Company identifier
    pub company_id: String,
    /// Longest single simulation, in minutes
    pub max_simulation_duration_minutes: u32,
    /// Simulations allowed per calendar day
    pub max_simulations_per_day: u32,
    /// Simulations allowed per calendar month
    pub max_simulations_per_month: u32,
    /// Monthly budget ceiling
    pub max_cost_per_month: f64,
    /// Current-month usage aggregate
    pub current_month_usage: CurrentMonthUsage,
    /// Thresholds at which soft warnings fire
    pub warning_thresholds: WarningThresholds,
    /// False for unmetered/trial accounts: limits are advisory only
    pub is_limited: bool,
    /// Company size tier used to derive the policy
    pub company_size_tier: CompanySizeTier,
    /// Budget tier used to derive the policy
    pub budget_tier: BudgetTier,
}

/// The enforcement decision for one proposed simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationLimitCheck {
    /// Whether the simulation may start
    pub allowed: bool,
    /// Denial reason; present iff denied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Simulations still available today after this one runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_simulations_today: Option<u32>,
    /// Simulations still available this month after this one runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_simulations_month: Option<u32>,
    /// Budget left after this simulation's projected cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_budget: Option<f64>,
    /// Estimated cost of the proposed simulation
    pub cost_estimate: f64,
    /// Soft warnings (threshold crossings, fail-open notices)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl SimulationLimitCheck {
    /// An allow decision carrying only a cost estimate
    pub(crate) fn allowed_with_cost(cost_estimate: f64) -> Self {
        Self {
            allowed: true,
            reason: None,
            remaining_simulations_today: None,
            remaining_simulations_month: None,
            remaining_budget: None,
            cost_estimate,
            warnings: Vec::new(),
        }
    }

    /// A deny decision with a reason
    pub(crate) fn denied(reason: String, cost_estimate: f64) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            remaining_simulations_today: None,
            remaining_simulations_month: None,
            remaining_budget: None,
            cost_estimate,
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_size_tier_from_team_size() {
        assert_eq!(CompanySizeTier::from_team_size(0), CompanySizeTier::Small);
        assert_eq!(CompanySizeTier::from_team_size(10), CompanySizeTier::Small);
        assert_eq!(CompanySizeTier::from_team_size(11), CompanySizeTier::Medium);
        assert_eq!(CompanySizeTier::from_team_size(50), CompanySizeTier::Medium);
        assert_eq!(CompanySizeTier::from_team_size(51), CompanySizeTier::Large);
    }

    #[test]
    fn test_budget_tier_from_quota_minutes() {
        assert_eq!(BudgetTier::from_quota_minutes(0), BudgetTier::Low);
        assert_eq!(BudgetTier::from_quota_minutes(999), BudgetTier::Low);
        assert_eq!(BudgetTier::from_quota_minutes(1000), BudgetTier::Medium);
        assert_eq!(BudgetTier::from_quota_minutes(4999), BudgetTier::Medium);
        assert_eq!(BudgetTier::from_quota_minutes(5000), BudgetTier::High);
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!("SMALL".parse::<CompanySizeTier>(), Ok(CompanySizeTier::Small));
        assert_eq!("high".parse::<BudgetTier>(), Ok(BudgetTier::High));
        assert!("enterprise".parse::<CompanySizeTier>().is_err());
        assert!("free".parse::<BudgetTier>().is_err());
    }

    #[test]
    fn test_tier_display_roundtrip() {
        for tier in [
            CompanySizeTier::Small,
            CompanySizeTier::Medium,
            CompanySizeTier::Large,
        ] {
            assert_eq!(tier.to_string().parse::<CompanySizeTier>(), Ok(tier));
        }
    }
}
