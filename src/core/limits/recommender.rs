//! Limit recommender implementation
//!
//! The 3x3 table below encodes business judgment, not a formula. Every
//! cell is hand-tuned; keeping the match exhaustive makes all nine
//! visibly auditable in one place.

use std::str::FromStr;

use crate::core::cost::{CostEstimator, round2};
use crate::utils::error::{EngineError, Result};

use super::types::{BudgetTier, CompanySizeTier, LimitRecommendation};

struct TierCell {
    max_duration_minutes: u32,
    max_simulations_per_day: u32,
    max_simulations_per_month: u32,
    reasoning: &'static str,
}

fn tier_cell(size: CompanySizeTier, budget: BudgetTier) -> TierCell {
    use BudgetTier::*;
    use CompanySizeTier::*;

    match (size, budget) {
        (Small, Low) => TierCell {
            max_duration_minutes: 10,
            max_simulations_per_day: 3,
            max_simulations_per_month: 30,
            reasoning: "Short sessions and a small daily cap keep a small team inside a tight budget.",
        },
        (Small, BudgetTier::Medium) => TierCell {
            max_duration_minutes: 15,
            max_simulations_per_day: 5,
            max_simulations_per_month: 60,
            reasoning: "Room for daily practice per agent while the monthly spend stays predictable.",
        },
        (Small, High) => TierCell {
            max_duration_minutes: 20,
            max_simulations_per_day: 8,
            max_simulations_per_month: 100,
            reasoning: "A well-funded small team can run full-length scenarios without rationing.",
        },
        (CompanySizeTier::Medium, Low) => TierCell {
            max_duration_minutes: 10,
            max_simulations_per_day: 5,
            max_simulations_per_month: 75,
            reasoning: "Spreads a constrained budget across more agents by keeping sessions short.",
        },
        (CompanySizeTier::Medium, BudgetTier::Medium) => TierCell {
            max_duration_minutes: 15,
            max_simulations_per_day: 10,
            max_simulations_per_month: 150,
            reasoning: "Balanced caps: enough for weekly practice per agent at mid-size scale.",
        },
        (CompanySizeTier::Medium, High) => TierCell {
            max_duration_minutes: 25,
            max_simulations_per_day: 15,
            max_simulations_per_month: 250,
            reasoning: "Longer scenarios and generous caps for teams investing heavily in coaching.",
        },
        (Large, Low) => TierCell {
            max_duration_minutes: 15,
            max_simulations_per_day: 10,
            max_simulations_per_month: 150,
            reasoning: "A large team on a small budget gets moderate caps; prioritize onboarding cohorts.",
        },
        (Large, BudgetTier::Medium) => TierCell {
            max_duration_minutes: 20,
            max_simulations_per_day: 20,
            max_simulations_per_month: 300,
            reasoning: "Supports rotating practice schedules across a large floor.",
        },
        (Large, High) => TierCell {
            max_duration_minutes: 30,
            max_simulations_per_day: 30,
            max_simulations_per_month: 500,
            reasoning: "Full-length scenarios at enterprise volume; the budget ceiling does the limiting.",
        },
    }
}

/// Maps coarse company descriptors to a recommended operational policy
#[derive(Debug, Clone)]
pub struct LimitRecommender {
    estimator: CostEstimator,
}

impl LimitRecommender {
    /// Create a recommender over the given estimator
    pub fn new(estimator: CostEstimator) -> Self {
        Self { estimator }
    }

    /// Recommend limits for a tier combination
    ///
    /// The duration/day/month caps come from the static table; the budget
    /// ceiling is derived from the live rate table so it stays consistent
    /// with current pricing even while the caps stay static.
    pub fn recommend(
        &self,
        size: CompanySizeTier,
        budget: BudgetTier,
    ) -> Result<LimitRecommendation> {
        let cell = tier_cell(size, budget);

        let per_simulation = self
            .estimator
            .estimate_simulation_cost(f64::from(cell.max_duration_minutes), "simulation")?
            .estimated_cost;
        let estimated_monthly_cost =
            round2(per_simulation * f64::from(cell.max_simulations_per_month));

        Ok(LimitRecommendation {
            company_size_tier: size,
            budget_tier: budget,
            max_duration_minutes: cell.max_duration_minutes,
            max_simulations_per_day: cell.max_simulations_per_day,
            max_simulations_per_month: cell.max_simulations_per_month,
            estimated_monthly_cost,
            reasoning: cell.reasoning.to_string(),
        })
    }

    /// Recommend limits from string tier labels
    ///
    /// Unrecognized labels fail with `UnknownTierCombination`; callers
    /// holding typed tiers should use [`recommend`](Self::recommend).
    pub fn recommend_for(&self, size: &str, budget: &str) -> Result<LimitRecommendation> {
        let parsed_size = CompanySizeTier::from_str(size);
        let parsed_budget = BudgetTier::from_str(budget);

        match (parsed_size, parsed_budget) {
            (Ok(s), Ok(b)) => self.recommend(s, b),
            _ => Err(EngineError::UnknownTierCombination {
                size: size.to_string(),
                budget: budget.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::config::EstimatorConfig;
    use crate::core::rates::builtin;

    fn recommender() -> LimitRecommender {
        LimitRecommender::new(CostEstimator::new(builtin(), EstimatorConfig::default()))
    }

    const ALL_SIZES: [CompanySizeTier; 3] = [
        CompanySizeTier::Small,
        CompanySizeTier::Medium,
        CompanySizeTier::Large,
    ];
    const ALL_BUDGETS: [BudgetTier; 3] = [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High];

    #[test]
    fn test_all_nine_cells_defined() {
        let rec = recommender();
        for size in ALL_SIZES {
            for budget in ALL_BUDGETS {
                let limits = rec.recommend(size, budget).unwrap();
                assert!(limits.max_duration_minutes > 0);
                assert!(limits.max_simulations_per_day > 0);
                assert!(limits.max_simulations_per_month > 0);
                assert!(limits.estimated_monthly_cost > 0.0);
                assert!(!limits.reasoning.is_empty());
            }
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        let rec = recommender();
        for (size, budget) in [("tiny", "low"), ("small", "free"), ("x", "y")] {
            match rec.recommend_for(size, budget) {
                Err(EngineError::UnknownTierCombination { size: s, budget: b }) => {
                    assert_eq!(s, size);
                    assert_eq!(b, budget);
                }
                other => panic!("expected UnknownTierCombination, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_labels_accepted_case_insensitively() {
        let rec = recommender();
        let limits = rec.recommend_for("Medium", "HIGH").unwrap();
        assert_eq!(limits.company_size_tier, CompanySizeTier::Medium);
        assert_eq!(limits.budget_tier, BudgetTier::High);
    }

    #[test]
    fn test_budget_ceiling_derived_from_rates() {
        // Small/Low: 10-minute cap (3.13 each) * 30/month = 93.90
        let limits = recommender()
            .recommend(CompanySizeTier::Small, BudgetTier::Low)
            .unwrap();
        assert_eq!(limits.max_duration_minutes, 10);
        assert_eq!(limits.max_simulations_per_month, 30);
        assert_eq!(limits.estimated_monthly_cost, 93.90);
    }

    #[test]
    fn test_caps_grow_with_budget() {
        let rec = recommender();
        for size in ALL_SIZES {
            let low = rec.recommend(size, BudgetTier::Low).unwrap();
            let high = rec.recommend(size, BudgetTier::High).unwrap();
            assert!(high.max_duration_minutes > low.max_duration_minutes);
            assert!(high.max_simulations_per_month > low.max_simulations_per_month);
        }
    }
}
