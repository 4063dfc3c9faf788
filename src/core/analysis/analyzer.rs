//! Cost-benefit analyzer implementation

use crate::core::cost::{CostEstimator, round2};
use crate::utils::error::{EngineError, Result};

use super::types::{CostBenefitAnalysis, RecommendationTier};

// Tier boundaries on cost-per-agent (USD/month). Contractual values:
// reports and pricing pages quote them, so they change together with the
// copy below or not at all.
const HIGHLY_RECOMMENDED_MAX: f64 = 50.0;
const RECOMMENDED_MAX: f64 = 100.0;
const CONSIDER_CAREFULLY_MAX: f64 = 200.0;

const HIGHLY_RECOMMENDED_NARRATIVE: &str = "Excellent ROI: per-agent cost is well below the \
     value of a single coached hour, so simulation practice pays for itself almost immediately.";
const RECOMMENDED_NARRATIVE: &str = "Good ROI: per-agent cost sits comfortably inside typical \
     training budgets and should be recovered within the first quarter.";
const CONSIDER_CAREFULLY_NARRATIVE: &str = "Marginal ROI: per-agent cost is meaningful at this \
     volume. Start with a pilot group or reduce simulation length before a full rollout.";
const NOT_RECOMMENDED_NARRATIVE: &str = "Poor ROI: per-agent cost exceeds what most coaching \
     programs return at this volume. Reduce monthly volume or average duration.";

const HIGHLY_RECOMMENDED_BENEFITS: &[&str] = &[
    "Every agent gets regular practice time at a modest per-seat cost",
    "New agents ramp faster through repeatable scenario drills",
    "Coaching shifts off live customer calls, reducing QA exposure",
    "Handle time and satisfaction scores improve measurably within weeks",
];
const RECOMMENDED_BENEFITS: &[&str] = &[
    "Consistent practice cadence across the team",
    "Faster onboarding for new hires",
    "Reduced reliance on live-call coaching",
];
const CONSIDER_CAREFULLY_BENEFITS: &[&str] = &[
    "Targeted practice for agents who need it most",
    "Useful for onboarding cohorts even if not run team-wide",
];
const NOT_RECOMMENDED_BENEFITS: &[&str] = &[
    "Occasional high-stakes scenario rehearsal only",
];

/// Classifies adoption scenarios into recommendation tiers
#[derive(Debug, Clone)]
pub struct CostBenefitAnalyzer {
    estimator: CostEstimator,
}

impl CostBenefitAnalyzer {
    /// Create an analyzer over the given estimator
    pub fn new(estimator: CostEstimator) -> Self {
        Self { estimator }
    }

    /// Analyze an assumed monthly simulation volume for a team
    ///
    /// Fails with `InvalidTeamSize` when `team_size` is zero; the per-agent
    /// division is the whole point of the classification.
    pub fn analyze(
        &self,
        simulations_per_month: u32,
        avg_duration_minutes: f64,
        team_size: u32,
    ) -> Result<CostBenefitAnalysis> {
        if team_size == 0 {
            return Err(EngineError::InvalidTeamSize { value: team_size });
        }

        let per_simulation = self
            .estimator
            .estimate_simulation_cost(avg_duration_minutes, "simulation")?
            .estimated_cost;
        let monthly_cost = round2(per_simulation * f64::from(simulations_per_month));
        let cost_per_agent = round2(monthly_cost / f64::from(team_size));

        let recommendation_tier = tier_for(cost_per_agent);
        let (roi_narrative, expected_benefits) = tier_copy(recommendation_tier);

        Ok(CostBenefitAnalysis {
            scenario_description: format!(
                "{} simulations/month at {:.0} min average across a team of {}",
                simulations_per_month, avg_duration_minutes, team_size
            ),
            monthly_cost,
            cost_per_agent,
            expected_benefits: expected_benefits.iter().map(|s| s.to_string()).collect(),
            roi_narrative: roi_narrative.to_string(),
            recommendation_tier,
        })
    }
}

/// Map a per-agent monthly cost to a recommendation tier
pub(crate) fn tier_for(cost_per_agent: f64) -> RecommendationTier {
    if cost_per_agent <= HIGHLY_RECOMMENDED_MAX {
        RecommendationTier::HighlyRecommended
    } else if cost_per_agent <= RECOMMENDED_MAX {
        RecommendationTier::Recommended
    } else if cost_per_agent <= CONSIDER_CAREFULLY_MAX {
        RecommendationTier::ConsiderCarefully
    } else {
        RecommendationTier::NotRecommended
    }
}

fn tier_copy(tier: RecommendationTier) -> (&'static str, &'static [&'static str]) {
    match tier {
        RecommendationTier::HighlyRecommended => {
            (HIGHLY_RECOMMENDED_NARRATIVE, HIGHLY_RECOMMENDED_BENEFITS)
        }
        RecommendationTier::Recommended => (RECOMMENDED_NARRATIVE, RECOMMENDED_BENEFITS),
        RecommendationTier::ConsiderCarefully => {
            (CONSIDER_CAREFULLY_NARRATIVE, CONSIDER_CAREFULLY_BENEFITS)
        }
        RecommendationTier::NotRecommended => {
            (NOT_RECOMMENDED_NARRATIVE, NOT_RECOMMENDED_BENEFITS)
        }
    }
}
