//! Type definitions for cost-benefit analysis

use serde::{Deserialize, Serialize};

/// How strongly the analyzed scenario is recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Per-agent cost is low relative to expected coaching value
    HighlyRecommended,
    /// Solid value for most teams
    Recommended,
    /// Worth piloting before a full rollout
    ConsiderCarefully,
    /// Per-agent cost is hard to justify at this volume
    NotRecommended,
}

/// Ephemeral classification of one adoption scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBenefitAnalysis {
    /// Human-readable restatement of the analyzed scenario
    pub scenario_description: String,
    /// Projected monthly cost, rounded to 2 decimals
    pub monthly_cost: f64,
    /// Monthly cost divided by team size, rounded to 2 decimals
    pub cost_per_agent: f64,
    /// Curated expected benefits for the tier, in presentation order
    pub expected_benefits: Vec<String>,
    /// Curated ROI judgment for the tier
    pub roi_narrative: String,
    /// The recommendation tier
    pub recommendation_tier: RecommendationTier,
}
