//! Cost-benefit analysis for simulation adoption scenarios
//!
//! Classifies an assumed monthly simulation volume into a recommendation
//! tier with curated ROI copy.

mod analyzer;
mod types;

pub use analyzer::CostBenefitAnalyzer;
pub use types::{CostBenefitAnalysis, RecommendationTier};
