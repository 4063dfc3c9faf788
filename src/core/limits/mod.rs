//! Per-company operational limits
//!
//! `recommender` maps coarse company descriptors to a hand-tuned policy;
//! `enforcer` evaluates a proposed simulation against that policy and the
//! company's current usage.

mod enforcer;
mod recommender;
mod types;


pub use enforcer::LimitEnforcer;
pub use recommender::LimitRecommender;
pub use types::{
    BudgetTier, CompanyLimits, CompanySizeTier, CurrentMonthUsage, LimitRecommendation,
    SimulationLimitCheck,
};
