//! Cost estimation for recorded calls and live simulations
//!
//! Pure functions over the rate table: a duration and a pipeline
//! configuration in, a priced estimate with a component breakdown out.

mod estimator;
mod types;
mod utils;

pub use estimator::CostEstimator;
pub use types::{
    CallCostBreakdown, CallCostEstimate, SimulationCostBreakdown, SimulationCostEstimate,
};
pub(crate) use utils::round2;
