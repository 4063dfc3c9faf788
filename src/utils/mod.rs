//! Utility modules for the cost engine
//!
//! - **error**: Error handling and the crate-wide `Result` alias

pub mod error;

pub use error::{EngineError, Result};
