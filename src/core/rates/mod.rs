//! Versioned rate table for AI model pricing
//!
//! The table is pure data: a registry of per-unit prices keyed by model
//! identifier. It is immutable at runtime; pricing updates ship as a data
//! change (new file or new builtin version), never as a mutation path.

mod defaults;
mod loader;
mod types;

pub use defaults::builtin;
pub use types::{RateEntry, RateTable};
