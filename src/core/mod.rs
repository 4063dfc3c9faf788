//! Core engine functionality
//!
//! Leaf-first: `rates` is pure data, `cost` prices durations against it,
//! `limits`, `analysis` and `usage` build on `cost`.

pub mod analysis;
pub mod cost;
pub mod limits;
pub mod rates;
pub mod usage;
