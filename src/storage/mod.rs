//! Persistence collaborator interface
//!
//! The engine never owns a schema; it consumes a handful of read shapes
//! and one usage write-back through the [`UsageStore`] trait. Production
//! wiring implements it over the real database; tests and local
//! development use [`InMemoryUsageStore`].

mod memory;
mod store;

pub use memory::InMemoryUsageStore;
pub use store::{CompanyDescriptor, UsageStore};
