//! # consolidate-core
//!
//! Foundation crate for consolidation.
//! Defines the `Consolidatable` capability, errors, config, constants, and the run report.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ConsolidationConfig, IndexStrategy};
pub use errors::{ConfigError, ConsolidationError, ConsolidationResult};
pub use models::ConsolidationReport;
pub use traits::Consolidatable;
