//! Error types. One enum per concern, `thiserror`-derived.

mod config_error;
mod consolidation_error;

pub use config_error::ConfigError;
pub use consolidation_error::ConsolidationError;

/// Result alias for operations that can fail with a [`ConsolidationError`].
pub type ConsolidationResult<T> = Result<T, ConsolidationError>;
