use super::IndexStrategy;

pub use crate::constants::DEFAULT_HASHED_THRESHOLD;

pub const DEFAULT_STRATEGY: IndexStrategy = IndexStrategy::Auto;
