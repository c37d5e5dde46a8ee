/// Consolidate library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Input size at which the `auto` strategy switches from scanning to a hashed index.
pub const DEFAULT_HASHED_THRESHOLD: usize = 32;

/// Largest accepted `hashed_threshold`.
pub const MAX_HASHED_THRESHOLD: usize = 1 << 20;
