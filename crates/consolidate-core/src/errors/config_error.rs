/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("hashed_threshold {value} exceeds maximum {max}")]
    InvalidThreshold { value: usize, max: usize },
}
