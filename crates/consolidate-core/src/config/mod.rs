//! Consolidation configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.

pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_HASHED_THRESHOLD;
use crate::errors::ConfigError;

/// How consolidation locates the slot an incoming element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStrategy {
    /// Linear scan over the slots built so far. O(n·g).
    Scan,
    /// Hash index from group key to slot. Near-linear; needs `Hash + Eq` keys.
    Hashed,
    /// `Hashed` once the input size hint reaches `hashed_threshold`, `Scan` below it.
    Auto,
}

impl IndexStrategy {
    /// Resolve `Auto` against an input size hint. `Scan` and `Hashed` pass through.
    pub fn resolve(self, size_hint: usize, hashed_threshold: usize) -> IndexStrategy {
        match self {
            IndexStrategy::Auto if size_hint >= hashed_threshold => IndexStrategy::Hashed,
            IndexStrategy::Auto => IndexStrategy::Scan,
            other => other,
        }
    }
}

impl Default for IndexStrategy {
    fn default() -> Self {
        defaults::DEFAULT_STRATEGY
    }
}

/// Consolidation engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Slot lookup strategy for forms with a hashable key.
    pub strategy: IndexStrategy,
    /// Input size at which `Auto` switches to the hashed index.
    pub hashed_threshold: usize,
}

impl ConsolidationConfig {
    /// Parse a config from TOML. Missing fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hashed_threshold > MAX_HASHED_THRESHOLD {
            return Err(ConfigError::InvalidThreshold {
                value: self.hashed_threshold,
                max: MAX_HASHED_THRESHOLD,
            });
        }
        Ok(())
    }

    /// Config that always scans.
    pub fn scan() -> Self {
        Self {
            strategy: IndexStrategy::Scan,
            ..Self::default()
        }
    }

    /// Config that always uses the hashed index where a key exists.
    pub fn hashed() -> Self {
        Self {
            strategy: IndexStrategy::Hashed,
            ..Self::default()
        }
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            strategy: defaults::DEFAULT_STRATEGY,
            hashed_threshold: defaults::DEFAULT_HASHED_THRESHOLD,
        }
    }
}
