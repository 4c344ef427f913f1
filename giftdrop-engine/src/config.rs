//! Engine configuration
//!
//! Scheduler settings with defaults from [`giftdrop_core::constants`]
//! and environment-variable overrides under the `GIFTDROP_` prefix.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use giftdrop_core::constants::{DEFAULT_BROADCAST_INTERVAL_SECS, DEFAULT_DELIVERY_TIMEOUT_SECS};

/// Broadcast scheduler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between broadcast cycles
    pub broadcast_interval_secs: u64,
    /// Upper bound on one per-recipient delivery attempt, in seconds
    pub delivery_timeout_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            broadcast_interval_secs: DEFAULT_BROADCAST_INTERVAL_SECS,
            delivery_timeout_secs: DEFAULT_DELIVERY_TIMEOUT_SECS,
        }
    }
}

impl SchedulerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults:
    ///
    /// - `GIFTDROP_BROADCAST_INTERVAL_SECS`
    /// - `GIFTDROP_DELIVERY_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(secs) = read_env_u64("GIFTDROP_BROADCAST_INTERVAL_SECS") {
            config.broadcast_interval_secs = secs;
        }
        if let Some(secs) = read_env_u64("GIFTDROP_DELIVERY_TIMEOUT_SECS") {
            config.delivery_timeout_secs = secs;
        }
        config
    }

    pub fn broadcast_interval(&self) -> Duration {
        Duration::from_secs(self.broadcast_interval_secs)
    }

    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_secs)
    }
}

fn read_env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.broadcast_interval_secs, DEFAULT_BROADCAST_INTERVAL_SECS);
        assert_eq!(config.delivery_timeout_secs, DEFAULT_DELIVERY_TIMEOUT_SECS);
        assert_eq!(config.delivery_timeout(), Duration::from_secs(DEFAULT_DELIVERY_TIMEOUT_SECS));
    }
}
