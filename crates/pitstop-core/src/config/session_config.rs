use serde::{Deserialize, Serialize};

use super::defaults;

/// Session store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of most-recent messages retained per session.
    pub window: usize,
    /// Seconds of inactivity after which a session is eligible for removal.
    pub ttl_secs: u64,
    /// Seconds between background expiry sweeps.
    pub cleanup_interval_secs: u64,
}

impl SessionConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::try_from(self.ttl_secs).unwrap_or(i64::MAX))
    }

    pub fn cleanup_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_HISTORY_WINDOW,
            ttl_secs: defaults::DEFAULT_SESSION_TTL_SECS,
            cleanup_interval_secs: defaults::DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}
