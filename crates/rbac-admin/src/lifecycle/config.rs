//! Console configuration sourced from environment variables.

use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const CHANNEL_CAPACITY: &str = "RBAC_CHANNEL_CAPACITY";
pub const NOTICE_DURATION_MS: &str = "RBAC_NOTICE_DURATION_MS";
pub const SEED_DEFAULTS: &str = "RBAC_SEED_DEFAULTS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Request buffer of every store and of the notification queue.
    pub channel_capacity: usize,
    /// How long a notification stays visible.
    pub notice_duration_ms: u64,
    /// Start with the default users, roles and permissions instead of empty tables.
    pub seed_defaults: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            notice_duration_ms: 3000,
            seed_defaults: true,
        }
    }
}

impl ConsoleConfig {
    /// Reads the `RBAC_*` variables. Unset variables keep their defaults; unparsable ones
    /// are logged and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let channel_capacity = env_or(CHANNEL_CAPACITY, defaults.channel_capacity);
        let notice_duration_ms = env_or(NOTICE_DURATION_MS, defaults.notice_duration_ms);
        let seed_defaults = env_or(SEED_DEFAULTS, defaults.seed_defaults);

        Self {
            // A zero-capacity mpsc channel panics on construction.
            channel_capacity: channel_capacity.max(1),
            notice_duration_ms,
            seed_defaults,
        }
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity.max(1)
    }
}

fn env_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "Invalid config value, using default");
            default
        }
    }
}
