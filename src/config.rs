//! User configuration stored in ~/.sustainabuddy/config.json.

use crate::core::constants::{
    AUTOSAVE_INTERVAL_SECONDS, DEFAULT_TICK_INTERVAL_SECONDS, MAX_OFFLINE_DAYS,
};
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.json";

/// Missing fields fall back to their defaults, so older config files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuddyConfig {
    /// Seconds between periodic simulation ticks.
    pub tick_interval_seconds: u64,
    pub autosave_interval_seconds: u64,
    pub notifications_enabled: bool,
    /// Unlocks premium species.
    pub premium: bool,
    /// Calendar days simulated at most when catching up after time away.
    pub max_offline_days: u32,
}

impl Default for BuddyConfig {
    fn default() -> Self {
        Self {
            tick_interval_seconds: DEFAULT_TICK_INTERVAL_SECONDS,
            autosave_interval_seconds: AUTOSAVE_INTERVAL_SECONDS,
            notifications_enabled: true,
            premium: false,
            max_offline_days: MAX_OFFLINE_DAYS,
        }
    }
}

impl BuddyConfig {
    pub fn load() -> Self {
        load_json_or_default::<BuddyConfig>(CONFIG_FILE).sanitized()
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(CONFIG_FILE, self)
    }

    /// Replaces zero intervals, which would spin the timer, with defaults.
    pub fn sanitized(mut self) -> Self {
        if self.tick_interval_seconds == 0 {
            tracing::warn!("tick_interval_seconds must be positive, using default");
            self.tick_interval_seconds = DEFAULT_TICK_INTERVAL_SECONDS;
        }
        if self.autosave_interval_seconds == 0 {
            tracing::warn!("autosave_interval_seconds must be positive, using default");
            self.autosave_interval_seconds = AUTOSAVE_INTERVAL_SECONDS;
        }
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_seconds)
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_seconds)
    }
}
