use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DASHBOARD_WINDOW_DAYS, DEFAULT_RECENT_ACHIEVEMENTS_LIMIT, DEFAULT_STREAK_LOOKBACK_DAYS,
    DEFAULT_TIMEZONE,
};

/// Storage keys for tracker settings.
pub mod setting_keys {
    pub const DASHBOARD_WINDOW_DAYS: &str = "dashboard_window_days";
    pub const STREAK_LOOKBACK_DAYS: &str = "streak_lookback_days";
    pub const RECENT_ACHIEVEMENTS_LIMIT: &str = "recent_achievements_limit";
    pub const TIMEZONE: &str = "timezone";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettings {
    /// Days shown in the dashboard series, ending today
    pub dashboard_window_days: u32,
    /// Recent distinct activity dates fetched for streak detection
    pub streak_lookback_days: u32,
    pub recent_achievements_limit: usize,
    /// IANA name, e.g. "Europe/Berlin"
    pub timezone: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            dashboard_window_days: DEFAULT_DASHBOARD_WINDOW_DAYS,
            streak_lookback_days: DEFAULT_STREAK_LOOKBACK_DAYS,
            recent_achievements_limit: DEFAULT_RECENT_ACHIEVEMENTS_LIMIT,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSettingsUpdate {
    pub dashboard_window_days: Option<u32>,
    pub streak_lookback_days: Option<u32>,
    pub recent_achievements_limit: Option<usize>,
    pub timezone: Option<String>,
}

impl TrackerSettings {
    /// Returns a copy with every field present in `update` replaced.
    pub fn merged(&self, update: &TrackerSettingsUpdate) -> Self {
        Self {
            dashboard_window_days: update
                .dashboard_window_days
                .unwrap_or(self.dashboard_window_days),
            streak_lookback_days: update
                .streak_lookback_days
                .unwrap_or(self.streak_lookback_days),
            recent_achievements_limit: update
                .recent_achievements_limit
                .unwrap_or(self.recent_achievements_limit),
            timezone: update
                .timezone
                .clone()
                .unwrap_or_else(|| self.timezone.clone()),
        }
    }
}
