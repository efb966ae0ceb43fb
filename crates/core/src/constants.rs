/// Decimal precision for goal progress percentages
pub const PROGRESS_DECIMAL_PRECISION: u32 = 2;

/// Number of days shown on the dashboard when no setting is stored
pub const DEFAULT_DASHBOARD_WINDOW_DAYS: u32 = 7;

/// How many recent activity dates are considered when computing a streak
pub const DEFAULT_STREAK_LOOKBACK_DAYS: u32 = 30;

/// Number of recently earned achievements shown on the dashboard
pub const DEFAULT_RECENT_ACHIEVEMENTS_LIMIT: usize = 5;

/// Timezone used to resolve "today" when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Upper bound for any configurable day window
pub const MAX_WINDOW_DAYS: u32 = 366;
