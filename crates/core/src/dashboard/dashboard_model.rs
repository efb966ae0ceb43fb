//! Dashboard read-models.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::{Goal, GoalDirection, GoalStatus};
use crate::utils::time_utils::get_days_between;

/// A run of `days` calendar days starting at `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardWindow {
    pub start_date: NaiveDate,
    pub days: u32,
}

impl DashboardWindow {
    pub fn new(start_date: NaiveDate, days: u32) -> Self {
        Self { start_date, days }
    }

    /// Last day covered by the window. Equal to the start for empty windows.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(i64::from(self.days.saturating_sub(1)))
    }

    /// Slot index of `date`, or `None` when it falls outside the window.
    pub fn offset_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start_date).num_days();
        if offset < 0 || offset >= i64::from(self.days) {
            return None;
        }
        usize::try_from(offset).ok()
    }

    pub fn len(&self) -> usize {
        self.days as usize
    }

    pub fn is_empty(&self) -> bool {
        self.days == 0
    }
}

/// Per-day totals aligned by offset from the window start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySeries {
    pub dates: Vec<NaiveDate>,
    pub calories_burned: Vec<Decimal>,
    pub calories_consumed: Vec<Decimal>,
    pub water_intake_ml: Vec<Decimal>,
    pub sleep_hours: Vec<Decimal>,
    pub active_minutes: Vec<i64>,
}

impl DailySeries {
    /// Zero-filled series covering every day of `window`.
    pub fn zeroed(window: &DashboardWindow) -> Self {
        let len = window.len();
        Self {
            dates: if window.is_empty() {
                Vec::new()
            } else {
                get_days_between(window.start_date, window.end_date())
            },
            calories_burned: vec![Decimal::ZERO; len],
            calories_consumed: vec![Decimal::ZERO; len],
            water_intake_ml: vec![Decimal::ZERO; len],
            sleep_hours: vec![Decimal::ZERO; len],
            active_minutes: vec![0; len],
        }
    }
}

/// Totals for a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TodayTotals {
    pub calories_burned: Decimal,
    pub calories_consumed: Decimal,
    /// consumed - burned
    pub net_calories: Decimal,
    pub water_intake_ml: Decimal,
    pub sleep_hours: Decimal,
    pub active_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub goal: Goal,
    /// 0-100
    pub progress: Decimal,
    /// Status derived for the dashboard's "today", not the stored one
    pub status: GoalStatus,
    pub direction: GoalDirection,
    /// Negative once the deadline has passed
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSummary {
    pub achievement_id: String,
    pub name: String,
    pub description: Option<String>,
    pub date_earned: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_id: String,
    pub window: DashboardWindow,
    pub series: DailySeries,
    pub today: TodayTotals,
    pub goals: Vec<GoalSummary>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub recent_achievements: Vec<AchievementSummary>,
}
