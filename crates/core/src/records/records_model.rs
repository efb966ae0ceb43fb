//! Daily log record models.
//!
//! These rows are owned by storage; the core only reads them to build
//! aggregates, streaks and dashboard series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A logged workout or other physical activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub calories_burned: Decimal,
    pub duration_minutes: i32,
    pub activity_type: String,
}

/// A logged meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    pub date: NaiveDate,
    pub calories: Decimal,
    pub meal_type: Option<String>,
}

/// A logged drink of water.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntakeRecord {
    pub date: NaiveDate,
    pub amount_ml: Decimal,
}

/// A logged sleep session, attributed to the day it ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub duration_hours: Decimal,
}

/// Lifetime activity aggregates for a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub activity_count: u32,
    pub total_calories_burned: Decimal,
    pub total_duration_minutes: i64,
    pub active_days: u32,
}

impl ActivityStats {
    /// Aggregates raw activity rows, for callers that do not have the
    /// storage-side sums at hand.
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        let active_days: HashSet<NaiveDate> = records.iter().map(|r| r.date).collect();
        Self {
            activity_count: u32::try_from(records.len()).unwrap_or(u32::MAX),
            total_calories_burned: records.iter().map(|r| r.calories_burned).sum(),
            total_duration_minutes: records.iter().map(|r| i64::from(r.duration_minutes)).sum(),
            active_days: u32::try_from(active_days.len()).unwrap_or(u32::MAX),
        }
    }
}
