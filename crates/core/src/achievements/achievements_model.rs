//! Achievement domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::ActivityStats;

/// Statistic an achievement threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriteriaType {
    ActivityCount,
    TotalCalories,
    Streak,
}

/// A badge in the achievement catalog and the rule that unlocks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCriterion {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub criteria_type: CriteriaType,
    pub threshold: Decimal,
}

/// Record of a user unlocking an achievement. Inserted once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
    pub user_id: String,
    pub achievement_id: String,
    pub date_earned: NaiveDate,
}

/// The statistics achievement criteria are evaluated against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub activity_count: u32,
    pub total_calories_burned: Decimal,
    pub current_streak: u32,
}

impl UserStats {
    pub fn new(activity_stats: &ActivityStats, current_streak: u32) -> Self {
        Self {
            activity_count: activity_stats.activity_count,
            total_calories_burned: activity_stats.total_calories_burned,
            current_streak,
        }
    }

    /// Value of the statistic a criterion of `criteria_type` looks at.
    pub fn value_for(&self, criteria_type: CriteriaType) -> Decimal {
        match criteria_type {
            CriteriaType::ActivityCount => Decimal::from(self.activity_count),
            CriteriaType::TotalCalories => self.total_calories_burned,
            CriteriaType::Streak => Decimal::from(self.current_streak),
        }
    }
}
