//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a goal.
///
/// A stored status is only a cache: it is re-derived from the goal's values
/// and the current date whenever the goal is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GoalStatus {
    #[default]
    InProgress,
    Completed,
    Failed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::InProgress => "InProgress",
            GoalStatus::Completed => "Completed",
            GoalStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether progress moves up or down toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalDirection {
    /// e.g. distance run, workouts per week
    Increase,
    /// e.g. body weight, resting heart rate
    Decrease,
}

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    pub target_value: Decimal,
    pub current_value: Decimal,
    /// Value when the goal was set. `None` for goals created without one;
    /// direction detection then falls back to `current_value`.
    pub initial_value: Option<Decimal>,
    pub deadline: NaiveDate,
    pub status: GoalStatus,
}

impl Goal {
    /// False when the direction of this goal is being guessed from its
    /// current value because no initial value was ever recorded.
    pub fn has_recorded_baseline(&self) -> bool {
        self.initial_value.is_some()
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub goal_type: String,
    pub target_value: Decimal,
    pub current_value: Decimal,
    pub initial_value: Option<Decimal>,
    pub deadline: NaiveDate,
}
