use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::goals_model::{Goal, GoalDirection, GoalStatus};

/// Direction of a goal, inferred from where it started relative to the target.
///
/// When no initial value was recorded the current value stands in for it, so
/// a goal without a baseline only reads as a decrease goal while its current
/// value is above the target.
pub fn goal_direction(target: Decimal, current: Decimal, initial: Option<Decimal>) -> GoalDirection {
    if initial.unwrap_or(current) > target {
        GoalDirection::Decrease
    } else {
        GoalDirection::Increase
    }
}

/// Whether `current` satisfies `target` for a goal moving in `direction`.
pub fn is_target_reached(direction: GoalDirection, target: Decimal, current: Decimal) -> bool {
    match direction {
        GoalDirection::Decrease => current <= target,
        GoalDirection::Increase => current >= target,
    }
}

/// Derives a goal's status from its values and `today`.
///
/// Completion wins over the deadline: a goal that reached its target stays
/// `Completed` even after the deadline passes.
pub fn derive_goal_status(goal: &Goal, today: NaiveDate) -> GoalStatus {
    let direction = goal_direction(goal.target_value, goal.current_value, goal.initial_value);

    if is_target_reached(direction, goal.target_value, goal.current_value) {
        GoalStatus::Completed
    } else if goal.deadline < today {
        GoalStatus::Failed
    } else {
        GoalStatus::InProgress
    }
}
