use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::dashboard_model::{
    AchievementSummary, DailySeries, DashboardSummary, DashboardWindow, GoalSummary, TodayTotals,
};
use crate::achievements::{AchievementCriterion, EarnedAchievement};
use crate::goals::{calculate_progress, derive_goal_status, goal_direction, Goal};
use crate::records::{
    calculate_current_streak, calculate_longest_streak, ActivityRecord, NutritionRecord,
    SleepRecord, WaterIntakeRecord,
};
use crate::utils::time_utils::days_between;

/// Everything the dashboard is built from, already fetched by the caller.
#[derive(Debug, Clone)]
pub struct DashboardInput<'a> {
    pub user_id: &'a str,
    pub window: DashboardWindow,
    pub today: NaiveDate,
    pub activities: &'a [ActivityRecord],
    pub nutrition: &'a [NutritionRecord],
    pub water_intake: &'a [WaterIntakeRecord],
    pub sleep: &'a [SleepRecord],
    pub goals: &'a [Goal],
    /// Recent distinct activity dates, for streaks
    pub activity_dates: &'a [NaiveDate],
    pub catalog: &'a [AchievementCriterion],
    pub earned: &'a [EarnedAchievement],
    pub recent_achievements_limit: usize,
}

/// Adds `value` into the slot for `date`; dates outside the window are dropped.
fn overlay<T: std::ops::AddAssign + Copy>(
    window: &DashboardWindow,
    series: &mut [T],
    date: NaiveDate,
    value: T,
) {
    if let Some(slot) = window.offset_of(date).and_then(|i| series.get_mut(i)) {
        *slot += value;
    }
}

fn build_series(input: &DashboardInput<'_>) -> DailySeries {
    let window = &input.window;
    let mut series = DailySeries::zeroed(window);

    for record in input.activities {
        overlay(window, &mut series.calories_burned, record.date, record.calories_burned);
        overlay(
            window,
            &mut series.active_minutes,
            record.date,
            i64::from(record.duration_minutes),
        );
    }
    for record in input.nutrition {
        overlay(window, &mut series.calories_consumed, record.date, record.calories);
    }
    for record in input.water_intake {
        overlay(window, &mut series.water_intake_ml, record.date, record.amount_ml);
    }
    for record in input.sleep {
        overlay(window, &mut series.sleep_hours, record.date, record.duration_hours);
    }

    series
}

fn today_totals(series: &DailySeries, window: &DashboardWindow, today: NaiveDate) -> TodayTotals {
    let Some(i) = window.offset_of(today) else {
        return TodayTotals::default();
    };
    let calories_burned = series.calories_burned[i];
    let calories_consumed = series.calories_consumed[i];
    TodayTotals {
        calories_burned,
        calories_consumed,
        net_calories: calories_consumed - calories_burned,
        water_intake_ml: series.water_intake_ml[i],
        sleep_hours: series.sleep_hours[i],
        active_minutes: series.active_minutes[i],
    }
}

fn summarize_goal(goal: &Goal, today: NaiveDate) -> GoalSummary {
    GoalSummary {
        goal: goal.clone(),
        progress: calculate_progress(goal.target_value, goal.current_value, goal.initial_value),
        status: derive_goal_status(goal, today),
        direction: goal_direction(goal.target_value, goal.current_value, goal.initial_value),
        days_remaining: days_between(today, goal.deadline),
    }
}

fn recent_achievements(
    catalog: &[AchievementCriterion],
    earned: &[EarnedAchievement],
    limit: usize,
) -> Vec<AchievementSummary> {
    let by_id: HashMap<&str, &AchievementCriterion> =
        catalog.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut summaries: Vec<AchievementSummary> = earned
        .iter()
        .map(|e| {
            let criterion = by_id.get(e.achievement_id.as_str());
            AchievementSummary {
                achievement_id: e.achievement_id.clone(),
                name: criterion
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| e.achievement_id.clone()),
                description: criterion.and_then(|c| c.description.clone()),
                date_earned: e.date_earned,
            }
        })
        .collect();

    // newest first, ties broken by id so output is stable
    summaries.sort_by(|a, b| {
        b.date_earned
            .cmp(&a.date_earned)
            .then_with(|| a.achievement_id.cmp(&b.achievement_id))
    });
    summaries.truncate(limit);
    summaries
}

/// Builds the dashboard read-model. Never fails: a user with no data gets a
/// zero-filled dashboard.
pub fn aggregate_dashboard(input: &DashboardInput<'_>) -> DashboardSummary {
    let series = build_series(input);
    let today = today_totals(&series, &input.window, input.today);

    let total_burned: Decimal = series.calories_burned.iter().sum();
    debug!(
        "Dashboard for {}: {} days from {}, {} kcal burned",
        input.user_id, input.window.days, input.window.start_date, total_burned
    );

    DashboardSummary {
        user_id: input.user_id.to_string(),
        window: input.window,
        today,
        goals: input
            .goals
            .iter()
            .map(|g| summarize_goal(g, input.today))
            .collect(),
        current_streak: calculate_current_streak(input.activity_dates, input.today),
        longest_streak: calculate_longest_streak(input.activity_dates),
        recent_achievements: recent_achievements(
            input.catalog,
            input.earned,
            input.recent_achievements_limit,
        ),
        series,
    }
}
