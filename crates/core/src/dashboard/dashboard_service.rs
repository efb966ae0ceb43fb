//! Dashboard service: fetches a user's rows and hands them to the aggregator.

use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::dashboard_aggregator::{aggregate_dashboard, DashboardInput};
use super::dashboard_model::{DashboardSummary, DashboardWindow};
use super::dashboard_traits::DashboardServiceTrait;
use crate::achievements::AchievementRepositoryTrait;
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::records::RecordRepositoryTrait;
use crate::settings::SettingsServiceTrait;
use crate::utils::time_utils::window_start_for;

pub struct DashboardService {
    record_repository: Arc<dyn RecordRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    achievement_repository: Arc<dyn AchievementRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl DashboardService {
    pub fn new(
        record_repository: Arc<dyn RecordRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        achievement_repository: Arc<dyn AchievementRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            record_repository,
            goal_repository,
            achievement_repository,
            settings_service,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, user_id: &str, today: NaiveDate) -> Result<DashboardSummary> {
        let settings = self.settings_service.get_tracker_settings()?;
        let window = DashboardWindow::new(
            window_start_for(today, settings.dashboard_window_days),
            settings.dashboard_window_days,
        );
        let (start, end) = (window.start_date, window.end_date());
        debug!("Loading dashboard rows for {} from {} to {}", user_id, start, end);

        let activities = self.record_repository.get_activities(user_id, start, end)?;
        let nutrition = self.record_repository.get_nutrition(user_id, start, end)?;
        let water_intake = self.record_repository.get_water_intake(user_id, start, end)?;
        let sleep = self.record_repository.get_sleep(user_id, start, end)?;
        let activity_dates = self
            .record_repository
            .get_recent_activity_dates(user_id, settings.streak_lookback_days)?;
        let goals = self.goal_repository.load_goals_for_user(user_id)?;
        let catalog = self.achievement_repository.load_catalog()?;
        let earned = self.achievement_repository.load_earned(user_id)?;

        Ok(aggregate_dashboard(&DashboardInput {
            user_id,
            window,
            today,
            activities: &activities,
            nutrition: &nutrition,
            water_intake: &water_intake,
            sleep: &sleep,
            goals: &goals,
            activity_dates: &activity_dates,
            catalog: &catalog,
            earned: &earned,
            recent_achievements_limit: settings.recent_achievements_limit,
        }))
    }
}
