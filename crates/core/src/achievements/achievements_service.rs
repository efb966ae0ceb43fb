use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;

use super::achievement_evaluator::evaluate_achievements;
use super::achievements_model::{EarnedAchievement, UserStats};
use super::achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::records::{calculate_current_streak, RecordRepositoryTrait};
use crate::settings::SettingsServiceTrait;

pub struct AchievementService {
    achievement_repository: Arc<dyn AchievementRepositoryTrait>,
    record_repository: Arc<dyn RecordRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl AchievementService {
    pub fn new(
        achievement_repository: Arc<dyn AchievementRepositoryTrait>,
        record_repository: Arc<dyn RecordRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        AchievementService {
            achievement_repository,
            record_repository,
            settings_service,
            event_sink,
        }
    }

    fn load_user_stats(&self, user_id: &str, today: NaiveDate) -> Result<UserStats> {
        let lookback = self.settings_service.get_tracker_settings()?.streak_lookback_days;
        let activity_stats = self.record_repository.get_activity_stats(user_id)?;
        let dates = self
            .record_repository
            .get_recent_activity_dates(user_id, lookback)?;
        let streak = calculate_current_streak(&dates, today);
        Ok(UserStats::new(&activity_stats, streak))
    }
}

#[async_trait]
impl AchievementServiceTrait for AchievementService {
    async fn check_achievements(&self, user_id: &str, today: NaiveDate) -> Result<Vec<EarnedAchievement>> {
        let stats = self.load_user_stats(user_id, today)?;
        let catalog = self.achievement_repository.load_catalog()?;
        let already_earned: HashSet<String> = self
            .achievement_repository
            .load_earned(user_id)?
            .into_iter()
            .map(|e| e.achievement_id)
            .collect();

        let newly_earned = evaluate_achievements(user_id, &stats, &catalog, &already_earned);
        if newly_earned.is_empty() {
            debug!("No new achievements for user {}", user_id);
            return Ok(Vec::new());
        }

        let rows: Vec<EarnedAchievement> = newly_earned
            .iter()
            .map(|achievement_id| EarnedAchievement {
                user_id: user_id.to_string(),
                achievement_id: achievement_id.clone(),
                date_earned: today,
            })
            .collect();

        let inserted = self
            .achievement_repository
            .insert_earned(rows.clone())
            .await?;
        info!("User {} earned {} achievement(s)", user_id, inserted);

        self.event_sink
            .emit(DomainEvent::achievements_earned(user_id.to_string(), newly_earned));
        Ok(rows)
    }

    fn get_earned_achievements(&self, user_id: &str) -> Result<Vec<EarnedAchievement>> {
        self.achievement_repository.load_earned(user_id)
    }
}
