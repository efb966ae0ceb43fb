//! Unit tests for the achievement service.

use super::*;
use crate::errors::{DatabaseError, Error, Result};
use crate::events::{DomainEvent, MockDomainEventSink};
use crate::records::{
    ActivityRecord, ActivityStats, NutritionRecord, RecordRepositoryTrait, SleepRecord,
    WaterIntakeRecord,
};
use crate::settings::{SettingsServiceTrait, TrackerSettings, TrackerSettingsUpdate};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockAchievementRepository {
    catalog: Vec<AchievementCriterion>,
    earned: RwLock<Vec<EarnedAchievement>>,
    fail_inserts: bool,
}

impl MockAchievementRepository {
    fn new(catalog: Vec<AchievementCriterion>, earned: Vec<EarnedAchievement>) -> Self {
        Self {
            catalog,
            earned: RwLock::new(earned),
            fail_inserts: false,
        }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for MockAchievementRepository {
    fn load_catalog(&self) -> Result<Vec<AchievementCriterion>> {
        Ok(self.catalog.clone())
    }

    fn load_earned(&self, user_id: &str) -> Result<Vec<EarnedAchievement>> {
        Ok(self
            .earned
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_earned(&self, earned: Vec<EarnedAchievement>) -> Result<usize> {
        if self.fail_inserts {
            return Err(DatabaseError::TransactionFailed("disk full".to_string()).into());
        }
        let count = earned.len();
        self.earned.write().unwrap().extend(earned);
        Ok(count)
    }
}

struct MockRecordRepository {
    stats: ActivityStats,
    dates: Vec<NaiveDate>,
    requested_limit: RwLock<Option<u32>>,
}

impl RecordRepositoryTrait for MockRecordRepository {
    fn get_activity_stats(&self, _user_id: &str) -> Result<ActivityStats> {
        Ok(self.stats.clone())
    }

    fn get_recent_activity_dates(&self, _user_id: &str, limit: u32) -> Result<Vec<NaiveDate>> {
        *self.requested_limit.write().unwrap() = Some(limit);
        Ok(self.dates.iter().take(limit as usize).copied().collect())
    }

    fn get_activities(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<ActivityRecord>> {
        unimplemented!()
    }

    fn get_nutrition(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<NutritionRecord>> {
        unimplemented!()
    }

    fn get_water_intake(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<WaterIntakeRecord>> {
        unimplemented!()
    }

    fn get_sleep(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<SleepRecord>> {
        unimplemented!()
    }
}

struct MockSettingsService {
    settings: TrackerSettings,
}

#[async_trait]
impl SettingsServiceTrait for MockSettingsService {
    fn get_tracker_settings(&self) -> Result<TrackerSettings> {
        Ok(self.settings.clone())
    }

    async fn update_tracker_settings(&self, _update: &TrackerSettingsUpdate) -> Result<TrackerSettings> {
        unimplemented!()
    }

    fn current_date(&self) -> Result<NaiveDate> {
        unimplemented!()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
}

fn criterion(id: &str, criteria_type: CriteriaType, threshold: Decimal) -> AchievementCriterion {
    AchievementCriterion {
        id: id.to_string(),
        name: id.to_string(),
        description: None,
        criteria_type,
        threshold,
    }
}

fn earned(user_id: &str, achievement_id: &str) -> EarnedAchievement {
    EarnedAchievement {
        user_id: user_id.to_string(),
        achievement_id: achievement_id.to_string(),
        date_earned: today() - Duration::days(10),
    }
}

fn three_day_records() -> MockRecordRepository {
    MockRecordRepository {
        stats: ActivityStats {
            activity_count: 3,
            total_calories_burned: dec!(900),
            total_duration_minutes: 90,
            active_days: 3,
        },
        dates: vec![today(), today() - Duration::days(1), today() - Duration::days(2)],
        requested_limit: RwLock::new(None),
    }
}

fn build_service(
    achievements: Arc<MockAchievementRepository>,
    records: Arc<MockRecordRepository>,
    sink: &MockDomainEventSink,
) -> AchievementService {
    AchievementService::new(
        achievements,
        records,
        Arc::new(MockSettingsService {
            settings: TrackerSettings::default(),
        }),
        Arc::new(sink.clone()),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_check_records_newly_earned_achievements() {
    let achievements = Arc::new(MockAchievementRepository::new(
        vec![
            criterion("three-workouts", CriteriaType::ActivityCount, dec!(3)),
            criterion("burn-500", CriteriaType::TotalCalories, dec!(500)),
            criterion("week-streak", CriteriaType::Streak, dec!(7)),
        ],
        vec![],
    ));
    let records = Arc::new(three_day_records());
    let sink = MockDomainEventSink::new();
    let service = build_service(achievements.clone(), records.clone(), &sink);

    let rows = service.check_achievements("u-1", today()).await.unwrap();

    let ids: Vec<&str> = rows.iter().map(|r| r.achievement_id.as_str()).collect();
    assert_eq!(ids, vec!["three-workouts", "burn-500"]);
    assert!(rows.iter().all(|r| r.user_id == "u-1" && r.date_earned == today()));
    assert_eq!(achievements.load_earned("u-1").unwrap().len(), 2);
    assert_eq!(*records.requested_limit.read().unwrap(), Some(30));
    assert_eq!(
        sink.events(),
        vec![DomainEvent::achievements_earned(
            "u-1".to_string(),
            vec!["three-workouts".to_string(), "burn-500".to_string()],
        )]
    );
}

#[tokio::test]
async fn test_second_check_earns_nothing_new() {
    let achievements = Arc::new(MockAchievementRepository::new(
        vec![criterion("three-workouts", CriteriaType::ActivityCount, dec!(3))],
        vec![],
    ));
    let sink = MockDomainEventSink::new();
    let service = build_service(achievements.clone(), Arc::new(three_day_records()), &sink);

    assert_eq!(service.check_achievements("u-1", today()).await.unwrap().len(), 1);
    assert!(service.check_achievements("u-1", today()).await.unwrap().is_empty());
    assert_eq!(achievements.load_earned("u-1").unwrap().len(), 1);
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn test_achievements_earned_by_other_users_do_not_count() {
    let achievements = Arc::new(MockAchievementRepository::new(
        vec![criterion("three-workouts", CriteriaType::ActivityCount, dec!(3))],
        vec![earned("u-2", "three-workouts")],
    ));
    let sink = MockDomainEventSink::new();
    let service = build_service(achievements, Arc::new(three_day_records()), &sink);

    let rows = service.check_achievements("u-1", today()).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_streak_achievement_uses_current_streak() {
    let achievements = Arc::new(MockAchievementRepository::new(
        vec![criterion("three-day-streak", CriteriaType::Streak, dec!(3))],
        vec![],
    ));
    let sink = MockDomainEventSink::new();
    let service = build_service(achievements.clone(), Arc::new(three_day_records()), &sink);

    // Two days later the streak is broken
    let later = today() + Duration::days(2);
    assert!(service.check_achievements("u-1", later).await.unwrap().is_empty());

    let rows = service.check_achievements("u-1", today()).await.unwrap();
    assert_eq!(rows[0].achievement_id, "three-day-streak");
}

#[tokio::test]
async fn test_failed_insert_emits_no_event() {
    let mut repo = MockAchievementRepository::new(
        vec![criterion("three-workouts", CriteriaType::ActivityCount, dec!(3))],
        vec![],
    );
    repo.fail_inserts = true;
    let sink = MockDomainEventSink::new();
    let service = build_service(Arc::new(repo), Arc::new(three_day_records()), &sink);

    let result = service.check_achievements("u-1", today()).await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::TransactionFailed(_)))
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_get_earned_achievements_filters_by_user() {
    let achievements = Arc::new(MockAchievementRepository::new(
        vec![],
        vec![earned("u-1", "a"), earned("u-2", "b")],
    ));
    let sink = MockDomainEventSink::new();
    let service = build_service(achievements, Arc::new(three_day_records()), &sink);

    let rows = service.get_earned_achievements("u-1").unwrap();
    assert_eq!(rows, vec![earned("u-1", "a")]);
}
