use async_trait::async_trait;
use chrono::NaiveDate;

use crate::achievements::achievements_model::{AchievementCriterion, EarnedAchievement};
use crate::errors::Result;

/// Trait for achievement repository operations
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn load_catalog(&self) -> Result<Vec<AchievementCriterion>>;
    fn load_earned(&self, user_id: &str) -> Result<Vec<EarnedAchievement>>;
    /// Inserts rows in one transaction. A (user, achievement) pair that
    /// already exists is reported as `DatabaseError::UniqueViolation`.
    async fn insert_earned(&self, earned: Vec<EarnedAchievement>) -> Result<usize>;
}

/// Trait for achievement service operations
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    /// Evaluates the user's current stats against the catalog and records
    /// whatever was newly earned.
    async fn check_achievements(&self, user_id: &str, today: NaiveDate) -> Result<Vec<EarnedAchievement>>;
    fn get_earned_achievements(&self, user_id: &str) -> Result<Vec<EarnedAchievement>>;
}
