use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    /// Returns `DatabaseError::NotFound` when no goal has this id.
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: Goal) -> Result<Goal>;
    /// Persists several goals in one transaction.
    async fn update_goals(&self, goal_updates: Vec<Goal>) -> Result<usize>;
    async fn delete_goal(&self, goal_id_to_delete: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal, today: NaiveDate) -> Result<Goal>;
    /// Records a new current value and re-derives the goal's status.
    async fn update_goal_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        current_value: Decimal,
        today: NaiveDate,
    ) -> Result<Goal>;
    /// Re-derives every goal of the user, persisting only those whose status moved.
    async fn refresh_goal_statuses(&self, user_id: &str, today: NaiveDate) -> Result<Vec<Goal>>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}
