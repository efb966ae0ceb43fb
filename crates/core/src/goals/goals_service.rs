use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::goal_lifecycle::derive_goal_status;
use crate::goals::goals_model::{Goal, GoalStatus, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        GoalService {
            goal_repo,
            event_sink,
        }
    }

    fn validate_new_goal(new_goal: &NewGoal) -> Result<()> {
        if new_goal.goal_type.trim().is_empty() {
            return Err(ValidationError::MissingField("goalType".to_string()).into());
        }
        if new_goal.target_value <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Target value must be greater than zero".to_string(),
            )
            .into());
        }
        Self::validate_value("currentValue", new_goal.current_value)?;
        if let Some(initial) = new_goal.initial_value {
            Self::validate_value("initialValue", initial)?;
        }
        Ok(())
    }

    fn validate_value(field: &str, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!("{} must not be negative", field)).into());
        }
        Ok(())
    }

    /// Loads a goal and checks that it belongs to `user_id`. Goals owned by
    /// someone else are reported as missing.
    fn load_owned_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let goal = match self.goal_repo.get_goal(goal_id) {
            Ok(goal) => goal,
            Err(Error::Database(DatabaseError::NotFound(_))) => {
                return Err(Error::NotFound(format!("Goal {}", goal_id)))
            }
            Err(e) => return Err(e),
        };
        if goal.user_id != user_id {
            return Err(Error::NotFound(format!("Goal {}", goal_id)));
        }
        Ok(goal)
    }

    fn derive_status(goal: &Goal, today: NaiveDate) -> GoalStatus {
        if !goal.has_recorded_baseline() {
            warn!(
                "Goal {} has no initial value; direction inferred from current value {}",
                goal.id, goal.current_value
            );
        }
        derive_goal_status(goal, today)
    }

    fn status_changed_event(goal: &Goal, old_status: GoalStatus) -> DomainEvent {
        DomainEvent::goal_status_changed(
            goal.user_id.clone(),
            goal.id.clone(),
            old_status,
            goal.status,
        )
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals_for_user(user_id)
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal, today: NaiveDate) -> Result<Goal> {
        Self::validate_new_goal(&new_goal)?;

        let mut goal = Goal {
            id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            goal_type: new_goal.goal_type,
            target_value: new_goal.target_value,
            current_value: new_goal.current_value,
            initial_value: new_goal.initial_value,
            deadline: new_goal.deadline,
            status: GoalStatus::InProgress,
        };
        goal.status = Self::derive_status(&goal, today);

        let created = self.goal_repo.insert_new_goal(goal).await?;
        info!("Created goal {} for user {} ({})", created.id, user_id, created.status);
        Ok(created)
    }

    async fn update_goal_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        current_value: Decimal,
        today: NaiveDate,
    ) -> Result<Goal> {
        Self::validate_value("currentValue", current_value)?;

        let mut goal = self.load_owned_goal(user_id, goal_id)?;
        let old_status = goal.status;
        goal.current_value = current_value;
        goal.status = Self::derive_status(&goal, today);

        debug!(
            "Goal {} progress update: current={} status {} -> {}",
            goal.id, goal.current_value, old_status, goal.status
        );

        let updated = self.goal_repo.update_goal(goal).await?;
        if updated.status != old_status {
            info!("Goal {} moved from {} to {}", updated.id, old_status, updated.status);
            self.event_sink
                .emit(Self::status_changed_event(&updated, old_status));
        }
        Ok(updated)
    }

    async fn refresh_goal_statuses(&self, user_id: &str, today: NaiveDate) -> Result<Vec<Goal>> {
        let goals = self.goal_repo.load_goals_for_user(user_id)?;

        let mut changed = Vec::new();
        let mut events = Vec::new();
        for mut goal in goals {
            let old_status = goal.status;
            goal.status = Self::derive_status(&goal, today);
            if goal.status != old_status {
                events.push(Self::status_changed_event(&goal, old_status));
                changed.push(goal);
            }
        }

        if changed.is_empty() {
            debug!("No goal status changes for user {}", user_id);
            return Ok(changed);
        }

        let affected = self.goal_repo.update_goals(changed.clone()).await?;
        info!("Refreshed {} goal statuses for user {}", affected, user_id);
        self.event_sink.emit_batch(events);
        Ok(changed)
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let goal = self.load_owned_goal(user_id, goal_id)?;
        self.goal_repo.delete_goal(&goal.id).await
    }
}
