//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::goals::GoalStatus;

/// Domain events emitted by core services after successful mutations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal's derived status differs from the one previously stored.
    GoalStatusChanged {
        user_id: String,
        goal_id: String,
        old_status: GoalStatus,
        new_status: GoalStatus,
    },

    /// Achievements were unlocked and recorded for a user.
    AchievementsEarned {
        user_id: String,
        achievement_ids: Vec<String>,
    },
}

impl DomainEvent {
    /// Creates a GoalStatusChanged event.
    pub fn goal_status_changed(
        user_id: String,
        goal_id: String,
        old_status: GoalStatus,
        new_status: GoalStatus,
    ) -> Self {
        Self::GoalStatusChanged {
            user_id,
            goal_id,
            old_status,
            new_status,
        }
    }

    /// Creates an AchievementsEarned event.
    pub fn achievements_earned(user_id: String, achievement_ids: Vec<String>) -> Self {
        Self::AchievementsEarned {
            user_id,
            achievement_ids,
        }
    }

    /// The user the event concerns, used by hosts to route notifications.
    pub fn user_id(&self) -> &str {
        match self {
            Self::GoalStatusChanged { user_id, .. } | Self::AchievementsEarned { user_id, .. } => {
                user_id
            }
        }
    }
}
