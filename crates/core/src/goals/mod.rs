//! Goals module - domain models, progress and status calculation, services, and traits.

mod goal_lifecycle;
mod goals_model;
mod goals_service;
mod goals_traits;
mod progress_calculator;

pub use goal_lifecycle::{derive_goal_status, goal_direction, is_target_reached};
pub use goals_model::{Goal, GoalDirection, GoalStatus, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
pub use progress_calculator::calculate_progress;
