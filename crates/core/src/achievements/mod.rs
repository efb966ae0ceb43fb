//! Achievements module - catalog models, evaluation, services, and traits.

mod achievement_evaluator;
mod achievements_model;
mod achievements_service;
mod achievements_traits;

pub use achievement_evaluator::evaluate_achievements;
pub use achievements_model::{AchievementCriterion, CriteriaType, EarnedAchievement, UserStats};
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};

#[cfg(test)]
mod achievements_service_tests;
