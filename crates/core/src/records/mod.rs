//! Daily records module - log row models, streaks, and the read-side repository trait.

mod records_model;
mod records_traits;
mod streak_calculator;

pub use records_model::{
    ActivityRecord, ActivityStats, NutritionRecord, SleepRecord, WaterIntakeRecord,
};
pub use records_traits::RecordRepositoryTrait;
pub use streak_calculator::{calculate_current_streak, calculate_longest_streak};
