use chrono::NaiveDate;

use crate::errors::Result;
use crate::records::records_model::{
    ActivityRecord, ActivityStats, NutritionRecord, SleepRecord, WaterIntakeRecord,
};

/// Read access to a user's daily logs.
///
/// Date ranges are inclusive on both ends.
pub trait RecordRepositoryTrait: Send + Sync {
    /// Lifetime aggregates over all of the user's activities.
    fn get_activity_stats(&self, user_id: &str) -> Result<ActivityStats>;

    /// Distinct days with at least one activity, newest first, at most `limit`.
    fn get_recent_activity_dates(&self, user_id: &str, limit: u32) -> Result<Vec<NaiveDate>>;

    fn get_activities(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ActivityRecord>>;

    fn get_nutrition(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<NutritionRecord>>;

    fn get_water_intake(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<WaterIntakeRecord>>;

    fn get_sleep(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<SleepRecord>>;
}
