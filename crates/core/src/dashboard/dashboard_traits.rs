use chrono::NaiveDate;

use super::dashboard_model::DashboardSummary;
use crate::errors::Result;

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    /// Dashboard for the configured number of days ending on `today`.
    fn get_dashboard(&self, user_id: &str, today: NaiveDate) -> Result<DashboardSummary>;
}
