//! Dashboard module - read-models, aggregation, and the dashboard service.

mod dashboard_aggregator;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_aggregator::{aggregate_dashboard, DashboardInput};
pub use dashboard_model::*;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
