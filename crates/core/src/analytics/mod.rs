//! Analytics module - spending breakdowns, monthly cash flow and goal outlook.

mod analytics_metrics;
mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use analytics_metrics::{build_analytics_overview, transactions_in_range, AnalyticsOverview};
pub use analytics_model::AnalyticsRange;
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
