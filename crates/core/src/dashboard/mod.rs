//! Dashboard orchestration.
//!
//! This module wires the pure components to the data sources:
//! - Current-month overview (status, balance, plan comparison, indicators)
//! - Historical analytics (trend, forecast, seasonality)
//! - Month closing and guarded transaction entry

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{AnalyticsOverview, MonthOverview};
