//! Dashboard data types.

use budgetwise_shared::types::MonthKey;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::{ForecastPoint, SeasonalityReport, TrendSeries, TrendWindow};
use crate::closing::MonthStatus;
use crate::indicators::PerformanceIndicators;
use crate::planning::{ChartData, ComparisonRecord};
use crate::transaction::Transaction;

/// Everything the current-month view shows.
#[derive(Debug, Clone, Serialize)]
pub struct MonthOverview {
    /// Month shown.
    pub month: MonthKey,
    /// Open or closed, with the carried or frozen balance.
    pub status: MonthStatus,
    /// Current balance.
    pub balance: Decimal,
    /// Income booked in the month.
    pub total_income: Decimal,
    /// Expenses booked in the month.
    pub total_expense: Decimal,
    /// Month transactions, newest first.
    pub transactions: Vec<Transaction>,
    /// True when the user made a plan for the month.
    pub has_plan: bool,
    /// Planned-vs-actual per plan category, in plan order.
    pub comparisons: Vec<ComparisonRecord>,
    /// Chart series derived from `comparisons`.
    pub chart: ChartData,
    /// Savings rate, budget deviation and reserve days.
    pub indicators: PerformanceIndicators,
}

/// Historical analytics for the analytics view.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsOverview {
    /// Last month covered.
    pub now: MonthKey,
    /// Trend window used.
    pub window: TrendWindow,
    /// Expense trend ending at `now`.
    pub trend: TrendSeries,
    /// Projection following the trend.
    pub forecast: Vec<ForecastPoint>,
    /// Calendar-month seasonality.
    pub seasonality: SeasonalityReport,
}
