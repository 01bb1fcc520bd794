//! Indicator data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Performance indicators for one user and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceIndicators {
    /// Share of income not spent, in percent (2 dp). Negative when overspending.
    pub savings_rate: Decimal,
    /// Mean absolute deviation from plan, in percent (2 dp).
    pub budget_deviation: Decimal,
    /// Days the month's surplus would last at the recent daily spending rate.
    pub reserve_days: u32,
}
