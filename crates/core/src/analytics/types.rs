//! Analytics domain types.

use std::collections::BTreeMap;

use budgetwise_shared::types::MonthKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AnalyticsError;

/// Number of months covered by a trend series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TrendWindow {
    /// Last quarter.
    Three,
    /// Last half year.
    #[default]
    Six,
    /// Last year.
    Twelve,
}

impl TrendWindow {
    /// Number of calendar months in the window.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }
}

impl TryFrom<u32> for TrendWindow {
    type Error = AnalyticsError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(Self::Three),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            other => Err(AnalyticsError::InvalidWindow(other)),
        }
    }
}

impl From<TrendWindow> for u32 {
    fn from(window: TrendWindow) -> Self {
        window.months()
    }
}

/// Expense totals for one month of a trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Display label, e.g. `Mar/26`.
    pub month_label: String,
    /// Month key.
    pub month: MonthKey,
    /// Expense amount per included category; absent categories are zero.
    pub amounts: BTreeMap<String, Decimal>,
    /// Sum of `amounts`.
    pub total: Decimal,
}

impl TrendPoint {
    /// Amount for `category`, zero when it is not part of the series.
    #[must_use]
    pub fn amount(&self, category: &str) -> Decimal {
        self.amounts.get(category).copied().unwrap_or_default()
    }
}

/// Monthly expense series, oldest month first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Categories present in every point, sorted by name.
    pub categories: Vec<String>,
    /// One point per month of the window.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// True when the window held no expenses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values of one category across the series, oldest first.
    #[must_use]
    pub fn values(&self, category: &str) -> Vec<Decimal> {
        self.points.iter().map(|p| p.amount(category)).collect()
    }
}

/// Projected expenses for one future month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Display label, e.g. `Apr/26`.
    pub month_label: String,
    /// Month key.
    pub month: MonthKey,
    /// Projected amount per category, never negative.
    pub amounts: BTreeMap<String, Decimal>,
    /// Sum of `amounts`.
    pub total: Decimal,
}

/// Mean and linear tendency of one category's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatistics {
    /// Arithmetic mean of the series.
    pub mean: Decimal,
    /// Per-month slope taken from the last three values.
    pub tendency: Decimal,
}

/// Seasonal figures for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalMonth {
    /// Average spend for the month across the years it appears in.
    pub average_amount: Decimal,
    /// Average relative to the category's annual mean.
    pub seasonality_index: Decimal,
}

/// Seasonality of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeasonality {
    /// Figures per calendar month (1-12); all twelve are present.
    pub months: BTreeMap<u32, SeasonalMonth>,
    /// Mean of the twelve monthly averages.
    pub annual_mean: Decimal,
    /// Highest minus lowest seasonality index.
    pub spread: Decimal,
}

/// Seasonality per category, keyed by category name.
pub type SeasonalityProfile = BTreeMap<String, CategorySeasonality>;

/// Seasonality profile plus the categories with the strongest variation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalityReport {
    /// Per-category profile.
    pub profile: SeasonalityProfile,
    /// Categories whose spread exceeds the threshold, strongest first.
    pub highlighted: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_window_accepts_supported_sizes() {
        assert_eq!(TrendWindow::try_from(3_u32).unwrap(), TrendWindow::Three);
        assert_eq!(TrendWindow::try_from(6_u32).unwrap(), TrendWindow::Six);
        assert_eq!(TrendWindow::try_from(12_u32).unwrap(), TrendWindow::Twelve);
    }

    #[test]
    fn test_trend_window_rejects_other_sizes() {
        for months in [0_u32, 1, 4, 24] {
            assert!(matches!(
                TrendWindow::try_from(months),
                Err(AnalyticsError::InvalidWindow(m)) if m == months
            ));
        }
    }

    #[test]
    fn test_trend_window_serializes_as_month_count() {
        assert_eq!(serde_json::to_string(&TrendWindow::Twelve).unwrap(), "12");
        let parsed: TrendWindow = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, TrendWindow::Three);
        assert!(serde_json::from_str::<TrendWindow>("5").is_err());
    }
}
