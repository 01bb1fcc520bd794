//! Presentation-ready series derived from comparison records.

use budgetwise_shared::types::{percentage, round_half_up, saturating_sum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::ComparisonRecord;
use crate::transaction::Flow;

/// One slice of the expense distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// Category name.
    pub name: String,
    /// Actual amount spent.
    pub value: Decimal,
}

/// Planned and actual amounts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Category name.
    pub name: String,
    /// Planned amount.
    pub planned: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Income or expense.
    pub flow: Flow,
}

/// Chart data for the current-month view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Expense breakdown by category.
    pub distribution: Vec<DistributionSlice>,
    /// Planned-vs-actual pairs for every category.
    pub series: Vec<SeriesPoint>,
}

impl ChartData {
    /// Sum of all distribution values.
    #[must_use]
    pub fn distribution_total(&self) -> Decimal {
        saturating_sum(self.distribution.iter().map(|s| s.value))
    }

    /// Share of each slice in the distribution total, in percent with one decimal.
    ///
    /// Every share is zero when nothing was spent.
    #[must_use]
    pub fn distribution_shares(&self) -> Vec<(String, Decimal)> {
        let total = self.distribution_total();
        self.distribution
            .iter()
            .map(|slice| {
                (
                    slice.name.clone(),
                    round_half_up(percentage(slice.value, total), 1),
                )
            })
            .collect()
    }
}

/// Reshapes comparison records into chart series.
pub struct ChartProjector;

impl ChartProjector {
    /// Builds the distribution (expenses only) and planned-vs-actual series.
    ///
    /// Both keep the order of `comparisons`.
    #[must_use]
    pub fn project(comparisons: &[ComparisonRecord]) -> ChartData {
        let distribution = comparisons
            .iter()
            .filter(|c| c.flow == Flow::Expense)
            .map(|c| DistributionSlice {
                name: c.name.clone(),
                value: c.actual_amount,
            })
            .collect();

        let series = comparisons
            .iter()
            .map(|c| SeriesPoint {
                name: c.name.clone(),
                planned: c.planned_amount,
                actual: c.actual_amount,
                flow: c.flow,
            })
            .collect();

        ChartData {
            distribution,
            series,
        }
    }
}
