//! Monthly expense trend per category.

use std::collections::{BTreeMap, BTreeSet};

use budgetwise_shared::types::{MonthKey, saturating_sum};
use rust_decimal::Decimal;

use super::types::{TrendPoint, TrendSeries, TrendWindow};
use crate::aggregation::{CategoryAggregator, CategoryTotals};
use crate::transaction::Transaction;

/// Builds expense trend series from month-bucketed transactions.
pub struct TrendAggregator;

impl TrendAggregator {
    /// Builds the series for the `window` months ending at `now`.
    ///
    /// With `selected`, only that category is reported. Otherwise every
    /// category with an expense somewhere in the window is, sorted by name.
    /// Returns an empty series when the window holds no expenses at all.
    #[must_use]
    pub fn build(
        history: &BTreeMap<MonthKey, Vec<Transaction>>,
        window: TrendWindow,
        now: MonthKey,
        selected: Option<&str>,
    ) -> TrendSeries {
        let monthly: Vec<(MonthKey, CategoryTotals)> = now
            .months_ending_at(window.months())
            .into_iter()
            .map(|month| {
                let totals = CategoryAggregator::aggregate_expenses(
                    history.get(&month).into_iter().flatten(),
                );
                (month, totals)
            })
            .collect();

        let observed: BTreeSet<&String> = monthly.iter().flat_map(|(_, t)| t.keys()).collect();
        if observed.is_empty() {
            tracing::debug!(%now, months = window.months(), "no expenses in trend window");
            return TrendSeries::default();
        }

        let categories: Vec<String> = match selected {
            Some(category) => vec![category.to_string()],
            None => observed.into_iter().cloned().collect(),
        };

        let points = monthly
            .iter()
            .map(|(month, totals)| {
                let amounts: BTreeMap<String, Decimal> = categories
                    .iter()
                    .map(|c| (c.clone(), totals.get(c).copied().unwrap_or_default()))
                    .collect();
                let total = saturating_sum(amounts.values().copied());
                TrendPoint {
                    month_label: month.short_label(),
                    month: *month,
                    amounts,
                    total,
                }
            })
            .collect();

        TrendSeries { categories, points }
    }
}
