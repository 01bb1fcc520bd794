//! Calendar-month seasonality of expenses.
//!
//! Spending is bucketed by (calendar month, category) over a window of
//! whole years. Each bucket's average divides by the number of distinct
//! years that actually had spending there, so a category that only
//! started last year is not diluted by the empty year before it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use budgetwise_shared::types::{MonthKey, round_half_up, saturating_sum};
use rust_decimal::Decimal;

use super::types::{CategorySeasonality, SeasonalMonth, SeasonalityProfile, SeasonalityReport};
use crate::transaction::Transaction;

/// Minimum index spread for a category to be highlighted.
pub const HIGHLIGHT_SPREAD: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Maximum number of highlighted categories.
pub const MAX_HIGHLIGHTED: usize = 5;

const MONTHS_PER_YEAR: u32 = 12;

#[derive(Default)]
struct Bucket {
    sum: Decimal,
    years: BTreeSet<i32>,
}

/// Detects recurring monthly spending patterns.
pub struct SeasonalityAnalyzer;

impl SeasonalityAnalyzer {
    /// Analyzes the `years_window` calendar years ending at `now`'s year.
    ///
    /// Months after `now` are ignored. Returns an empty report when the
    /// window holds no expenses.
    #[must_use]
    pub fn analyze(
        history: &BTreeMap<MonthKey, Vec<Transaction>>,
        years_window: u32,
        now: MonthKey,
    ) -> SeasonalityReport {
        if years_window == 0 {
            return SeasonalityReport::default();
        }

        let years_back = i32::try_from(years_window - 1).unwrap_or(i32::MAX);
        let first_year = now.year().saturating_sub(years_back);
        let mut buckets: BTreeMap<&str, HashMap<u32, Bucket>> = BTreeMap::new();

        for (month, transactions) in history.range(..=now) {
            if month.year() < first_year {
                continue;
            }
            for tx in transactions.iter().filter(|tx| tx.is_expense()) {
                let bucket = buckets
                    .entry(tx.category.as_str())
                    .or_default()
                    .entry(month.month())
                    .or_default();
                bucket.sum = bucket.sum.saturating_add(tx.amount);
                bucket.years.insert(month.year());
            }
        }

        let profile: SeasonalityProfile = buckets
            .into_iter()
            .map(|(category, by_month)| {
                let averages: Vec<Decimal> = (1..=MONTHS_PER_YEAR)
                    .map(|m| {
                        by_month.get(&m).map_or(Decimal::ZERO, |b| {
                            round_half_up(b.sum / Decimal::from(b.years.len()), 2)
                        })
                    })
                    .collect();
                (category.to_string(), Self::category_profile(&averages))
            })
            .collect();

        let highlighted = Self::highlight(&profile);

        tracing::debug!(
            %now,
            years_window,
            categories = profile.len(),
            highlighted = highlighted.len(),
            "analyzed seasonality"
        );

        SeasonalityReport {
            profile,
            highlighted,
        }
    }

    /// Builds one category's profile from its twelve monthly averages.
    fn category_profile(averages: &[Decimal]) -> CategorySeasonality {
        let annual_mean =
            saturating_sum(averages.iter().copied()) / Decimal::from(MONTHS_PER_YEAR);

        let months: BTreeMap<u32, SeasonalMonth> = (1..=MONTHS_PER_YEAR)
            .zip(averages.iter().copied())
            .map(|(m, average_amount)| {
                let seasonality_index = if annual_mean > Decimal::ZERO {
                    round_half_up(average_amount / annual_mean, 2)
                } else {
                    Decimal::ONE
                };
                (
                    m,
                    SeasonalMonth {
                        average_amount,
                        seasonality_index,
                    },
                )
            })
            .collect();

        let indices = months.values().map(|s| s.seasonality_index);
        let spread = match (indices.clone().max(), indices.min()) {
            (Some(max), Some(min)) => max - min,
            _ => Decimal::ZERO,
        };

        CategorySeasonality {
            months,
            annual_mean,
            spread,
        }
    }

    /// Categories whose spread exceeds [`HIGHLIGHT_SPREAD`], strongest first.
    fn highlight(profile: &SeasonalityProfile) -> Vec<String> {
        let mut candidates: Vec<(&String, Decimal)> = profile
            .iter()
            .filter(|(_, s)| s.spread > HIGHLIGHT_SPREAD)
            .map(|(name, s)| (name, s.spread))
            .collect();

        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        candidates
            .into_iter()
            .take(MAX_HIGHLIGHTED)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
