//! Linear-tendency expense forecast.

use std::collections::BTreeMap;

use budgetwise_shared::types::{round_half_up, saturating_sum};
use rust_decimal::Decimal;

use super::types::{CategoryStatistics, ForecastPoint, TrendSeries};

/// Values needed before a tendency is derived from the series.
const MIN_POINTS_FOR_TENDENCY: usize = 3;

/// Projects a trend series into future months.
pub struct ForecastProjector;

impl ForecastProjector {
    /// Projects `months_ahead` months past the last point of `trend`.
    ///
    /// Each category continues from its mean along its tendency and never
    /// drops below zero. Values are rounded to two decimals.
    #[must_use]
    pub fn forecast(trend: &TrendSeries, months_ahead: u32) -> Vec<ForecastPoint> {
        let Some(last) = trend.points.last() else {
            return Vec::new();
        };

        let statistics = Self::statistics(trend);

        (1..=months_ahead)
            .map(|step| {
                let month = last.month.shift(step.cast_signed());
                let step = Decimal::from(step);

                let amounts: BTreeMap<String, Decimal> = statistics
                    .iter()
                    .map(|(category, stats)| {
                        let projected = stats
                            .mean
                            .saturating_add(stats.tendency.saturating_mul(step))
                            .max(Decimal::ZERO);
                        (category.clone(), round_half_up(projected, 2))
                    })
                    .collect();
                let total = saturating_sum(amounts.values().copied());

                ForecastPoint {
                    month_label: month.short_label(),
                    month,
                    amounts,
                    total,
                }
            })
            .collect()
    }

    /// Mean and tendency of every category in the series.
    ///
    /// Tendency is `(v[n-1] - v[n-3]) / 2`, or zero with fewer than three
    /// points.
    #[must_use]
    pub fn statistics(trend: &TrendSeries) -> BTreeMap<String, CategoryStatistics> {
        trend
            .categories
            .iter()
            .map(|category| {
                let values = trend.values(category);
                (category.clone(), Self::category_statistics(&values))
            })
            .collect()
    }

    fn category_statistics(values: &[Decimal]) -> CategoryStatistics {
        if values.is_empty() {
            return CategoryStatistics {
                mean: Decimal::ZERO,
                tendency: Decimal::ZERO,
            };
        }

        let n = values.len();
        let mean = saturating_sum(values.iter().copied()) / Decimal::from(n);
        let tendency = if n >= MIN_POINTS_FOR_TENDENCY {
            (values[n - 1] - values[n - 3]) / Decimal::TWO
        } else {
            Decimal::ZERO
        };

        CategoryStatistics { mean, tendency }
    }
}
