//! Performance indicator calculator.

use budgetwise_shared::types::{MonthKey, percentage, round_half_up, saturating_sum};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::PerformanceIndicators;
use crate::planning::ComparisonRecord;
use crate::transaction::{Flow, Transaction};

/// Calendar months in the trailing spending window, current month included.
pub const TRAILING_WINDOW_MONTHS: u32 = 3;

/// Days the trailing window is assumed to span.
const TRAILING_WINDOW_DAYS: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// Days in a month when only the current month's spending is known.
const FALLBACK_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Computes month performance indicators.
pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// Computes savings rate, budget deviation and reserve days.
    ///
    /// `prior_expense_total` is the expense total over the three calendar
    /// months ending at the current month (see [`Self::trailing_expense_total`]).
    /// When it is zero, the current month's expenses over 30 days stand in
    /// for the daily spending rate.
    #[must_use]
    pub fn compute(
        current_month: &[Transaction],
        comparisons: &[ComparisonRecord],
        prior_expense_total: Decimal,
    ) -> PerformanceIndicators {
        let (income, expense) = Self::flow_sums(current_month);

        let savings_rate = round_half_up(percentage(income - expense, income), 2);
        let budget_deviation = round_half_up(Self::budget_deviation(comparisons), 2);
        let reserve_days = Self::reserve_days(income - expense, expense, prior_expense_total);

        tracing::debug!(
            transactions = current_month.len(),
            comparisons = comparisons.len(),
            %savings_rate,
            %budget_deviation,
            reserve_days,
            "computed performance indicators"
        );

        PerformanceIndicators {
            savings_rate,
            budget_deviation,
            reserve_days,
        }
    }

    /// Mean of `|actual - planned| / planned * 100` over categories with a plan.
    ///
    /// Zero when no category has a positive planned amount. Not rounded.
    #[must_use]
    pub fn budget_deviation(comparisons: &[ComparisonRecord]) -> Decimal {
        let deviations: Vec<Decimal> = comparisons
            .iter()
            .filter(|c| c.planned_amount > Decimal::ZERO)
            .map(|c| percentage((c.actual_amount - c.planned_amount).abs(), c.planned_amount))
            .collect();

        if deviations.is_empty() {
            return Decimal::ZERO;
        }

        saturating_sum(deviations.iter().copied()) / Decimal::from(deviations.len())
    }

    /// Days `surplus` would last at the recent daily spending rate.
    ///
    /// Never negative; zero when there is no spending rate to divide by.
    #[must_use]
    pub fn reserve_days(
        surplus: Decimal,
        current_expense: Decimal,
        prior_expense_total: Decimal,
    ) -> u32 {
        let daily_burn = if prior_expense_total > Decimal::ZERO {
            prior_expense_total / TRAILING_WINDOW_DAYS
        } else {
            current_expense / FALLBACK_MONTH_DAYS
        };

        if daily_burn <= Decimal::ZERO || surplus <= Decimal::ZERO {
            return 0;
        }

        surplus
            .checked_div(daily_burn)
            .and_then(|days| days.floor().to_u32())
            .unwrap_or(u32::MAX)
    }

    /// The calendar months whose expenses make up the trailing window.
    #[must_use]
    pub fn trailing_months(current: MonthKey) -> Vec<MonthKey> {
        current.months_ending_at(TRAILING_WINDOW_MONTHS)
    }

    /// Sums expenses booked in the trailing window ending at `current`.
    #[must_use]
    pub fn trailing_expense_total<'a, I>(transactions: I, current: MonthKey) -> Decimal
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let window = Self::trailing_months(current);
        saturating_sum(
            transactions
                .into_iter()
                .filter(|tx| tx.is_expense() && window.contains(&tx.month))
                .map(|tx| tx.amount),
        )
    }

    fn flow_sums(transactions: &[Transaction]) -> (Decimal, Decimal) {
        transactions
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(income, expense), tx| {
                match tx.flow {
                    Flow::Income => (income.saturating_add(tx.amount), expense),
                    Flow::Expense => (income, expense.saturating_add(tx.amount)),
                }
            })
    }
}
