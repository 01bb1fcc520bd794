//! Property-based tests for the indicators module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::IndicatorCalculator;
use budgetwise_shared::types::round_half_up;
use crate::planning::{ComparisonRecord, ComparisonStatus};
use crate::test_support::{expense, income, month};
use crate::transaction::Flow;

fn comparison(planned: Decimal, actual: Decimal) -> ComparisonRecord {
    ComparisonRecord {
        name: "Category".to_string(),
        flow: Flow::Expense,
        planned_amount: planned,
        actual_amount: actual,
        percent_of_plan: Decimal::ZERO,
        status: ComparisonStatus::Ok,
    }
}

proptest! {
    /// Reserve days are never negative, whatever the surplus.
    #[test]
    fn prop_reserve_days_never_negative(
        income_cents in 0i64..100_000_000,
        expense_cents in 0i64..100_000_000,
        prior_cents in 0i64..100_000_000,
    ) {
        let transactions = vec![
            income("Salary", Decimal::new(income_cents, 2), "2026-03"),
            expense("Rent", Decimal::new(expense_cents, 2), "2026-03"),
        ];

        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::new(prior_cents, 2));

        // u32 cannot be negative; a deficit must floor to zero.
        if expense_cents > income_cents {
            prop_assert_eq!(result.reserve_days, 0);
        }
    }

    /// Budget deviation is never negative.
    #[test]
    fn prop_budget_deviation_non_negative(
        pairs in prop::collection::vec((0i64..1_000_000, 0i64..1_000_000), 0..20),
    ) {
        let comparisons: Vec<ComparisonRecord> = pairs
            .iter()
            .map(|&(p, a)| comparison(Decimal::from(p), Decimal::from(a)))
            .collect();

        let result = IndicatorCalculator::compute(&[], &comparisons, Decimal::ZERO);
        prop_assert!(result.budget_deviation >= Decimal::ZERO);
    }

    /// Savings rate is exactly 100 when nothing was spent.
    #[test]
    fn prop_savings_rate_full_without_expenses(income_cents in 1i64..100_000_000) {
        let transactions = vec![income("Salary", Decimal::new(income_cents, 2), "2026-03")];
        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        prop_assert_eq!(result.savings_rate, dec!(100));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_savings_rate_scenario() {
        let transactions = vec![
            income("Salary", dec!(5000), "2026-03"),
            expense("Rent", dec!(2000), "2026-03"),
            expense("Food", dec!(1000), "2026-03"),
        ];

        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        assert_eq!(result.savings_rate, dec!(40.00));
    }

    #[test]
    fn test_savings_rate_negative_when_overspending() {
        let transactions = vec![
            income("Salary", dec!(1000), "2026-03"),
            expense("Rent", dec!(1500), "2026-03"),
        ];

        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        assert_eq!(result.savings_rate, dec!(-50.00));
    }

    #[test]
    fn test_savings_rate_without_income_is_zero() {
        let transactions = vec![expense("Rent", dec!(1500), "2026-03")];
        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        assert_eq!(result.savings_rate, Decimal::ZERO);
    }

    #[test]
    fn test_savings_rate_rounds_to_two_places() {
        let transactions = vec![
            income("Salary", dec!(3000), "2026-03"),
            expense("Rent", dec!(1000), "2026-03"),
        ];
        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        assert_eq!(result.savings_rate, dec!(66.67));
    }

    #[test]
    fn test_reserve_days_scenario() {
        // Surplus of 1800 against 9000 spent over the trailing 90 days.
        let transactions = vec![
            income("Salary", dec!(4800), "2026-03"),
            expense("Rent", dec!(3000), "2026-03"),
        ];

        let result = IndicatorCalculator::compute(&transactions, &[], dec!(9000));
        assert_eq!(result.reserve_days, 18);
    }

    #[test]
    fn test_reserve_days_falls_back_to_current_month() {
        // 3000 / 30 = 100 per day, surplus 1850 -> 18.5 floored.
        let transactions = vec![
            income("Salary", dec!(4850), "2026-03"),
            expense("Rent", dec!(3000), "2026-03"),
        ];

        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        assert_eq!(result.reserve_days, 18);
    }

    #[test]
    fn test_reserve_days_zero_without_any_spending() {
        let transactions = vec![income("Salary", dec!(4850), "2026-03")];
        let result = IndicatorCalculator::compute(&transactions, &[], Decimal::ZERO);
        assert_eq!(result.reserve_days, 0);
    }

    #[test]
    fn test_reserve_days_negative_surplus_floors_to_zero() {
        assert_eq!(
            IndicatorCalculator::reserve_days(dec!(-500), dec!(3000), dec!(9000)),
            0
        );
    }

    #[test]
    fn test_reserve_days_saturate_with_tiny_spending() {
        let huge = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        assert_eq!(
            IndicatorCalculator::reserve_days(huge, dec!(0.01), Decimal::ZERO),
            u32::MAX
        );
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let transactions = vec![
            income("Salary", Decimal::MAX, "2026-03"),
            income("Bonus", Decimal::MAX, "2026-03"),
            expense("Rent", dec!(0.01), "2026-03"),
        ];
        let comparisons = vec![comparison(dec!(0.01), Decimal::MAX)];

        let result = IndicatorCalculator::compute(&transactions, &comparisons, Decimal::ZERO);
        assert_eq!(result.reserve_days, u32::MAX);
        assert_eq!(result.budget_deviation, round_half_up(Decimal::MAX, 2));
    }

    #[test]
    fn test_budget_deviation_averages_planned_categories() {
        let comparisons = vec![
            comparison(dec!(1000), dec!(1100)), // 10%
            comparison(dec!(500), dec!(250)),   // 50%
            comparison(dec!(0), dec!(900)),     // ignored
        ];

        let result = IndicatorCalculator::compute(&[], &comparisons, Decimal::ZERO);
        assert_eq!(result.budget_deviation, dec!(30.00));
    }

    #[test]
    fn test_budget_deviation_without_plan_is_zero() {
        let result =
            IndicatorCalculator::compute(&[], &[comparison(dec!(0), dec!(10))], Decimal::ZERO);
        assert_eq!(result.budget_deviation, Decimal::ZERO);
    }

    #[test]
    fn test_trailing_window_includes_current_month() {
        let months = IndicatorCalculator::trailing_months(month("2026-02"));
        assert_eq!(
            months,
            vec![month("2025-12"), month("2026-01"), month("2026-02")]
        );
    }

    #[test]
    fn test_trailing_expense_total() {
        let history = vec![
            expense("Rent", dec!(3000), "2025-11"), // outside window
            expense("Rent", dec!(3000), "2025-12"),
            expense("Rent", dec!(3000), "2026-01"),
            income("Salary", dec!(5000), "2026-01"),
            expense("Rent", dec!(3000), "2026-02"),
            expense("Rent", dec!(3000), "2026-03"), // after current month
        ];

        let total = IndicatorCalculator::trailing_expense_total(&history, month("2026-02"));
        assert_eq!(total, dec!(9000));
    }
}
