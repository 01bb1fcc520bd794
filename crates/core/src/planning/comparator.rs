//! Plan comparator for budget-vs-actual reconciliation.

use budgetwise_shared::types::percentage;
use rust_decimal::Decimal;

use super::types::{ComparisonRecord, ComparisonStatus, MonthlyPlan};
use crate::aggregation::FlowTotals;
use crate::transaction::Flow;

/// Income at or above this percentage of target is only a warning.
const INCOME_WARNING_FLOOR: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Merges a plan with aggregated actuals.
pub struct PlanComparator;

impl PlanComparator {
    /// Compares each planned category against the actual totals of its flow.
    ///
    /// Returns an empty list when there is no plan or the plan has no
    /// categories. Output order follows the plan.
    #[must_use]
    pub fn compare(plan: Option<&MonthlyPlan>, totals: &FlowTotals) -> Vec<ComparisonRecord> {
        let Some(plan) = plan else {
            return Vec::new();
        };

        plan.categories
            .iter()
            .map(|category| {
                let actual = totals.actual(category.flow, &category.name);
                let percent = percentage(actual, category.planned_amount);

                ComparisonRecord {
                    name: category.name.clone(),
                    flow: category.flow,
                    planned_amount: category.planned_amount,
                    actual_amount: actual,
                    percent_of_plan: percent,
                    status: Self::classify(category.flow, percent),
                }
            })
            .collect()
    }

    /// Classifies a percentage of plan.
    ///
    /// Expenses are `Ok` up to and including 100% and `Exceeded` above it;
    /// there is no warning tier for expenses. Income is `Ok` from 100%,
    /// `Warning` from 80% and `Exceeded` below 80%.
    #[must_use]
    pub fn classify(flow: Flow, percent: Decimal) -> ComparisonStatus {
        match flow {
            Flow::Expense => {
                if percent <= Decimal::ONE_HUNDRED {
                    ComparisonStatus::Ok
                } else {
                    ComparisonStatus::Exceeded
                }
            }
            Flow::Income => {
                if percent >= Decimal::ONE_HUNDRED {
                    ComparisonStatus::Ok
                } else if percent >= INCOME_WARNING_FLOOR {
                    ComparisonStatus::Warning
                } else {
                    ComparisonStatus::Exceeded
                }
            }
        }
    }
}
