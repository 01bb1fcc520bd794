//! Plan data types.

use budgetwise_shared::types::{MonthKey, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::Flow;

/// A budget ceiling (expense) or target (income) for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCategory {
    /// Category name, unique within a plan.
    pub name: String,
    /// Non-negative planned amount.
    pub planned_amount: Decimal,
    /// Income or expense.
    pub flow: Flow,
}

impl PlanCategory {
    /// Creates a plan category.
    #[must_use]
    pub fn new(name: impl Into<String>, planned_amount: Decimal, flow: Flow) -> Self {
        Self {
            name: name.into(),
            planned_amount,
            flow,
        }
    }
}

/// A user's plan for one month.
///
/// Category order is the display order of every downstream view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPlan {
    /// Plan owner.
    pub user_id: UserId,
    /// Month the plan covers.
    pub month: MonthKey,
    /// Planned categories, in display order.
    pub categories: Vec<PlanCategory>,
}

impl MonthlyPlan {
    /// Returns true if the plan has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Reconciliation status of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    /// Within budget (expense) or target reached (income).
    Ok,
    /// Income between 80% and 100% of target.
    Warning,
    /// Over budget (expense) or below 80% of target (income).
    Exceeded,
}

/// Planned versus actual amounts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Category name.
    pub name: String,
    /// Income or expense.
    pub flow: Flow,
    /// Planned amount.
    pub planned_amount: Decimal,
    /// Actual amount from transactions.
    pub actual_amount: Decimal,
    /// `actual / planned * 100`, or zero when nothing was planned. Not rounded.
    pub percent_of_plan: Decimal,
    /// Status classification.
    pub status: ComparisonStatus,
}
