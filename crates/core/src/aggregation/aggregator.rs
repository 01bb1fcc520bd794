//! Category aggregator.

use std::collections::BTreeMap;

use budgetwise_shared::types::saturating_sum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::{Flow, Transaction};

/// Summed amount per category name.
pub type CategoryTotals = BTreeMap<String, Decimal>;

/// Category totals split by flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTotals {
    /// Expense totals by category.
    pub expense: CategoryTotals,
    /// Income totals by category.
    pub income: CategoryTotals,
}

impl FlowTotals {
    /// Totals for one flow.
    #[must_use]
    pub const fn for_flow(&self, flow: Flow) -> &CategoryTotals {
        match flow {
            Flow::Income => &self.income,
            Flow::Expense => &self.expense,
        }
    }

    /// Actual amount for a category, zero if it never appeared.
    #[must_use]
    pub fn actual(&self, flow: Flow, category: &str) -> Decimal {
        self.for_flow(flow)
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all income categories.
    #[must_use]
    pub fn total_income(&self) -> Decimal {
        saturating_sum(self.income.values().copied())
    }

    /// Sum of all expense categories.
    #[must_use]
    pub fn total_expense(&self) -> Decimal {
        saturating_sum(self.expense.values().copied())
    }
}

/// Reduces transactions into per-category sums.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Sums transactions by category, separately for each flow.
    ///
    /// Every category present in the input gets a key, even when its
    /// amounts sum to zero.
    #[must_use]
    pub fn aggregate(transactions: &[Transaction]) -> FlowTotals {
        let mut totals = FlowTotals::default();

        for tx in transactions {
            let bucket = match tx.flow {
                Flow::Income => &mut totals.income,
                Flow::Expense => &mut totals.expense,
            };
            let total = bucket.entry(tx.category.clone()).or_insert(Decimal::ZERO);
            *total = total.saturating_add(tx.amount);
        }

        totals
    }

    /// Sums expense transactions by category, ignoring income.
    #[must_use]
    pub fn aggregate_expenses<'a, I>(transactions: I) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = CategoryTotals::new();

        for tx in transactions.into_iter().filter(|tx| tx.is_expense()) {
            let total = totals.entry(tx.category.clone()).or_insert(Decimal::ZERO);
            *total = total.saturating_add(tx.amount);
        }

        totals
    }
}
