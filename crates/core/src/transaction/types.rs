//! Transaction data types.

use budgetwise_shared::types::{MonthKey, TransactionId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category assigned to transactions recorded without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Direction of a monetary transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Money coming in.
    #[serde(alias = "entrada")]
    Income,
    /// Money going out.
    #[default]
    #[serde(alias = "saida")]
    Expense,
}

impl Flow {
    /// Parses a flow label, treating anything unrecognized as an expense.
    ///
    /// Unrecognized labels are logged at warn level.
    #[must_use]
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "income" | "entrada" => Self::Income,
            "expense" | "saida" => Self::Expense,
            other => {
                tracing::warn!(flow = other, "unknown flow label, treating as expense");
                Self::Expense
            }
        }
    }

    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded income or expense.
///
/// Owned by the external transaction store; the engine only reads snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owner of the transaction.
    pub user_id: UserId,
    /// Date the transaction happened.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Income or expense.
    pub flow: Flow,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Month the transaction is booked against.
    pub month: MonthKey,
}

impl Transaction {
    /// Returns true for expense transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.flow == Flow::Expense
    }

    /// Amount with sign applied: positive for income, negative for expenses.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.flow {
            Flow::Income => self.amount,
            Flow::Expense => -self.amount,
        }
    }
}
