//! Closing types.

use budgetwise_shared::types::{MonthKey, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The frozen result of a closed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthClosing {
    /// Owner of the month.
    pub user_id: UserId,
    /// Closed month.
    #[serde(alias = "mesReferencia")]
    pub month: MonthKey,
    /// Balance at the moment of closing.
    #[serde(alias = "saldoFinal")]
    pub final_balance: Decimal,
    /// When the month was closed.
    #[serde(alias = "dataFechamento")]
    pub closed_at: DateTime<Utc>,
}

/// Whether a month is still accepting transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MonthStatus {
    /// Open; the balance builds on the previous month's closing.
    Open {
        /// Carried-over balance.
        initial_balance: Decimal,
    },
    /// Closed with a frozen balance.
    Closed {
        /// Balance recorded at closing.
        final_balance: Decimal,
        /// When the month was closed.
        closed_at: DateTime<Utc>,
    },
}

impl MonthStatus {
    /// Returns true if the month has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }
}
