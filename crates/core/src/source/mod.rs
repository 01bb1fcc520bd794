//! Data-source ports.
//!
//! The dashboard reads transactions, plans and closings through these
//! traits. Storage backends implement them; [`InMemoryStore`] is the
//! built-in implementation used by tests and the reporter binary.

pub mod dataset;
pub mod memory;

use std::collections::BTreeMap;

use budgetwise_shared::AppResult;
use budgetwise_shared::types::{MonthKey, UserId};

use crate::closing::MonthClosing;
use crate::planning::MonthlyPlan;
use crate::transaction::Transaction;

pub use dataset::Dataset;
pub use memory::InMemoryStore;

/// Read and append access to a user's transactions.
pub trait TransactionSource: Send + Sync {
    /// Transactions booked in `month`.
    fn transactions_for_month(
        &self,
        user_id: UserId,
        month: MonthKey,
    ) -> AppResult<Vec<Transaction>>;

    /// Transactions booked in `from..=to`, bucketed by month.
    ///
    /// Months without transactions may be absent from the map.
    fn transactions_between(
        &self,
        user_id: UserId,
        from: MonthKey,
        to: MonthKey,
    ) -> AppResult<BTreeMap<MonthKey, Vec<Transaction>>>;

    /// Stores a new transaction.
    fn add_transaction(&self, transaction: Transaction) -> AppResult<()>;
}

/// Read access to monthly plans.
pub trait PlanSource: Send + Sync {
    /// The plan for `month`, if the user made one.
    fn plan_for_month(&self, user_id: UserId, month: MonthKey) -> AppResult<Option<MonthlyPlan>>;
}

/// Persistence of month closings.
pub trait ClosingLedger: Send + Sync {
    /// Every closing recorded for the user.
    fn closings(&self, user_id: UserId) -> AppResult<Vec<MonthClosing>>;

    /// Stores a new closing.
    fn record_closing(&self, closing: MonthClosing) -> AppResult<()>;
}
