//! In-memory data source.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use budgetwise_shared::types::{MonthKey, UserId};
use budgetwise_shared::{AppError, AppResult};

use super::dataset::Dataset;
use super::{ClosingLedger, PlanSource, TransactionSource};
use crate::closing::{ClosingError, MonthClosing};
use crate::planning::MonthlyPlan;
use crate::transaction::Transaction;

/// Thread-safe store holding every document in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    transactions: RwLock<Vec<Transaction>>,
    plans: RwLock<Vec<MonthlyPlan>>,
    closings: RwLock<Vec<MonthClosing>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already-typed documents.
    #[must_use]
    pub fn with_data(
        transactions: Vec<Transaction>,
        plans: Vec<MonthlyPlan>,
        closings: Vec<MonthClosing>,
    ) -> Self {
        Self {
            transactions: RwLock::new(transactions),
            plans: RwLock::new(plans),
            closings: RwLock::new(closings),
        }
    }

    /// Normalizes a raw dataset into a store.
    ///
    /// Fails on the first malformed document.
    pub fn from_dataset(dataset: Dataset) -> AppResult<Self> {
        let transactions = dataset
            .transactions
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let plans = dataset
            .plans
            .into_iter()
            .map(MonthlyPlan::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            transactions = transactions.len(),
            plans = plans.len(),
            closings = dataset.closings.len(),
            "loaded dataset"
        );

        Ok(Self::with_data(transactions, plans, dataset.closings))
    }
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::DataSource("in-memory store lock poisoned".to_string())
}

impl TransactionSource for InMemoryStore {
    fn transactions_for_month(
        &self,
        user_id: UserId,
        month: MonthKey,
    ) -> AppResult<Vec<Transaction>> {
        let transactions = self.transactions.read().map_err(poisoned)?;
        Ok(transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && tx.month == month)
            .cloned()
            .collect())
    }

    fn transactions_between(
        &self,
        user_id: UserId,
        from: MonthKey,
        to: MonthKey,
    ) -> AppResult<BTreeMap<MonthKey, Vec<Transaction>>> {
        let transactions = self.transactions.read().map_err(poisoned)?;
        let mut by_month: BTreeMap<MonthKey, Vec<Transaction>> = BTreeMap::new();

        for tx in transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && (from..=to).contains(&tx.month))
        {
            by_month.entry(tx.month).or_default().push(tx.clone());
        }

        Ok(by_month)
    }

    fn add_transaction(&self, transaction: Transaction) -> AppResult<()> {
        self.transactions
            .write()
            .map_err(poisoned)?
            .push(transaction);
        Ok(())
    }
}

impl PlanSource for InMemoryStore {
    fn plan_for_month(&self, user_id: UserId, month: MonthKey) -> AppResult<Option<MonthlyPlan>> {
        let plans = self.plans.read().map_err(poisoned)?;
        Ok(plans
            .iter()
            .find(|p| p.user_id == user_id && p.month == month)
            .cloned())
    }
}

impl ClosingLedger for InMemoryStore {
    fn closings(&self, user_id: UserId) -> AppResult<Vec<MonthClosing>> {
        let closings = self.closings.read().map_err(poisoned)?;
        Ok(closings
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    fn record_closing(&self, closing: MonthClosing) -> AppResult<()> {
        let mut closings = self.closings.write().map_err(poisoned)?;
        if closings
            .iter()
            .any(|c| c.user_id == closing.user_id && c.month == closing.month)
        {
            return Err(ClosingError::AlreadyClosed(closing.month).into());
        }
        closings.push(closing);
        Ok(())
    }
}
