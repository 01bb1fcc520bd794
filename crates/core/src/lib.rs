//! Core budgeting logic for Budgetwise.
//!
//! This crate contains the pure reconciliation and analytics logic with ZERO
//! web or storage dependencies. Data sources plug in through the traits in
//! [`source`].
//!
//! # Modules
//!
//! - `transaction` - Transactions, flows and record normalization
//! - `aggregation` - Per-category totals by flow
//! - `planning` - Monthly plans, planned-vs-actual comparison and chart data
//! - `indicators` - Savings rate, budget deviation and reserve days
//! - `analytics` - Expense trend, forecast and seasonality
//! - `closing` - Month status, balances and closing
//! - `source` - Data-source ports and the in-memory store
//! - `dashboard` - Orchestration of the dashboard views

pub mod aggregation;
pub mod analytics;
pub mod closing;
pub mod dashboard;
pub mod indicators;
pub mod planning;
pub mod source;
pub mod transaction;

#[cfg(test)]
mod test_support;
