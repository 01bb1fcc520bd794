//! Transaction error types.

use budgetwise_shared::AppError;
use budgetwise_shared::types::MonthKeyError;
use thiserror::Error;

/// Errors raised while normalizing raw transaction records.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Amount is not a number.
    #[error("Invalid amount for '{field}': {value}")]
    InvalidAmount {
        /// Field or category the amount belongs to.
        field: String,
        /// Raw value as received.
        value: String,
    },

    /// Amount cannot be negative.
    #[error("Amount cannot be negative for '{0}'")]
    NegativeAmount(String),

    /// Month key is malformed.
    #[error(transparent)]
    InvalidMonthKey(#[from] MonthKeyError),

    /// Transaction date is malformed.
    #[error("Invalid transaction date: {0}")]
    InvalidDate(String),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        Self::Validation(err.to_string())
    }
}
