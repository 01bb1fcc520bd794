//! Closing error types.

use budgetwise_shared::AppError;
use budgetwise_shared::types::MonthKey;
use thiserror::Error;

/// Month-closing errors.
#[derive(Debug, Error)]
pub enum ClosingError {
    /// The month already has a closing.
    #[error("Month {0} is already closed")]
    AlreadyClosed(MonthKey),

    /// The month is closed and accepts no new transactions.
    #[error("Month {0} is closed for new transactions")]
    MonthClosed(MonthKey),
}

impl From<ClosingError> for AppError {
    fn from(err: ClosingError) -> Self {
        match err {
            ClosingError::AlreadyClosed(_) => Self::Conflict(err.to_string()),
            ClosingError::MonthClosed(_) => Self::BusinessRule(err.to_string()),
        }
    }
}
