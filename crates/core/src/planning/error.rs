//! Plan error types.

use budgetwise_shared::AppError;
use budgetwise_shared::types::MonthKeyError;
use thiserror::Error;

/// Plan-related errors.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Planned amount is not a number.
    #[error("Invalid planned amount for category '{category}': {value}")]
    InvalidAmount {
        /// Category name.
        category: String,
        /// Raw value as received.
        value: String,
    },

    /// Planned amount cannot be negative.
    #[error("Planned amount cannot be negative for category '{0}'")]
    NegativeAmount(String),

    /// Category name appears twice in the same plan.
    #[error("Category '{0}' appears more than once in the plan")]
    DuplicateCategory(String),

    /// Category name is blank.
    #[error("Plan category name cannot be empty")]
    EmptyCategoryName,

    /// Month key is malformed.
    #[error(transparent)]
    InvalidMonthKey(#[from] MonthKeyError),
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        Self::Validation(err.to_string())
    }
}
