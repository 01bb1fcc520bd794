//! Analytics error types.

use budgetwise_shared::AppError;
use thiserror::Error;

/// Analytics-related errors.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Trend window is not one of the offered sizes.
    #[error("Trend window must be 3, 6 or 12 months, got {0}")]
    InvalidWindow(u32),
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        Self::Validation(err.to_string())
    }
}
