//! Common types used across the application.

pub mod amount;
pub mod id;
pub mod month;

pub use amount::{percentage, round_half_up, saturating_sum};
pub use id::*;
pub use month::{MonthKey, MonthKeyError};
