//! Month status and closing.
//!
//! A month stays open until the user closes it, freezing its final
//! balance. The next month opens with that balance.

pub mod error;
pub mod ledger;
pub mod types;

pub use error::ClosingError;
pub use ledger::MonthLedger;
pub use types::{MonthClosing, MonthStatus};
