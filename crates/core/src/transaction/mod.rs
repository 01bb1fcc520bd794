//! Transaction records and boundary normalization.

pub mod error;
pub mod normalize;
pub mod types;

pub use error::TransactionError;
pub use normalize::{TransactionRecord, parse_amount};
pub use types::{Flow, Transaction, UNCATEGORIZED};
