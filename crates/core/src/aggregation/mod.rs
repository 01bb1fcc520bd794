//! Per-category aggregation of transactions.

pub mod aggregator;


pub use aggregator::{CategoryAggregator, CategoryTotals, FlowTotals};
