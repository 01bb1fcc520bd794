//! Month performance indicators: savings rate, budget deviation, reserve days.

pub mod calculator;
pub mod types;

#[cfg(test)]
mod tests;

pub use calculator::IndicatorCalculator;
pub use types::PerformanceIndicators;
