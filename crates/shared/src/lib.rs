//! Shared types, errors, and configuration for Budgetwise.
//!
//! This crate provides common types used across all other crates:
//! - Calendar month keys (`YYYY-MM`)
//! - Decimal rounding and ratio helpers
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyticsConfig, AppConfig, LoggingConfig};
pub use error::{AppError, AppResult};
