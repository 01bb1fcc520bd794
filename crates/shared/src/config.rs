//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Trend windows the analytics panels offer, in months.
pub const SUPPORTED_TREND_WINDOWS: [u32; 3] = [3, 6, 12];

/// Longest forecast horizon, in months.
pub const MAX_FORECAST_MONTHS: u32 = 24;

/// Most calendar years a seasonality profile may span.
pub const MAX_SEASONALITY_YEARS: u32 = 10;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analytics configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics window configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Trend window in months (3, 6 or 12).
    #[serde(default = "default_trend_window_months")]
    pub trend_window_months: u32,
    /// Number of future months to forecast.
    #[serde(default = "default_forecast_months")]
    pub forecast_months: u32,
    /// Number of trailing calendar years used for seasonality.
    #[serde(default = "default_seasonality_years")]
    pub seasonality_years: u32,
}

fn default_trend_window_months() -> u32 {
    6
}

fn default_forecast_months() -> u32 {
    3
}

fn default_seasonality_years() -> u32 {
    2
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_window_months: default_trend_window_months(),
            forecast_months: default_forecast_months(),
            seasonality_years: default_seasonality_years(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON-formatted log lines.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "budgetwise=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `BUDGETWISE__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if configuration cannot be loaded or
    /// fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("BUDGETWISE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks value ranges the deserializer cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` describing the first invalid value.
    pub fn validate(&self) -> AppResult<()> {
        let analytics = &self.analytics;

        if !SUPPORTED_TREND_WINDOWS.contains(&analytics.trend_window_months) {
            return Err(AppError::Configuration(format!(
                "trend_window_months must be one of {SUPPORTED_TREND_WINDOWS:?}, got {}",
                analytics.trend_window_months
            )));
        }

        if !(1..=MAX_FORECAST_MONTHS).contains(&analytics.forecast_months) {
            return Err(AppError::Configuration(format!(
                "forecast_months must be between 1 and {MAX_FORECAST_MONTHS}, got {}",
                analytics.forecast_months
            )));
        }

        if !(1..=MAX_SEASONALITY_YEARS).contains(&analytics.seasonality_years) {
            return Err(AppError::Configuration(format!(
                "seasonality_years must be between 1 and {MAX_SEASONALITY_YEARS}, got {}",
                analytics.seasonality_years
            )));
        }

        Ok(())
    }
}
