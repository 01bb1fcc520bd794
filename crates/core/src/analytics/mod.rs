//! Historical spending analytics.
//!
//! - `trend` - Monthly expense series per category over a sliding window
//! - `forecast` - Linear-tendency projection of a trend series
//! - `seasonality` - Calendar-month spending patterns across years

pub mod error;
pub mod forecast;
pub mod seasonality;
pub mod trend;
pub mod types;


pub use error::AnalyticsError;
pub use forecast::ForecastProjector;
pub use seasonality::SeasonalityAnalyzer;
pub use trend::TrendAggregator;
pub use types::{
    CategorySeasonality, CategoryStatistics, ForecastPoint, SeasonalMonth, SeasonalityProfile,
    SeasonalityReport, TrendPoint, TrendSeries, TrendWindow,
};
