//! Calendar month keys.
//!
//! Every transaction, plan and closing is scoped to one calendar month,
//! written `YYYY-MM` on the wire.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Error parsing or building a month key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    /// The text is not shaped like `YYYY-MM`.
    #[error("Invalid month key '{0}', expected YYYY-MM")]
    Malformed(String),

    /// The month number is outside 1..=12.
    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),
}

/// A calendar month (`YYYY-MM`).
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key.
    ///
    /// # Errors
    ///
    /// Returns `MonthKeyError::MonthOutOfRange` if `month` is not in 1..=12.
    pub const fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if month == 0 || month > 12 {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the current month (UTC).
    #[must_use]
    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1..=12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Moves `delta` months forward (negative moves backward).
    ///
    /// The year saturates at the bounds of `i32`.
    #[must_use]
    pub fn shift(&self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12))
            .unwrap_or(if index < 0 { i32::MIN } else { i32::MAX });
        Self {
            year,
            // rem_euclid(12) is always in 0..12
            month: u32::try_from(index.rem_euclid(12)).unwrap_or(0) + 1,
        }
    }

    /// The month before this one.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    /// The `count` consecutive months ending at `self`, oldest first.
    #[must_use]
    pub fn months_ending_at(&self, count: u32) -> Vec<Self> {
        (0..count)
            .rev()
            .map(|back| self.shift(-back.cast_signed()))
            .collect()
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Short display label, e.g. `Mar/26`.
    #[must_use]
    pub fn short_label(&self) -> String {
        format!(
            "{}/{:02}",
            Self::month_abbreviation(self.month),
            self.year.rem_euclid(100)
        )
    }

    /// Three-letter English abbreviation for a month number (1..=12).
    #[must_use]
    pub fn month_abbreviation(month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        MONTH_ABBREVIATIONS[index]
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthKeyError::Malformed(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;

        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}
