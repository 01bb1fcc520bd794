//! Conversion of raw transaction documents into typed transactions.
//!
//! Documents arrive from the transaction store with loosely typed fields:
//! amounts may be JSON numbers or numeric strings, categories may be missing,
//! and flows may use legacy labels. Everything is validated here so the
//! aggregation code never sees a malformed value.

use std::str::FromStr;

use budgetwise_shared::types::{MonthKey, TransactionId, UserId};
use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::error::TransactionError;
use super::types::{Flow, Transaction, UNCATEGORIZED};

/// A transaction document as stored by the transaction store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Document ID, generated when absent.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// Owner of the transaction.
    pub user_id: UserId,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp; defaults to the first day of the month.
    #[serde(default, alias = "data")]
    pub date: Option<String>,
    /// Free-text description.
    #[serde(default, alias = "descricao")]
    pub description: String,
    /// Category name.
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    /// Flow label (`income`/`expense` or a legacy alias).
    #[serde(default, alias = "tipo")]
    pub flow: Option<String>,
    /// Amount as a JSON number or numeric string.
    #[serde(alias = "valor")]
    pub amount: Value,
    /// Month key (`YYYY-MM`).
    #[serde(alias = "monthKey", alias = "mesReferencia")]
    pub month: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let month = MonthKey::from_str(&record.month)?;

        let category = record
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        let amount = parse_amount(&category, &record.amount)?;

        let flow = record
            .flow
            .as_deref()
            .map_or(Flow::Expense, Flow::parse_lenient);

        let date = match record.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => month.first_day(),
        };

        Ok(Self {
            id: record.id.unwrap_or_default(),
            user_id: record.user_id,
            date,
            description: record.description,
            category,
            flow,
            amount,
            month,
        })
    }
}

/// Why a raw amount was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountIssue {
    /// Not a finite number.
    NotNumeric,
    /// Below zero.
    Negative,
}

/// Reads a non-negative decimal from a JSON number or numeric string.
pub(crate) fn read_amount(value: &Value) -> Result<Decimal, AmountIssue> {
    let amount = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
    .ok_or(AmountIssue::NotNumeric)?;

    if amount < Decimal::ZERO {
        return Err(AmountIssue::Negative);
    }

    Ok(amount)
}

/// Parses a non-negative decimal amount from a JSON number or numeric string.
///
/// `field` names the amount in error messages.
///
/// # Errors
///
/// Returns `TransactionError::InvalidAmount` for anything that is not a
/// finite number, and `TransactionError::NegativeAmount` for values below zero.
pub fn parse_amount(field: &str, value: &Value) -> Result<Decimal, TransactionError> {
    read_amount(value).map_err(|issue| match issue {
        AmountIssue::NotNumeric => TransactionError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        },
        AmountIssue::Negative => TransactionError::NegativeAmount(field.to_string()),
    })
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn parse_date(raw: &str) -> Result<NaiveDate, TransactionError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| TransactionError::InvalidDate(raw.to_string()))
}
