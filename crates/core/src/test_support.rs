//! Fixtures shared by the unit and property tests.

use std::collections::BTreeMap;
use std::str::FromStr;

use budgetwise_shared::types::{MonthKey, TransactionId, UserId};
use rust_decimal::Decimal;

use crate::transaction::{Flow, Transaction};

pub fn month(key: &str) -> MonthKey {
    MonthKey::from_str(key).unwrap()
}

pub fn tx(category: &str, flow: Flow, amount: Decimal, month_key: &str) -> Transaction {
    let month = month(month_key);
    Transaction {
        id: TransactionId::new(),
        user_id: UserId::from_uuid(uuid::Uuid::nil()),
        date: month.first_day(),
        description: format!("{category} {month_key}"),
        category: category.to_string(),
        flow,
        amount,
        month,
    }
}

pub fn expense(category: &str, amount: Decimal, month_key: &str) -> Transaction {
    tx(category, Flow::Expense, amount, month_key)
}

pub fn income(category: &str, amount: Decimal, month_key: &str) -> Transaction {
    tx(category, Flow::Income, amount, month_key)
}

pub fn by_month(transactions: Vec<Transaction>) -> BTreeMap<MonthKey, Vec<Transaction>> {
    let mut grouped: BTreeMap<MonthKey, Vec<Transaction>> = BTreeMap::new();
    for tx in transactions {
        grouped.entry(tx.month).or_default().push(tx);
    }
    grouped
}
