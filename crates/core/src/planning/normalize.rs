//! Conversion of raw plan documents into typed monthly plans.
//!
//! Stored plans carry their categories either as an ordered array or as an
//! object keyed by flow. Both shapes collapse into one ordered
//! `Vec<PlanCategory>` here, so nothing downstream branches on the shape.

use std::collections::HashSet;
use std::str::FromStr;

use budgetwise_shared::types::{MonthKey, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::error::PlanError;
use super::types::{MonthlyPlan, PlanCategory};
use crate::transaction::Flow;
use crate::transaction::normalize::{AmountIssue, read_amount};

/// A plan category as stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCategoryRecord {
    /// Category name.
    #[serde(alias = "nome")]
    pub name: String,
    /// Planned amount as a JSON number or numeric string; missing means zero.
    #[serde(default, alias = "valorPlanejado")]
    pub planned_amount: Value,
    /// Flow label; missing means expense.
    #[serde(default, alias = "tipo")]
    pub flow: Option<String>,
}

/// Categories grouped under their flow.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesByFlow {
    /// Expense categories.
    #[serde(default, alias = "saida")]
    pub expense: Vec<PlanCategoryRecord>,
    /// Income categories.
    #[serde(default, alias = "entrada")]
    pub income: Vec<PlanCategoryRecord>,
}

/// The two stored shapes of a plan's categories.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlanCategoriesShape {
    /// Ordered array; each entry carries its own flow.
    List(Vec<PlanCategoryRecord>),
    /// Object keyed by flow; the key decides the flow.
    ByFlow(CategoriesByFlow),
}

impl Default for PlanCategoriesShape {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// A plan document as stored by the plan store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    /// Plan owner.
    pub user_id: UserId,
    /// Month key (`YYYY-MM`).
    #[serde(alias = "monthKey", alias = "mesReferencia")]
    pub month: String,
    /// Categories in either stored shape.
    #[serde(default, alias = "categorias")]
    pub categories: PlanCategoriesShape,
}

impl TryFrom<PlanRecord> for MonthlyPlan {
    type Error = PlanError;

    fn try_from(record: PlanRecord) -> Result<Self, Self::Error> {
        let month = MonthKey::from_str(&record.month)?;

        // Object form is flattened expense-first.
        let entries: Vec<(PlanCategoryRecord, Flow)> = match record.categories {
            PlanCategoriesShape::List(list) => list
                .into_iter()
                .map(|c| {
                    let flow = c.flow.as_deref().map_or(Flow::Expense, Flow::parse_lenient);
                    (c, flow)
                })
                .collect(),
            PlanCategoriesShape::ByFlow(grouped) => grouped
                .expense
                .into_iter()
                .map(|c| (c, Flow::Expense))
                .chain(grouped.income.into_iter().map(|c| (c, Flow::Income)))
                .collect(),
        };

        let mut seen = HashSet::with_capacity(entries.len());
        let mut categories = Vec::with_capacity(entries.len());

        for (entry, flow) in entries {
            let name = entry.name.trim().to_string();
            if name.is_empty() {
                return Err(PlanError::EmptyCategoryName);
            }
            if !seen.insert(name.clone()) {
                return Err(PlanError::DuplicateCategory(name));
            }

            let planned_amount = planned_amount(&name, &entry.planned_amount)?;
            categories.push(PlanCategory {
                name,
                planned_amount,
                flow,
            });
        }

        Ok(Self {
            user_id: record.user_id,
            month,
            categories,
        })
    }
}

fn planned_amount(category: &str, value: &Value) -> Result<Decimal, PlanError> {
    if value.is_null() {
        return Ok(Decimal::ZERO);
    }

    read_amount(value).map_err(|issue| match issue {
        AmountIssue::NotNumeric => PlanError::InvalidAmount {
            category: category.to_string(),
            value: value.to_string(),
        },
        AmountIssue::Negative => PlanError::NegativeAmount(category.to_string()),
    })
}
