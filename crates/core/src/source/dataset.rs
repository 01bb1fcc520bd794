//! Raw dataset documents.

use serde::Deserialize;

use crate::closing::MonthClosing;
use crate::planning::PlanRecord;
use crate::transaction::TransactionRecord;

/// A bundle of stored documents, as exported from a document store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Transaction documents.
    #[serde(alias = "transacoes")]
    pub transactions: Vec<TransactionRecord>,
    /// Plan documents.
    #[serde(alias = "planejamentos")]
    pub plans: Vec<PlanRecord>,
    /// Closing documents.
    #[serde(alias = "fechamentos")]
    pub closings: Vec<MonthClosing>,
}
