//! Month ledger rules.

use budgetwise_shared::types::{MonthKey, UserId, saturating_sum};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::error::ClosingError;
use super::types::{MonthClosing, MonthStatus};
use crate::transaction::Transaction;

/// Derives month status and balances from a user's closings.
pub struct MonthLedger;

impl MonthLedger {
    /// Status of `month` given the user's existing closings.
    ///
    /// An open month starts from the previous month's final balance, or
    /// zero when the previous month was never closed.
    #[must_use]
    pub fn status(closings: &[MonthClosing], month: MonthKey) -> MonthStatus {
        if let Some(closing) = Self::find(closings, month) {
            return MonthStatus::Closed {
                final_balance: closing.final_balance,
                closed_at: closing.closed_at,
            };
        }

        let initial_balance =
            Self::find(closings, month.previous()).map_or(Decimal::ZERO, |c| c.final_balance);

        MonthStatus::Open { initial_balance }
    }

    /// Current balance of a month.
    ///
    /// Closed months report their frozen balance. Open months add income
    /// and subtract expenses from the initial balance.
    #[must_use]
    pub fn balance(transactions: &[Transaction], status: &MonthStatus) -> Decimal {
        match status {
            MonthStatus::Closed { final_balance, .. } => *final_balance,
            MonthStatus::Open { initial_balance } => {
                initial_balance.saturating_add(saturating_sum(
                    transactions.iter().map(Transaction::signed_amount),
                ))
            }
        }
    }

    /// Records the closing of `month` with `final_balance`.
    ///
    /// # Errors
    ///
    /// Returns `ClosingError::AlreadyClosed` if the month has a closing.
    pub fn close(
        user_id: UserId,
        month: MonthKey,
        final_balance: Decimal,
        closings: &[MonthClosing],
        closed_at: DateTime<Utc>,
    ) -> Result<MonthClosing, ClosingError> {
        if Self::find(closings, month).is_some() {
            return Err(ClosingError::AlreadyClosed(month));
        }

        tracing::info!(%month, %final_balance, "closing month");

        Ok(MonthClosing {
            user_id,
            month,
            final_balance,
            closed_at,
        })
    }

    /// Rejects writes to a closed month.
    ///
    /// # Errors
    ///
    /// Returns `ClosingError::MonthClosed` if `status` is closed.
    pub fn ensure_open(month: MonthKey, status: &MonthStatus) -> Result<(), ClosingError> {
        if status.is_closed() {
            return Err(ClosingError::MonthClosed(month));
        }
        Ok(())
    }

    fn find(closings: &[MonthClosing], month: MonthKey) -> Option<&MonthClosing> {
        closings.iter().find(|c| c.month == month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{expense, income, month};
    use budgetwise_shared::AppError;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn closed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 31, 23, 0, 0).unwrap()
    }

    fn closing(key: &str, final_balance: Decimal) -> MonthClosing {
        MonthClosing {
            user_id: UserId::from_uuid(uuid::Uuid::nil()),
            month: month(key),
            final_balance,
            closed_at: closed_at(),
        }
    }

    #[test]
    fn test_closed_month_reports_final_balance() {
        let closings = vec![closing("2026-03", dec!(1250))];
        let status = MonthLedger::status(&closings, month("2026-03"));

        assert!(status.is_closed());
        let transactions = vec![income("Salary", dec!(9999), "2026-03")];
        assert_eq!(MonthLedger::balance(&transactions, &status), dec!(1250));
    }

    #[test]
    fn test_open_month_carries_previous_closing() {
        let closings = vec![closing("2025-12", dec!(700))];
        let status = MonthLedger::status(&closings, month("2026-01"));

        assert_eq!(
            status,
            MonthStatus::Open {
                initial_balance: dec!(700)
            }
        );

        let transactions = vec![
            income("Salary", dec!(5000), "2026-01"),
            expense("Rent", dec!(2000), "2026-01"),
        ];
        assert_eq!(MonthLedger::balance(&transactions, &status), dec!(3700));
    }

    #[test]
    fn test_open_month_without_previous_closing_starts_at_zero() {
        let closings = vec![closing("2025-10", dec!(700))];
        let status = MonthLedger::status(&closings, month("2026-01"));

        assert_eq!(
            status,
            MonthStatus::Open {
                initial_balance: Decimal::ZERO
            }
        );
        let transactions = vec![expense("Rent", dec!(2000), "2026-01")];
        assert_eq!(MonthLedger::balance(&transactions, &status), dec!(-2000));
    }

    #[test]
    fn test_close_records_balance() {
        let user = UserId::new();
        let closing =
            MonthLedger::close(user, month("2026-03"), dec!(1800), &[], closed_at()).unwrap();

        assert_eq!(closing.user_id, user);
        assert_eq!(closing.month, month("2026-03"));
        assert_eq!(closing.final_balance, dec!(1800));
    }

    #[test]
    fn test_close_twice_is_a_conflict() {
        let closings = vec![closing("2026-03", dec!(1250))];
        let err = MonthLedger::close(UserId::new(), month("2026-03"), dec!(1), &closings, closed_at())
            .unwrap_err();

        assert!(matches!(err, ClosingError::AlreadyClosed(m) if m == month("2026-03")));
        assert!(matches!(AppError::from(err), AppError::Conflict(_)));
    }

    #[test]
    fn test_closed_month_rejects_writes() {
        let closings = vec![closing("2026-03", dec!(1250))];
        let closed = MonthLedger::status(&closings, month("2026-03"));
        let open = MonthLedger::status(&closings, month("2026-04"));

        assert!(matches!(
            MonthLedger::ensure_open(month("2026-03"), &closed),
            Err(ClosingError::MonthClosed(_))
        ));
        assert!(MonthLedger::ensure_open(month("2026-04"), &open).is_ok());
    }

    #[test]
    fn test_closing_accepts_stored_field_names() {
        let closing: MonthClosing = serde_json::from_value(serde_json::json!({
            "userId": "0190a0c4-5f4e-7c3b-9a3e-1f2b3c4d5e6f",
            "mesReferencia": "2026-02",
            "saldoFinal": "812.40",
            "dataFechamento": "2026-02-28T22:00:00Z"
        }))
        .unwrap();

        assert_eq!(closing.month, month("2026-02"));
        assert_eq!(closing.final_balance, dec!(812.40));
    }
}
