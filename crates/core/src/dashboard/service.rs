//! Dashboard service implementation.

use std::sync::Arc;

use budgetwise_shared::types::{MonthKey, UserId};
use budgetwise_shared::{AnalyticsConfig, AppResult};
use chrono::{DateTime, Utc};

use super::types::{AnalyticsOverview, MonthOverview};
use crate::aggregation::CategoryAggregator;
use crate::analytics::{ForecastProjector, SeasonalityAnalyzer, TrendAggregator, TrendWindow};
use crate::closing::{MonthClosing, MonthLedger};
use crate::indicators::IndicatorCalculator;
use crate::planning::{ChartProjector, PlanComparator};
use crate::source::{ClosingLedger, PlanSource, TransactionSource};
use crate::transaction::Transaction;

/// Builds dashboard views from a data source.
pub struct DashboardService<S> {
    store: Arc<S>,
    config: AnalyticsConfig,
}

impl<S> DashboardService<S>
where
    S: TransactionSource + PlanSource + ClosingLedger,
{
    /// Create a new dashboard service.
    #[must_use]
    pub fn new(store: Arc<S>, config: AnalyticsConfig) -> Self {
        Self { store, config }
    }

    /// Builds the overview of `month`.
    ///
    /// A missing plan yields empty comparisons, not an error.
    pub fn month_overview(&self, user_id: UserId, month: MonthKey) -> AppResult<MonthOverview> {
        let closings = self.store.closings(user_id)?;
        let status = MonthLedger::status(&closings, month);

        let mut transactions = self.store.transactions_for_month(user_id, month)?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        let balance = MonthLedger::balance(&transactions, &status);
        let plan = self.store.plan_for_month(user_id, month)?;

        let totals = CategoryAggregator::aggregate(&transactions);
        let comparisons = PlanComparator::compare(plan.as_ref(), &totals);
        let chart = ChartProjector::project(&comparisons);

        let trailing = IndicatorCalculator::trailing_months(month);
        let from = trailing.first().copied().unwrap_or(month);
        let history = self.store.transactions_between(user_id, from, month)?;
        let prior_expense_total =
            IndicatorCalculator::trailing_expense_total(history.values().flatten(), month);

        let indicators =
            IndicatorCalculator::compute(&transactions, &comparisons, prior_expense_total);

        tracing::debug!(
            %month,
            transactions = transactions.len(),
            categories = comparisons.len(),
            closed = status.is_closed(),
            "built month overview"
        );

        Ok(MonthOverview {
            month,
            status,
            balance,
            total_income: totals.total_income(),
            total_expense: totals.total_expense(),
            transactions,
            has_plan: plan.is_some_and(|p| !p.is_empty()),
            comparisons,
            chart,
            indicators,
        })
    }

    /// Builds trend, forecast and seasonality ending at `now`.
    ///
    /// The trend/forecast pipeline and the seasonality pipeline run in
    /// parallel over the same history.
    pub fn analytics(
        &self,
        user_id: UserId,
        now: MonthKey,
        selected: Option<&str>,
    ) -> AppResult<AnalyticsOverview> {
        let window = TrendWindow::try_from(self.config.trend_window_months)?;
        let forecast_months = self.config.forecast_months;
        let years = self.config.seasonality_years;

        let history = self
            .store
            .transactions_between(user_id, self.history_start(window, now), now)?;

        let ((trend, forecast), seasonality) = rayon::join(
            || {
                let trend = TrendAggregator::build(&history, window, now, selected);
                let forecast = ForecastProjector::forecast(&trend, forecast_months);
                (trend, forecast)
            },
            || SeasonalityAnalyzer::analyze(&history, years, now),
        );

        tracing::debug!(
            %now,
            months = history.len(),
            categories = trend.categories.len(),
            highlighted = seasonality.highlighted.len(),
            "built analytics"
        );

        Ok(AnalyticsOverview {
            now,
            window,
            trend,
            forecast,
            seasonality,
        })
    }

    /// Closes `month` with its current balance.
    ///
    /// # Errors
    ///
    /// Fails with a conflict if the month is already closed.
    pub fn close_month(
        &self,
        user_id: UserId,
        month: MonthKey,
        closed_at: DateTime<Utc>,
    ) -> AppResult<MonthClosing> {
        let closings = self.store.closings(user_id)?;
        let status = MonthLedger::status(&closings, month);
        let transactions = self.store.transactions_for_month(user_id, month)?;
        let balance = MonthLedger::balance(&transactions, &status);

        let closing = MonthLedger::close(user_id, month, balance, &closings, closed_at)?;
        self.store.record_closing(closing.clone())?;

        Ok(closing)
    }

    /// Stores a transaction unless its month is closed.
    pub fn record_transaction(&self, transaction: Transaction) -> AppResult<()> {
        let closings = self.store.closings(transaction.user_id)?;
        let status = MonthLedger::status(&closings, transaction.month);
        MonthLedger::ensure_open(transaction.month, &status)?;

        self.store.add_transaction(transaction)
    }

    /// First month needed by both the trend window and the seasonality years.
    fn history_start(&self, window: TrendWindow, now: MonthKey) -> MonthKey {
        let trend_start = now.shift(1 - window.months().cast_signed());
        let years_back = self.config.seasonality_years.saturating_sub(1);
        let months_back = i32::try_from(years_back.saturating_mul(12)).unwrap_or(i32::MAX);
        let seasonality_start = now
            .shift(1 - now.month().cast_signed())
            .shift(months_back.saturating_neg());
        trend_start.min(seasonality_start)
    }
}
