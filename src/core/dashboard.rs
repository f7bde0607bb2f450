use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::services::{
    CategoryService, CategoryTotal, MonthlyBucket, RecurringService, Summary, SummaryService,
    TimeSeriesService, TransactionService, ValidationService,
};
use crate::core::time::Clock;
use crate::domain::{LeisurePlan, RecurringExpense, Snapshot, Transaction};
use crate::errors::Result;

/// Everything the dashboard screen renders, computed from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub as_of: NaiveDate,
    pub summary: Summary,
    pub leisure: LeisurePlan,
    pub monthly_series: Vec<MonthlyBucket>,
    pub top_categories: Vec<CategoryTotal>,
    pub upcoming: Vec<RecurringExpense>,
    pub recent_transactions: Vec<Transaction>,
}

pub struct Dashboard;

impl Dashboard {
    /// Validates `snapshot` and runs every computation against the clock's
    /// current date.
    pub fn build(
        snapshot: &Snapshot,
        config: &EngineConfig,
        clock: &dyn Clock,
    ) -> Result<DashboardView> {
        Self::build_as_of(snapshot, config, clock.today())
    }

    pub fn build_as_of(
        snapshot: &Snapshot,
        config: &EngineConfig,
        as_of: NaiveDate,
    ) -> Result<DashboardView> {
        ValidationService::validate_snapshot(snapshot)?;
        if snapshot.is_empty() {
            tracing::debug!(%as_of, "empty snapshot, every figure will be zero");
        }
        let budget = snapshot.budget.as_ref();
        let lookup = snapshot.category_lookup();

        let view = DashboardView {
            as_of,
            summary: SummaryService::compute(
                &snapshot.transactions,
                &snapshot.recurring_expenses,
                budget,
            ),
            leisure: SummaryService::leisure_plan(budget),
            monthly_series: TimeSeriesService::monthly_series(
                &snapshot.transactions,
                config.window_months,
                as_of,
            ),
            top_categories: CategoryService::top_categories(
                &snapshot.transactions,
                &lookup,
                config.window_days,
                as_of,
                config.top_categories,
            ),
            upcoming: RecurringService::upcoming(
                &snapshot.recurring_expenses,
                as_of.day(),
                config.upcoming_limit,
            ),
            recent_transactions: TransactionService::recent(
                &snapshot.transactions,
                config.recent_limit,
            ),
        };
        tracing::info!(%as_of, transactions = snapshot.transactions.len(), "dashboard built");
        Ok(view)
    }
}
