use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionKind, YearMonth};

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBucket {
    pub month: YearMonth,
    pub income_total: Decimal,
    pub expense_total: Decimal,
}

impl MonthlyBucket {
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            income_total: Decimal::ZERO,
            expense_total: Decimal::ZERO,
        }
    }

    pub fn net(&self) -> Decimal {
        self.income_total - self.expense_total
    }
}

pub struct TimeSeriesService;

impl TimeSeriesService {
    /// Builds `window_months` consecutive buckets, oldest first, ending with
    /// the month containing `as_of`.
    ///
    /// Transactions are matched to buckets by year and month only, so any
    /// date inside `as_of`'s month counts, even one after `as_of` itself.
    /// Transactions outside the window are ignored.
    pub fn monthly_series(
        transactions: &[Transaction],
        window_months: u32,
        as_of: NaiveDate,
    ) -> Vec<MonthlyBucket> {
        if window_months == 0 {
            return Vec::new();
        }
        let (first, span) = window_bounds(window_months, as_of);

        let mut buckets: Vec<MonthlyBucket> = (0..span)
            .map(|offset| MonthlyBucket::empty(first.shift(offset)))
            .collect();
        let positions: HashMap<YearMonth, usize> = buckets
            .iter()
            .enumerate()
            .map(|(idx, bucket)| (bucket.month, idx))
            .collect();

        let mut dropped = 0usize;
        for txn in transactions {
            let Some(&idx) = positions.get(&YearMonth::from_date(txn.date)) else {
                dropped += 1;
                continue;
            };
            let bucket = &mut buckets[idx];
            match txn.kind {
                TransactionKind::Income => bucket.income_total += txn.amount,
                TransactionKind::Expense => bucket.expense_total += txn.amount,
            }
        }

        let last = first.shift(span - 1);
        tracing::debug!(
            window_months,
            from = %first,
            to = %last,
            dropped,
            "built monthly series"
        );
        buckets
    }
}

/// Oldest month of a non-empty window and its length. Windows longer than
/// `i32::MAX` months are cut to that length.
fn window_bounds(window_months: u32, as_of: NaiveDate) -> (YearMonth, i32) {
    let span = i32::try_from(window_months).unwrap_or_else(|_| {
        tracing::warn!(window_months, "window too long, truncating to i32::MAX months");
        i32::MAX
    });
    (YearMonth::from_date(as_of).shift(1 - span), span)
}
