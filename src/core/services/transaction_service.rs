//! Read-side queries over transactions: the dashboard's recent list and the
//! filterable transaction table.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSortField {
    #[default]
    Date,
    Description,
    Kind,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSort {
    pub field: TransactionSortField,
    pub direction: SortDirection,
}

impl TransactionSort {
    pub fn new(field: TransactionSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for TransactionSort {
    /// Newest first.
    fn default() -> Self {
        Self::new(TransactionSortField::Date, SortDirection::Desc)
    }
}

/// Criteria for narrowing the transaction list. Unset fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub category_id: Option<Uuid>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty()
                && !txn
                    .description
                    .to_lowercase()
                    .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if self.date_from.is_some_and(|from| txn.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| txn.date > to) {
            return false;
        }
        if self.kind.is_some_and(|kind| txn.kind != kind) {
            return false;
        }
        if self.category_id.is_some() && txn.category_id != self.category_id {
            return false;
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self == &TransactionFilter::default()
    }
}

pub struct TransactionService;

impl TransactionService {
    /// The `limit` most recent transactions, newest first. Transactions on
    /// the same date keep their input order.
    pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.into_iter().take(limit).cloned().collect()
    }

    /// Applies `filter` then a stable sort.
    pub fn query(
        transactions: &[Transaction],
        filter: &TransactionFilter,
        sort: TransactionSort,
    ) -> Vec<Transaction> {
        let mut matched: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            let ordering = compare_by(sort.field, a, b);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        tracing::debug!(
            total = transactions.len(),
            matched = matched.len(),
            "queried transactions"
        );
        matched
    }
}

fn compare_by(field: TransactionSortField, a: &Transaction, b: &Transaction) -> Ordering {
    match field {
        TransactionSortField::Date => a.date.cmp(&b.date),
        TransactionSortField::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        TransactionSortField::Kind => a.kind.cmp(&b.kind),
        TransactionSortField::Amount => a.amount.cmp(&b.amount),
    }
}
