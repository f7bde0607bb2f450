//! Ordering and totals for recurring monthly expenses.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{total_amount, RecurringExpense};

use super::SortDirection;

/// Which entries the management list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveFilter {
    All,
    #[default]
    Active,
    Inactive,
}

impl ActiveFilter {
    fn admits(self, expense: &RecurringExpense) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Active => expense.active,
            ActiveFilter::Inactive => !expense.active,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringSortField {
    #[default]
    DueDay,
    Amount,
    Description,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringSort {
    pub field: RecurringSortField,
    pub direction: SortDirection,
}

impl RecurringSort {
    pub fn new(field: RecurringSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

pub struct RecurringService;

impl RecurringService {
    /// Active expenses ordered by how soon they fall due after `current_day`.
    ///
    /// Entries with `due_day > current_day` come first, ascending; then the
    /// ones already due this month (their next occurrence is next month),
    /// also ascending. Equal due days keep their input order. At most `k`
    /// entries are returned.
    pub fn upcoming(
        recurring_expenses: &[RecurringExpense],
        current_day: u32,
        k: usize,
    ) -> Vec<RecurringExpense> {
        let mut active: Vec<&RecurringExpense> =
            recurring_expenses.iter().filter(|e| e.active).collect();
        active.sort_by_key(|e| (!e.is_pending_after(current_day), e.due_day));
        tracing::debug!(active = active.len(), current_day, k, "ordered upcoming expenses");
        active.into_iter().take(k).cloned().collect()
    }

    /// Sum of the amounts of active entries. Start and end dates are not
    /// consulted.
    pub fn total_active(recurring_expenses: &[RecurringExpense]) -> Decimal {
        total_amount(recurring_expenses.iter().filter(|e| e.active))
    }

    /// Filtered and sorted list for managing recurring expenses. The sort is
    /// stable.
    pub fn list(
        recurring_expenses: &[RecurringExpense],
        filter: ActiveFilter,
        sort: RecurringSort,
    ) -> Vec<RecurringExpense> {
        let mut listed: Vec<RecurringExpense> = recurring_expenses
            .iter()
            .filter(|e| filter.admits(e))
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            let ordering = compare_by(sort.field, a, b);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        listed
    }
}

fn compare_by(field: RecurringSortField, a: &RecurringExpense, b: &RecurringExpense) -> Ordering {
    match field {
        RecurringSortField::DueDay => a.due_day.cmp(&b.due_day),
        RecurringSortField::Amount => a.amount.cmp(&b.amount),
        RecurringSortField::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
    }
}
