//! Monthly fixed obligations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Identifiable};

/// A fixed expense that falls due on the same day of every month.
///
/// `due_day` is kept as the raw day-of-month the user entered. Months that
/// are too short for it (day 31 in April, day 30 in February) have no due
/// date at all; see [`RecurringExpense::due_date_in`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: Uuid,
    pub amount: Decimal,
    pub description: String,
    pub due_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub active: bool,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RecurringExpense {
    pub fn new(
        amount: Decimal,
        description: impl Into<String>,
        due_day: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            due_day,
            category_id: None,
            active: true,
            start_date,
            end_date: None,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Due date inside the given month, or `None` when the month has no
    /// `due_day` (or the month itself is invalid).
    pub fn due_date_in(&self, year: i32, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, self.due_day)
    }

    /// True when the due day is still ahead of `current_day` in this month.
    /// An expense due on `current_day` itself has already passed.
    pub fn is_pending_after(&self, current_day: u32) -> bool {
        self.due_day > current_day
    }
}

impl Identifiable for RecurringExpense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for RecurringExpense {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rent(due_day: u32) -> RecurringExpense {
        RecurringExpense::new(
            dec!(1200),
            "Rent",
            due_day,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn day_31_has_no_due_date_in_april() {
        assert_eq!(rent(31).due_date_in(2024, 4), None);
        assert_eq!(
            rent(31).due_date_in(2024, 5),
            NaiveDate::from_ymd_opt(2024, 5, 31)
        );
    }

    #[test]
    fn february_29_only_in_leap_years() {
        assert!(rent(29).due_date_in(2024, 2).is_some());
        assert!(rent(29).due_date_in(2023, 2).is_none());
    }

    #[test]
    fn due_today_is_no_longer_pending() {
        assert!(rent(20).is_pending_after(15));
        assert!(!rent(15).is_pending_after(15));
        assert!(!rent(3).is_pending_after(15));
    }
}
