use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is within 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Moves by a signed number of months, crossing year boundaries.
    pub fn shift(self, months: i32) -> Self {
        let index = self.index() + months;
        Self {
            year: index.div_euclid(12),
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_crosses_year_boundaries() {
        let march = YearMonth::new(2024, 3).unwrap();
        assert_eq!(march.shift(-5), YearMonth::new(2023, 10).unwrap());
        assert_eq!(march.shift(10), YearMonth::new(2025, 1).unwrap());
        assert_eq!(march.shift(-15), YearMonth::new(2022, 12).unwrap());
        assert_eq!(march.shift(0), march);
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
    }

    #[test]
    fn displays_as_iso_month() {
        let month = YearMonth::new(2023, 9).unwrap();
        assert_eq!(month.to_string(), "2023-09");
    }

    #[test]
    fn contains_matches_year_and_month() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!feb.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }
}
