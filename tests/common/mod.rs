#![allow(dead_code)]

use chrono::NaiveDate;
use finance_core::domain::{Category, RecurringExpense, Transaction};
use rust_decimal::Decimal;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn recurring(amount: Decimal, description: &str, due_day: u32) -> RecurringExpense {
    RecurringExpense::new(amount, description, due_day, ymd(2024, 1, 1))
}

/// Deterministic pseudo-random amounts so property sweeps are reproducible.
pub fn amount_for(seed: u64) -> Decimal {
    let cents = (seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407) >> 33)
        % 500_000
        + 1;
    Decimal::new(cents as i64, 2)
}

/// A mixed bag of income and expenses spread over roughly two years before
/// `end`.
pub fn spread_transactions(count: u64, end: NaiveDate, categories: &[Category]) -> Vec<Transaction> {
    (0..count)
        .map(|seed| {
            let date = end - chrono::Duration::days((seed * 7 % 730) as i64);
            let amount = amount_for(seed);
            let mut txn = if seed % 3 == 0 {
                Transaction::income(amount, date, format!("Income {seed}"))
            } else {
                Transaction::expense(amount, date, format!("Expense {seed}"))
            };
            if !categories.is_empty() && seed % 4 != 0 {
                txn.category_id = Some(categories[(seed as usize) % categories.len()].id);
            }
            txn
        })
        .collect()
}
