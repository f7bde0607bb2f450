use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CategoryLookup, Transaction, UNCATEGORIZED_LABEL};

/// Summed expenses for one category over the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    /// `None` for the synthetic "Uncategorized" group.
    pub category_id: Option<Uuid>,
    pub name: String,
    pub total: Decimal,
    pub transaction_count: usize,
}

pub struct CategoryService;

impl CategoryService {
    /// Ranks expense categories over `[as_of - window_days, as_of]`.
    ///
    /// Transactions without a category, or whose category id is not in
    /// `categories`, land in the "Uncategorized" group. Groups are sorted by
    /// total descending, then by name and id ascending. Only the first `k`
    /// groups are returned; the rest are discarded rather than folded into
    /// an "other" entry. A window reaching past the earliest representable
    /// date covers all history.
    pub fn top_categories(
        transactions: &[Transaction],
        categories: &CategoryLookup,
        window_days: u32,
        as_of: NaiveDate,
        k: usize,
    ) -> Vec<CategoryTotal> {
        let window_start = as_of
            .checked_sub_signed(Duration::days(i64::from(window_days)))
            .unwrap_or(NaiveDate::MIN);
        let mut groups: HashMap<Option<Uuid>, CategoryTotal> = HashMap::new();

        let in_window = transactions
            .iter()
            .filter(|txn| txn.kind.is_expense())
            .filter(|txn| txn.date >= window_start && txn.date <= as_of);
        for txn in in_window {
            let key = match txn.category_id {
                Some(id) if categories.contains(id) => Some(id),
                Some(id) => {
                    tracing::warn!(category_id = %id, transaction_id = %txn.id, "unknown category, counting as uncategorized");
                    None
                }
                None => None,
            };
            let entry = groups.entry(key).or_insert_with(|| CategoryTotal {
                category_id: key,
                name: key
                    .and_then(|id| categories.name(id))
                    .unwrap_or(UNCATEGORIZED_LABEL)
                    .to_string(),
                total: Decimal::ZERO,
                transaction_count: 0,
            });
            entry.total += txn.amount;
            entry.transaction_count += 1;
        }

        let mut ranked: Vec<CategoryTotal> = groups.into_values().collect();
        ranked.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.category_id.cmp(&b.category_id))
        });
        let group_count = ranked.len();
        ranked.truncate(k);

        tracing::debug!(window_days, groups = group_count, kept = ranked.len(), "ranked categories");
        ranked
    }
}
