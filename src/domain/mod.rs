//! Value types for the finance snapshot: transactions, recurring expenses,
//! budget settings and categories.

pub mod budget;
pub mod category;
pub mod common;
pub mod month;
pub mod recurring;
pub mod snapshot;
pub mod transaction;

pub use budget::{BudgetConfig, LeisurePlan};
pub use category::{Category, CategoryLookup, UNCATEGORIZED_LABEL};
pub use common::{total_amount, Amounted, Identifiable, NamedEntity};
pub use month::YearMonth;
pub use recurring::RecurringExpense;
pub use snapshot::Snapshot;
pub use transaction::{Transaction, TransactionKind};
