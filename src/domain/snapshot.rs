use serde::{Deserialize, Serialize};

use super::{BudgetConfig, Category, CategoryLookup, RecurringExpense, Transaction};

/// Everything the engine reads for one user, already fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetConfig>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, budget: BudgetConfig) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn category_lookup(&self) -> CategoryLookup {
        CategoryLookup::from(self.categories.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.recurring_expenses.is_empty()
            && self.budget.is_none()
            && self.categories.is_empty()
    }
}
