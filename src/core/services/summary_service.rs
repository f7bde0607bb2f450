use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{BudgetConfig, LeisurePlan, RecurringExpense, Transaction, TransactionKind};

use super::RecurringService;

/// Aggregate balances for the dashboard header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    pub total_fixed_expenses: Decimal,
    /// Monthly income minus active fixed expenses, floored at zero.
    pub available_budget: Decimal,
}

pub struct SummaryService;

impl SummaryService {
    pub fn compute(
        transactions: &[Transaction],
        recurring_expenses: &[RecurringExpense],
        budget: Option<&BudgetConfig>,
    ) -> Summary {
        let mut summary = Summary::default();
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => {
                    summary.total_income += txn.amount;
                    summary.income_count += 1;
                }
                TransactionKind::Expense => {
                    summary.total_expense += txn.amount;
                    summary.expense_count += 1;
                }
            }
        }
        summary.balance = summary.total_income - summary.total_expense;
        summary.total_fixed_expenses = RecurringService::total_active(recurring_expenses);

        let monthly_income = budget.map_or(Decimal::ZERO, |b| b.monthly_income);
        summary.available_budget =
            (monthly_income - summary.total_fixed_expenses).max(Decimal::ZERO);

        tracing::debug!(
            incomes = summary.income_count,
            expenses = summary.expense_count,
            fixed = %summary.total_fixed_expenses,
            "computed summary"
        );
        summary
    }

    /// Leisure figures from the budget alone; all zero when no budget is set.
    pub fn leisure_plan(budget: Option<&BudgetConfig>) -> LeisurePlan {
        budget.map(LeisurePlan::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn fixed(amount: Decimal, active: bool) -> RecurringExpense {
        let expense = RecurringExpense::new(amount, "Bill", 10, date());
        if active {
            expense
        } else {
            expense.deactivated()
        }
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let transactions = vec![
            Transaction::income(dec!(1000), date(), "Salary"),
            Transaction::expense(dec!(400), date(), "Rent"),
            Transaction::expense(dec!(200), date(), "Food"),
        ];
        let summary = SummaryService::compute(&transactions, &[], None);
        assert_eq!(summary.total_income, dec!(1000));
        assert_eq!(summary.total_expense, dec!(600));
        assert_eq!(summary.balance, dec!(400));
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 2);
    }

    #[test]
    fn balance_may_go_negative() {
        let transactions = vec![
            Transaction::income(dec!(50), date(), "Refund"),
            Transaction::expense(dec!(80.25), date(), "Dinner"),
        ];
        let summary = SummaryService::compute(&transactions, &[], None);
        assert_eq!(summary.balance, dec!(-30.25));
    }

    #[test]
    fn available_budget_subtracts_active_fixed_expenses() {
        let recurring = vec![
            fixed(dec!(1000), true),
            fixed(dec!(200), true),
            fixed(dec!(999), false),
        ];
        let budget = BudgetConfig::new(dec!(5000), dec!(0), 10);
        let summary = SummaryService::compute(&[], &recurring, Some(&budget));
        assert_eq!(summary.total_fixed_expenses, dec!(1200));
        assert_eq!(summary.available_budget, dec!(3800));
    }

    #[test]
    fn available_budget_floors_at_zero() {
        let recurring = vec![fixed(dec!(3000), true)];
        let budget = BudgetConfig::new(dec!(2000), dec!(0), 0);
        let summary = SummaryService::compute(&[], &recurring, Some(&budget));
        assert_eq!(summary.available_budget, Decimal::ZERO);
    }

    #[test]
    fn empty_inputs_produce_zero_summary() {
        let summary = SummaryService::compute(&[], &[], None);
        assert_eq!(summary, Summary::default());
        assert_eq!(SummaryService::leisure_plan(None), LeisurePlan::default());
    }
}
