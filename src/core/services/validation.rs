use rust_decimal::Decimal;

use crate::domain::{BudgetConfig, Category, RecurringExpense, Snapshot, Transaction};
use crate::errors::ValidationError;

const MAX_DUE_DAY: u32 = 31;
const MAX_LEISURE_PERCENT: u8 = 100;

/// Checks the input invariants the computations rely on. The computations
/// themselves never validate; run this at the boundary where a snapshot is
/// assembled.
pub struct ValidationService;

impl ValidationService {
    pub fn validate_snapshot(snapshot: &Snapshot) -> Result<(), ValidationError> {
        snapshot
            .transactions
            .iter()
            .try_for_each(Self::validate_transaction)?;
        snapshot
            .recurring_expenses
            .iter()
            .try_for_each(Self::validate_recurring)?;
        if let Some(budget) = &snapshot.budget {
            Self::validate_budget(budget)?;
        }
        snapshot
            .categories
            .iter()
            .try_for_each(Self::validate_category)
    }

    pub fn validate_transaction(txn: &Transaction) -> Result<(), ValidationError> {
        if txn.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTransactionAmount(txn.id));
        }
        if txn.description.trim().is_empty() {
            return Err(ValidationError::EmptyTransactionDescription(txn.id));
        }
        Ok(())
    }

    pub fn validate_recurring(expense: &RecurringExpense) -> Result<(), ValidationError> {
        if expense.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveRecurringAmount(expense.id));
        }
        if expense.description.trim().is_empty() {
            return Err(ValidationError::EmptyRecurringDescription(expense.id));
        }
        if !(1..=MAX_DUE_DAY).contains(&expense.due_day) {
            return Err(ValidationError::DueDayOutOfRange {
                id: expense.id,
                due_day: expense.due_day,
            });
        }
        if expense.end_date.is_some_and(|end| end < expense.start_date) {
            return Err(ValidationError::EndBeforeStart(expense.id));
        }
        Ok(())
    }

    pub fn validate_budget(budget: &BudgetConfig) -> Result<(), ValidationError> {
        if budget.monthly_income < Decimal::ZERO {
            return Err(ValidationError::NegativeMonthlyIncome);
        }
        if budget.emergency_reserve < Decimal::ZERO {
            return Err(ValidationError::NegativeEmergencyReserve);
        }
        if budget.leisure_percent > MAX_LEISURE_PERCENT {
            return Err(ValidationError::LeisurePercentOutOfRange(
                budget.leisure_percent,
            ));
        }
        Ok(())
    }

    pub fn validate_category(category: &Category) -> Result<(), ValidationError> {
        if category.name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName(category.id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn well_formed_snapshot_passes() {
        let snapshot = Snapshot {
            transactions: vec![Transaction::income(dec!(10), date(1), "Gift")],
            recurring_expenses: vec![RecurringExpense::new(dec!(50), "Phone", 31, date(1))],
            budget: Some(BudgetConfig::new(dec!(100), dec!(0), 100)),
            categories: vec![Category::new("Misc")],
        };
        assert_eq!(ValidationService::validate_snapshot(&snapshot), Ok(()));
        assert_eq!(ValidationService::validate_snapshot(&Snapshot::new()), Ok(()));
    }

    #[test]
    fn zero_amount_transaction_is_rejected() {
        let txn = Transaction::expense(Decimal::ZERO, date(2), "Nothing");
        assert_eq!(
            ValidationService::validate_transaction(&txn),
            Err(ValidationError::NonPositiveTransactionAmount(txn.id))
        );
    }

    #[test]
    fn whitespace_description_is_rejected() {
        let txn = Transaction::expense(dec!(1), date(2), "  ");
        assert_eq!(
            ValidationService::validate_transaction(&txn),
            Err(ValidationError::EmptyTransactionDescription(txn.id))
        );
    }

    #[test]
    fn due_day_must_be_a_day_of_month() {
        for due_day in [0, 32] {
            let expense = RecurringExpense::new(dec!(5), "Odd", due_day, date(1));
            assert_eq!(
                ValidationService::validate_recurring(&expense),
                Err(ValidationError::DueDayOutOfRange {
                    id: expense.id,
                    due_day
                })
            );
        }
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let expense = RecurringExpense::new(dec!(5), "Loan", 3, date(10)).with_end_date(date(9));
        assert_eq!(
            ValidationService::validate_recurring(&expense),
            Err(ValidationError::EndBeforeStart(expense.id))
        );
        let same_day = RecurringExpense::new(dec!(5), "Loan", 3, date(10)).with_end_date(date(10));
        assert!(ValidationService::validate_recurring(&same_day).is_ok());
    }

    #[test]
    fn budget_limits_are_checked_not_clamped() {
        let negative = BudgetConfig::new(dec!(-1), dec!(0), 0);
        assert_eq!(
            ValidationService::validate_budget(&negative),
            Err(ValidationError::NegativeMonthlyIncome)
        );
        let reserve = BudgetConfig::new(dec!(1), dec!(-0.01), 0);
        assert_eq!(
            ValidationService::validate_budget(&reserve),
            Err(ValidationError::NegativeEmergencyReserve)
        );
        let greedy = BudgetConfig::new(dec!(1), dec!(0), 101);
        assert_eq!(
            ValidationService::validate_budget(&greedy),
            Err(ValidationError::LeisurePercentOutOfRange(101))
        );
    }

    #[test]
    fn first_violation_is_reported() {
        let bad_txn = Transaction::expense(dec!(-3), date(1), "Refund?");
        let bad_category = Category::new("");
        let snapshot = Snapshot {
            transactions: vec![bad_txn.clone()],
            categories: vec![bad_category],
            ..Snapshot::default()
        };
        assert_eq!(
            ValidationService::validate_snapshot(&snapshot),
            Err(ValidationError::NonPositiveTransactionAmount(bad_txn.id))
        );
    }
}
