use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly budget settings for a user. A missing configuration behaves like
/// [`BudgetConfig::default`], which is all zeros.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetConfig {
    #[serde(default)]
    pub monthly_income: Decimal,
    #[serde(default)]
    pub emergency_reserve: Decimal,
    #[serde(default)]
    pub leisure_percent: u8,
}

impl BudgetConfig {
    pub fn new(monthly_income: Decimal, emergency_reserve: Decimal, leisure_percent: u8) -> Self {
        Self {
            monthly_income,
            emergency_reserve,
            leisure_percent,
        }
    }

    /// Income left once the emergency reserve is set aside. Not floored.
    pub fn disposable_for_leisure(&self) -> Decimal {
        self.monthly_income - self.emergency_reserve
    }

    /// Share of [`Self::disposable_for_leisure`] earmarked for leisure.
    pub fn leisure_amount(&self) -> Decimal {
        self.disposable_for_leisure() * Decimal::from(self.leisure_percent) / Decimal::ONE_HUNDRED
    }
}

/// Leisure allocation derived from a [`BudgetConfig`].
///
/// This is deliberately a separate figure from the summary's
/// `available_budget`: it subtracts the emergency reserve rather than the
/// fixed expenses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LeisurePlan {
    pub disposable_for_leisure: Decimal,
    pub leisure_percent: u8,
    pub leisure_amount: Decimal,
}

impl From<&BudgetConfig> for LeisurePlan {
    fn from(budget: &BudgetConfig) -> Self {
        Self {
            disposable_for_leisure: budget.disposable_for_leisure(),
            leisure_percent: budget.leisure_percent,
            leisure_amount: budget.leisure_amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn leisure_amount_uses_reserve_not_fixed_expenses() {
        let budget = BudgetConfig::new(dec!(5000), dec!(1000), 10);
        assert_eq!(budget.disposable_for_leisure(), dec!(4000));
        assert_eq!(budget.leisure_amount(), dec!(400));
    }

    #[test]
    fn reserve_above_income_goes_negative() {
        let budget = BudgetConfig::new(dec!(500), dec!(800), 50);
        assert_eq!(budget.disposable_for_leisure(), dec!(-300));
        assert_eq!(budget.leisure_amount(), dec!(-150));
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let budget: BudgetConfig = serde_json::from_str(r#"{"monthly_income": "2500.50"}"#).unwrap();
        assert_eq!(budget.monthly_income, dec!(2500.50));
        assert_eq!(budget.emergency_reserve, Decimal::ZERO);
        assert_eq!(budget.leisure_percent, 0);
    }
}
