//! Down payment and mortgage terms for each scenario

use crate::error::ProjectionError;
use crate::inputs::{InputData, Scenario};
use serde::{Deserialize, Serialize};

/// How one scenario finances the home
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Fraction of the purchase price paid up front
    pub down_payment_fraction: f64,

    /// Annual mortgage rate used when the input carries no override
    pub default_mortgage_rate: f64,
}

/// Scenario -> financing lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTable {
    pub rent: FinancingTerms,
    pub buy5: FinancingTerms,
    pub buy20: FinancingTerms,
}

impl Default for ScenarioTable {
    fn default() -> Self {
        Self {
            rent: FinancingTerms {
                down_payment_fraction: 0.0,
                default_mortgage_rate: 0.0,
            },
            // Thin equity prices in a higher rate
            buy5: FinancingTerms {
                down_payment_fraction: 0.05,
                default_mortgage_rate: 0.07,
            },
            buy20: FinancingTerms {
                down_payment_fraction: 0.20,
                default_mortgage_rate: 0.065,
            },
        }
    }
}

impl ScenarioTable {
    pub fn terms(&self, scenario: Scenario) -> &FinancingTerms {
        match scenario {
            Scenario::Rent => &self.rent,
            Scenario::Buy5 => &self.buy5,
            Scenario::Buy20 => &self.buy20,
        }
    }

    /// Cash paid at purchase; zero when renting
    pub fn down_payment(&self, scenario: Scenario, input: &InputData) -> f64 {
        input.expected_house_cost * self.terms(scenario).down_payment_fraction
    }

    /// Annual mortgage rate, preferring the input override for buy scenarios
    pub fn mortgage_rate(&self, scenario: Scenario, input: &InputData) -> f64 {
        if !scenario.is_buy() {
            return 0.0;
        }
        input
            .home_interest_rate
            .unwrap_or(self.terms(scenario).default_mortgage_rate)
    }

    /// Monthly cost of owning in year 0: level mortgage payment plus flat fees.
    /// Renting returns the current rent.
    pub fn initial_housing_cost(
        &self,
        scenario: Scenario,
        input: &InputData,
    ) -> Result<f64, ProjectionError> {
        if !scenario.is_buy() {
            return Ok(input.current_rent);
        }
        let months = input
            .years
            .checked_mul(12)
            .ok_or_else(|| ProjectionError::invalid("years", "loan term in months overflows"))?;
        let principal = input.expected_house_cost - self.down_payment(scenario, input);
        let payment = amortized_payment(principal, self.mortgage_rate(scenario, input), months);
        Ok(payment + input.owner_fees())
    }
}

/// Level monthly payment that retires `principal` over `months` periods.
///
/// payment = P * r / (1 - (1+r)^-n) with r = annual_rate / 12, which stays
/// finite for long terms where (1+r)^n overflows. A zero rate degenerates to
/// straight-line repayment.
pub fn amortized_payment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if principal <= 0.0 || months == 0 {
        return 0.0;
    }
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / months as f64;
    }
    let discount = (1.0 + r).powf(-(months as f64));
    principal * r / (1.0 - discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_down_payments() {
        let table = ScenarioTable::default();
        let input = InputData::default();

        assert_eq!(table.down_payment(Scenario::Rent, &input), 0.0);
        assert_relative_eq!(table.down_payment(Scenario::Buy5, &input), 35_000.0, max_relative = 1e-12);
        assert_relative_eq!(table.down_payment(Scenario::Buy20, &input), 140_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_amortized_payment_known_value() {
        // 100k over 30 years at 6% is the textbook 599.55
        let payment = amortized_payment(100_000.0, 0.06, 360);
        assert!((payment - 599.55).abs() < 0.01);
    }

    #[test]
    fn test_amortized_payment_retires_loan() {
        let principal = 560_000.0;
        let rate = 0.065;
        let payment = amortized_payment(principal, rate, 360);

        let mut balance = principal;
        for _ in 0..360 {
            balance = balance * (1.0 + rate / 12.0) - payment;
        }
        assert!(balance.abs() < 1e-3);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(amortized_payment(120_000.0, 0.0, 120), 1_000.0);
    }

    #[test]
    fn test_zero_principal() {
        assert_eq!(amortized_payment(0.0, 0.07, 360), 0.0);
    }

    #[test]
    fn test_rate_override_only_for_buy() {
        let table = ScenarioTable::default();
        let input = InputData {
            home_interest_rate: Some(0.04),
            ..Default::default()
        };

        assert_eq!(table.mortgage_rate(Scenario::Rent, &input), 0.0);
        assert_eq!(table.mortgage_rate(Scenario::Buy5, &input), 0.04);
        assert_eq!(table.mortgage_rate(Scenario::Buy20, &input), 0.04);

        let input = InputData::default();
        assert_eq!(table.mortgage_rate(Scenario::Buy5, &input), 0.07);
        assert_eq!(table.mortgage_rate(Scenario::Buy20, &input), 0.065);
    }

    #[test]
    fn test_fees_added_after_amortization() {
        let table = ScenarioTable::default();
        let base = InputData::default();
        let with_fees = InputData {
            monthly_taxes_and_fees: Some(600.0),
            ..Default::default()
        };

        let without = table.initial_housing_cost(Scenario::Buy20, &base).expect("cost failed");
        let with = table.initial_housing_cost(Scenario::Buy20, &with_fees).expect("cost failed");
        assert_relative_eq!(with - without, 600.0, max_relative = 1e-9);

        // Renters never pay owner fees
        assert_eq!(table.initial_housing_cost(Scenario::Rent, &with_fees), Ok(2_000.0));
    }

    #[test]
    fn test_long_term_payment_stays_finite() {
        // (1+r)^n overflows f64 here; the payment tends to interest-only
        let payment = amortized_payment(560_000.0, 0.065, 240_000);
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 560_000.0 * 0.065 / 12.0, max_relative = 1e-12);

        let payment = amortized_payment(560_000.0, 0.065, u32::MAX);
        assert!(payment.is_finite());
    }

    #[test]
    fn test_month_count_overflow_rejected() {
        let table = ScenarioTable::default();
        let input = InputData {
            years: 400_000_000,
            ..Default::default()
        };
        assert!(matches!(
            table.initial_housing_cost(Scenario::Buy5, &input),
            Err(ProjectionError::InvalidInput { field: "years", .. })
        ));
        // Renting never needs a loan term
        assert!(table.initial_housing_cost(Scenario::Rent, &input).is_ok());
    }
}
