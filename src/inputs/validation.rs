//! Reject input records the engine cannot project
//!
//! Every check runs before any simulation work, so a projection either
//! succeeds completely or fails here.

use super::InputData;
use crate::error::ProjectionError;

/// Longest horizon accepted. Keeps month counts and compounded balances
/// well inside integer and f64 range.
pub const MAX_YEARS: u32 = 1_000;

/// Check horizon, monetary fields and the optional rate override
pub fn validate(input: &InputData) -> Result<(), ProjectionError> {
    if input.years == 0 {
        return Err(ProjectionError::invalid("years", "must be at least 1"));
    }
    if input.years > MAX_YEARS {
        return Err(ProjectionError::invalid(
            "years",
            format!("must be at most {MAX_YEARS}, got {}", input.years),
        ));
    }

    let monetary = [
        ("startingCash", input.starting_cash),
        ("monthlyIncome", input.monthly_income),
        ("currentRent", input.current_rent),
        ("expectedHouseCost", input.expected_house_cost),
    ];
    for (field, value) in monetary {
        check_non_negative(field, value)?;
    }

    if let Some(fees) = input.monthly_taxes_and_fees {
        check_non_negative("monthlyTaxesAndFees", fees)?;
    }
    if let Some(rate) = input.home_interest_rate {
        check_non_negative("homeInterestRate", rate)?;
    }

    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_valid() {
        assert!(validate(&InputData::default()).is_ok());
    }

    #[test]
    fn test_zero_years_rejected() {
        let input = InputData {
            years: 0,
            ..Default::default()
        };
        match validate(&input) {
            Err(ProjectionError::InvalidInput { field, .. }) => assert_eq!(field, "years"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_horizon_capped() {
        let input = InputData {
            years: MAX_YEARS,
            ..Default::default()
        };
        assert!(validate(&input).is_ok());
        assert!(input.validate().is_ok());

        for years in [MAX_YEARS + 1, 20_000, 400_000_000] {
            let input = InputData {
                years,
                ..Default::default()
            };
            match input.validate() {
                Err(ProjectionError::InvalidInput { field, .. }) => assert_eq!(field, "years"),
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_money_rejected() {
        let input = InputData {
            current_rent: -1.0,
            ..Default::default()
        };
        match validate(&input) {
            Err(ProjectionError::InvalidInput { field, .. }) => assert_eq!(field, "currentRent"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let input = InputData {
            starting_cash: f64::NAN,
            ..Default::default()
        };
        assert!(validate(&input).is_err());

        let input = InputData {
            monthly_taxes_and_fees: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_negative_rate_override_rejected() {
        let input = InputData {
            home_interest_rate: Some(-0.01),
            ..Default::default()
        };
        match validate(&input) {
            Err(ProjectionError::InvalidInput { field, .. }) => assert_eq!(field, "homeInterestRate"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_values_allowed() {
        let input = InputData {
            starting_cash: 0.0,
            monthly_income: 0.0,
            current_rent: 0.0,
            expected_house_cost: 0.0,
            years: 1,
            home_interest_rate: Some(0.0),
            monthly_taxes_and_fees: Some(0.0),
        };
        assert!(validate(&input).is_ok());
    }
}
