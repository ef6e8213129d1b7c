use super::validation;
use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Housing scenario being projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Keep renting, invest everything else
    Rent,
    /// Buy with 5% down
    Buy5,
    /// Buy with 20% down
    Buy20,
}

impl Scenario {
    /// All scenarios in display order
    pub const ALL: [Scenario; 3] = [Scenario::Rent, Scenario::Buy5, Scenario::Buy20];

    pub fn is_buy(self) -> bool {
        !matches!(self, Scenario::Rent)
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Rent => "Rent",
            Scenario::Buy5 => "Buy (5% down)",
            Scenario::Buy20 => "Buy (20% down)",
        }
    }
}

/// Financial inputs for one household, shared by every scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    /// Cash on hand at year 0
    pub starting_cash: f64,

    /// Take-home income per month
    pub monthly_income: f64,

    /// Current monthly rent (grows with inflation in the rent scenario)
    pub current_rent: f64,

    /// Purchase price of the home under consideration
    pub expected_house_cost: f64,

    /// Projection horizon in years (also the mortgage term)
    pub years: u32,

    /// Annual mortgage rate; overrides the scenario defaults when set
    #[serde(default)]
    pub home_interest_rate: Option<f64>,

    /// Property taxes, insurance and HOA per month, owners only
    #[serde(default)]
    pub monthly_taxes_and_fees: Option<f64>,
}

impl InputData {
    /// Reject records the engine cannot project
    pub fn validate(&self) -> Result<(), ProjectionError> {
        validation::validate(self)
    }

    /// Flat monthly owner costs added on top of the mortgage payment
    pub fn owner_fees(&self) -> f64 {
        self.monthly_taxes_and_fees.unwrap_or(0.0)
    }
}

impl Default for InputData {
    fn default() -> Self {
        Self {
            starting_cash: 138_000.0,
            monthly_income: 4_000.0,
            current_rent: 2_000.0,
            expected_house_cost: 700_000.0,
            years: 30,
            home_interest_rate: None,
            monthly_taxes_and_fees: None,
        }
    }
}
