//! Projection output records

use crate::inputs::Scenario;
use serde::{Deserialize, Serialize};

/// State of one scenario at the start of a projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    /// Year index, 0-based
    pub year: u32,
    pub cash_balance: f64,
    /// Appreciated home value (always 0 when renting)
    pub house_value: f64,
    /// Monthly rent or mortgage payment plus owner fees
    pub housing_cost: f64,
    pub annual_housing_spend: f64,
    pub monthly_income: f64,
    /// Income not spent on housing this year
    pub annual_net_investment: f64,
    /// Cash plus the paid-off share of the home
    pub net_worth: f64,
}

/// Complete projection for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub scenario: Scenario,
    /// Cash paid at purchase
    pub down_payment: f64,
    /// Annual mortgage rate applied (0 when renting)
    pub mortgage_rate: f64,
    /// Home value at the end of the horizon, cost * (1+inflation)^years
    pub horizon_house_value: f64,
    /// Snapshots in chronological order
    pub snapshots: Vec<YearSnapshot>,
}

impl ProjectionResult {
    pub fn final_snapshot(&self) -> Option<&YearSnapshot> {
        self.snapshots.last()
    }

    /// Cash in the last snapshot
    pub fn final_cash(&self) -> Option<f64> {
        self.final_snapshot().map(|s| s.cash_balance)
    }

    /// Final cash plus the full horizon home value
    pub fn final_net_worth(&self) -> Option<f64> {
        self.final_cash().map(|cash| cash + self.horizon_house_value)
    }
}
