//! Running state carried from one projection year to the next

use super::{HouseValueStart, ProjectionConfig, YearSnapshot};
use crate::assumptions::MarketAssumptions;

/// Mutable state for a single scenario projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Year index the state describes (0-based)
    pub year: u32,
    pub cash_balance: f64,
    pub house_value: f64,
    /// Monthly rent or mortgage payment (plus owner fees)
    pub housing_cost: f64,
    /// Down payment still to leave the cash balance
    pub pending_down_payment: f64,
}

impl ProjectionState {
    /// Year 0 state. The down payment is held back until year 0 has been reported.
    pub fn initial(
        starting_cash: f64,
        initial_house_value: f64,
        housing_cost: f64,
        down_payment: f64,
    ) -> Self {
        Self {
            year: 0,
            cash_balance: starting_cash,
            house_value: initial_house_value,
            housing_cost,
            pending_down_payment: down_payment,
        }
    }

    /// Housing spend over the year at the current monthly cost
    pub fn annual_housing_spend(&self) -> f64 {
        self.housing_cost * 12.0
    }

    /// Income left after housing, invested in full
    pub fn annual_net_investment(&self, monthly_income: f64) -> f64 {
        monthly_income * 12.0 - self.annual_housing_spend()
    }

    /// Record the state as it stands, before this year's cashflows
    pub fn snapshot(&self, monthly_income: f64, config: &ProjectionConfig) -> YearSnapshot {
        YearSnapshot {
            year: self.year,
            cash_balance: self.cash_balance,
            house_value: self.house_value,
            housing_cost: self.housing_cost,
            annual_housing_spend: self.annual_housing_spend(),
            monthly_income,
            annual_net_investment: self.annual_net_investment(monthly_income),
            net_worth: self.cash_balance + self.house_value * config.paid_off_fraction(self.year),
        }
    }

    /// Apply one year of cashflows and move to the next year index.
    ///
    /// `next_housing_cost` is the monthly cost that applies in the new year.
    pub fn advance(
        &mut self,
        monthly_income: f64,
        house_cost: f64,
        next_housing_cost: f64,
        market: &MarketAssumptions,
        house_value_start: HouseValueStart,
    ) {
        self.cash_balance -= self.pending_down_payment;
        self.pending_down_payment = 0.0;

        if house_cost > 0.0 {
            let years_held = match house_value_start {
                HouseValueStart::FullCost => self.year + 1,
                HouseValueStart::Zero => self.year,
            };
            self.house_value = market.appreciated_value(house_cost, years_held);
        }

        let net_investment = self.annual_net_investment(monthly_income);
        self.cash_balance = market.grow_cash(self.cash_balance, net_investment);

        self.housing_cost = next_housing_cost;
        self.year += 1;
    }
}
