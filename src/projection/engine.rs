//! Year-by-year projection of a single scenario

use super::{HouseValueStart, ProjectionConfig, ProjectionResult, ProjectionState};
use crate::assumptions::Assumptions;
use crate::error::ProjectionError;
use crate::inputs::{InputData, Scenario};
use log::{debug, trace, warn};

/// Projects cash, home value and net worth for one scenario at a time.
///
/// The engine holds only read-only assumptions and configuration, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project one scenario.
    ///
    /// Each snapshot records the state at the start of its year; the year's
    /// down payment, appreciation and cashflows show up in the next snapshot.
    pub fn project(
        &self,
        input: &InputData,
        scenario: Scenario,
    ) -> Result<ProjectionResult, ProjectionError> {
        if let Err(e) = input.validate().and_then(|_| self.config.validate()) {
            warn!("Rejected {:?} projection: {}", scenario, e);
            return Err(e);
        }

        let market = &self.assumptions.market;
        let financing = &self.assumptions.financing;

        let down_payment = financing.down_payment(scenario, input);
        let mortgage_rate = financing.mortgage_rate(scenario, input);
        let initial_cost = financing.initial_housing_cost(scenario, input)?;

        let (house_cost, horizon_house_value) = if scenario.is_buy() {
            (
                input.expected_house_cost,
                market.appreciated_value(input.expected_house_cost, input.years),
            )
        } else {
            (0.0, 0.0)
        };
        let initial_house_value = match self.config.house_value_start {
            HouseValueStart::FullCost => house_cost,
            HouseValueStart::Zero => 0.0,
        };

        debug!(
            "Projecting {:?}: down payment {:.2}, rate {:.4}, monthly housing {:.2}, {} years",
            scenario, down_payment, mortgage_rate, initial_cost, input.years
        );

        let mut state = ProjectionState::initial(
            input.starting_cash,
            initial_house_value,
            initial_cost,
            down_payment,
        );

        let count = self.config.snapshot_count(input.years)?;
        let mut snapshots = Vec::with_capacity(count as usize);

        for year in 0..count {
            let snapshot = state.snapshot(input.monthly_income, &self.config);
            trace!(
                "{:?} year {}: cash {:.2}, house {:.2}, housing {:.2}",
                scenario, snapshot.year, snapshot.cash_balance, snapshot.house_value, snapshot.housing_cost
            );
            snapshots.push(snapshot);

            if year + 1 < count {
                let next_cost = self.housing_cost_in_year(scenario, input, initial_cost, year + 1);
                state.advance(
                    input.monthly_income,
                    house_cost,
                    next_cost,
                    market,
                    self.config.house_value_start,
                );
            }
        }

        Ok(ProjectionResult {
            scenario,
            down_payment,
            mortgage_rate,
            horizon_house_value,
            snapshots,
        })
    }

    /// Project Rent, Buy5 and Buy20 in that order
    pub fn project_all(&self, input: &InputData) -> Result<Vec<ProjectionResult>, ProjectionError> {
        Scenario::ALL
            .iter()
            .map(|&scenario| self.project(input, scenario))
            .collect()
    }

    /// Rent inflates every year; the mortgage payment is level for the whole loan.
    fn housing_cost_in_year(
        &self,
        scenario: Scenario,
        input: &InputData,
        initial_cost: f64,
        year: u32,
    ) -> f64 {
        match scenario {
            Scenario::Rent => input.current_rent * self.assumptions.market.inflation_factor(year),
            Scenario::Buy5 | Scenario::Buy20 => initial_cost,
        }
    }
}
