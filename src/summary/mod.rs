//! Final net worth comparison across scenarios

use crate::error::ProjectionError;
use crate::inputs::Scenario;
use crate::projection::ProjectionResult;
use log::debug;
use serde::{Deserialize, Serialize};

/// One scenario's standing at the end of the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub scenario: Scenario,
    /// Cash in the last snapshot
    pub final_cash: f64,
    /// Home value at the horizon (0 when renting)
    pub final_home_value: f64,
    pub final_net_worth: f64,
    /// Shortfall against the best scenario; 0 for every tied winner
    pub difference: f64,
}

/// Ranked comparison of projected scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Rows in the order the projections were supplied
    pub rows: Vec<SummaryRow>,
    /// Every scenario sharing the highest net worth
    pub best: Vec<Scenario>,
}

impl Summary {
    pub fn is_tie(&self) -> bool {
        self.best.len() > 1
    }

    pub fn row(&self, scenario: Scenario) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.scenario == scenario)
    }
}

/// Compare projections by final net worth.
///
/// Net worth here is last-snapshot cash plus the full horizon home value,
/// not the paid-off proxy carried on each snapshot.
pub fn summarize(results: &[ProjectionResult]) -> Result<Summary, ProjectionError> {
    if results.is_empty() {
        return Err(ProjectionError::invalid("results", "no projections to compare"));
    }

    let mut rows = Vec::with_capacity(results.len());
    for result in results {
        let final_cash = result.final_cash().ok_or_else(|| {
            ProjectionError::invalid("results", format!("{:?} projection has no snapshots", result.scenario))
        })?;
        let final_home_value = result.horizon_house_value;
        let final_net_worth = final_cash + final_home_value;
        if !final_net_worth.is_finite() {
            return Err(ProjectionError::invalid(
                "results",
                format!("{:?} final net worth is not finite: {}", result.scenario, final_net_worth),
            ));
        }
        rows.push(SummaryRow {
            scenario: result.scenario,
            final_cash,
            final_home_value,
            final_net_worth,
            difference: 0.0,
        });
    }

    let max = rows
        .iter()
        .map(|r| r.final_net_worth)
        .fold(f64::NEG_INFINITY, f64::max);

    for row in &mut rows {
        row.difference = max - row.final_net_worth;
    }

    let best: Vec<Scenario> = rows
        .iter()
        .filter(|r| r.difference == 0.0)
        .map(|r| r.scenario)
        .collect();

    debug!("Best scenario(s) {:?} with net worth {:.2}", best, max);

    Ok(Summary { rows, best })
}
