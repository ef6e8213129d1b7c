//! Projection engine for rent and buy scenarios

mod config;
mod state;
mod engine;
mod snapshots;

pub use config::{ProjectionConfig, HouseValueStart, YearRange};
pub use state::ProjectionState;
pub use engine::ProjectionEngine;
pub use snapshots::{YearSnapshot, ProjectionResult};

use crate::error::ProjectionError;
use crate::inputs::{InputData, Scenario};

// ============================================================================
// Equity Proxy
// ============================================================================
// Net worth credits the home in proportion to years elapsed over a fixed
// reference horizon, independent of the actual loan term.

/// Years over which a home counts as fully paid off for net worth
pub const DEFAULT_EQUITY_PROXY_YEARS: u32 = 30;

/// Project one scenario with the standard assumptions and configuration
pub fn project(input: &InputData, scenario: Scenario) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::default().project(input, scenario)
}
