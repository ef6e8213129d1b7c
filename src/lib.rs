//! Rent vs Buy - projection engine comparing renting against buying a home
//!
//! This library provides:
//! - Year-by-year projections for three scenarios (rent, buy 5% down, buy 20% down)
//! - Amortized mortgage payments and home appreciation
//! - Cash accumulation at a fixed investment return
//! - A summary comparator ranking scenarios by final net worth

pub mod error;
pub mod inputs;
pub mod assumptions;
pub mod projection;
pub mod summary;

// Re-export commonly used types
pub use error::ProjectionError;
pub use inputs::{InputData, Scenario};
pub use assumptions::{Assumptions, MarketAssumptions, ScenarioTable};
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionResult, YearSnapshot};
pub use summary::{summarize, Summary, SummaryRow};
