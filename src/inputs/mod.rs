//! Household inputs and scenario selection

mod data;
pub mod validation;

pub use data::{InputData, Scenario};
pub use validation::{validate, MAX_YEARS};
