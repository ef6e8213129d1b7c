//! Market and financing assumptions used by the projection engine

mod market;
mod financing;

pub use market::{MarketAssumptions, DEFAULT_INFLATION_RATE, DEFAULT_INVESTMENT_RATE};
pub use financing::{amortized_payment, FinancingTerms, ScenarioTable};

use serde::{Deserialize, Serialize};

/// Combined assumption set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    #[serde(default)]
    pub market: MarketAssumptions,
    #[serde(default)]
    pub financing: ScenarioTable,
}

impl Assumptions {
    /// The fixed rates the calculator has always used
    pub fn standard() -> Self {
        Self::default()
    }
}
