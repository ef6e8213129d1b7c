use serde::{Deserialize, Serialize};

/// Annual home appreciation and rent growth (3%)
pub const DEFAULT_INFLATION_RATE: f64 = 0.03;

/// Annual return on uninvested cash (7%)
pub const DEFAULT_INVESTMENT_RATE: f64 = 0.07;

/// Fixed annual rates applied every projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Drives both house appreciation and rent increases
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Compounded once a year on the prior cash balance
    #[serde(default = "default_investment_rate")]
    pub investment_rate: f64,
}

fn default_inflation_rate() -> f64 { DEFAULT_INFLATION_RATE }
fn default_investment_rate() -> f64 { DEFAULT_INVESTMENT_RATE }

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            investment_rate: DEFAULT_INVESTMENT_RATE,
        }
    }
}

impl MarketAssumptions {
    /// Growth factor after `years` of inflation
    pub fn inflation_factor(&self, years: u32) -> f64 {
        (1.0 + self.inflation_rate).powi(years as i32)
    }

    /// Home value after `years` of appreciation
    pub fn appreciated_value(&self, cost: f64, years: u32) -> f64 {
        cost * self.inflation_factor(years)
    }

    /// One year of growth on a cash balance followed by the year's contribution
    pub fn grow_cash(&self, balance: f64, contribution: f64) -> f64 {
        balance * (1.0 + self.investment_rate) + contribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let market = MarketAssumptions::default();
        assert_eq!(market.inflation_rate, 0.03);
        assert_eq!(market.investment_rate, 0.07);
    }

    #[test]
    fn test_appreciation() {
        let market = MarketAssumptions::default();
        assert_eq!(market.appreciated_value(700_000.0, 0), 700_000.0);
        assert_relative_eq!(market.appreciated_value(100_000.0, 2), 106_090.0, max_relative = 1e-12);
    }

    #[test]
    fn test_grow_cash() {
        let market = MarketAssumptions::default();
        // 10,000 grows to 10,700 then 24,000 contribution lands
        assert_relative_eq!(market.grow_cash(10_000.0, 24_000.0), 34_700.0, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let market: MarketAssumptions =
            serde_json::from_str(r#"{"investment_rate": 0.05}"#).expect("Failed to parse");
        assert_eq!(market.inflation_rate, DEFAULT_INFLATION_RATE);
        assert_eq!(market.investment_rate, 0.05);
    }
}
