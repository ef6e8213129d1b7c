use super::DEFAULT_EQUITY_PROXY_YEARS;
use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Where a purchased home's value starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseValueStart {
    /// Year 0 carries the purchase price; year k is cost * (1+inflation)^k
    #[default]
    FullCost,
    /// Year 0 carries nothing; year k >= 1 is cost * (1+inflation)^(k-1)
    Zero,
}

/// Which year indices are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearRange {
    /// 0..years, `years` snapshots
    #[default]
    Exclusive,
    /// 0..=years, `years + 1` snapshots
    Inclusive,
}

/// Projection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default)]
    pub house_value_start: HouseValueStart,

    #[serde(default)]
    pub year_range: YearRange,

    /// Straight-line horizon for the paid-off fraction in net worth
    #[serde(default = "default_equity_proxy_years")]
    pub equity_proxy_years: u32,
}

fn default_equity_proxy_years() -> u32 { DEFAULT_EQUITY_PROXY_YEARS }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            house_value_start: HouseValueStart::FullCost,
            year_range: YearRange::Exclusive,
            equity_proxy_years: DEFAULT_EQUITY_PROXY_YEARS,
        }
    }
}

impl ProjectionConfig {
    /// Behaviour of the first version of the calculator: house value
    /// appears a year late and the final year is included.
    pub fn basic() -> Self {
        Self {
            house_value_start: HouseValueStart::Zero,
            year_range: YearRange::Inclusive,
            ..Default::default()
        }
    }

    /// Number of snapshots produced for a horizon of `years`
    pub fn snapshot_count(&self, years: u32) -> Result<u32, ProjectionError> {
        match self.year_range {
            YearRange::Exclusive => Ok(years),
            YearRange::Inclusive => years
                .checked_add(1)
                .ok_or_else(|| ProjectionError::invalid("years", "snapshot count overflows")),
        }
    }

    /// Fraction of the home counted toward net worth at `year`
    pub fn paid_off_fraction(&self, year: u32) -> f64 {
        (year as f64 / self.equity_proxy_years as f64).min(1.0)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.equity_proxy_years == 0 {
            return Err(ProjectionError::invalid("equity_proxy_years", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_count() {
        let config = ProjectionConfig::default();
        assert_eq!(config.snapshot_count(30), Ok(30));
        assert_eq!(config.snapshot_count(u32::MAX), Ok(u32::MAX));

        let config = ProjectionConfig::basic();
        assert_eq!(config.snapshot_count(30), Ok(31));
        assert!(config.snapshot_count(u32::MAX).is_err());
    }

    #[test]
    fn test_paid_off_fraction_caps_at_one() {
        let config = ProjectionConfig::default();
        assert_eq!(config.paid_off_fraction(0), 0.0);
        assert_eq!(config.paid_off_fraction(15), 0.5);
        assert_eq!(config.paid_off_fraction(30), 1.0);
        assert_eq!(config.paid_off_fraction(45), 1.0);
    }

    #[test]
    fn test_zero_proxy_years_rejected() {
        let config = ProjectionConfig {
            equity_proxy_years: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_variant_names() {
        let config: ProjectionConfig =
            serde_json::from_str(r#"{"house_value_start": "zero", "year_range": "inclusive"}"#)
                .expect("Failed to parse");
        assert_eq!(config.house_value_start, HouseValueStart::Zero);
        assert_eq!(config.year_range, YearRange::Inclusive);
        assert_eq!(config.equity_proxy_years, DEFAULT_EQUITY_PROXY_YEARS);
    }
}
