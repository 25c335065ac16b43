//! Savings and investment vehicle configuration

use serde::{Deserialize, Serialize};

/// One recurring investment (e.g. an index-fund accumulation plan)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentVehicle {
    #[serde(default)]
    pub name: String,

    /// Balance already held at year 0, in yen
    #[serde(default)]
    pub initial: f64,

    /// Monthly contribution in yen
    pub monthly_contribution: f64,

    /// Years contributions continue; the balance keeps compounding after
    pub contribution_years: u32,

    /// Expected annual growth rate in percent
    pub annual_growth_pct: f64,
}

impl InvestmentVehicle {
    /// Whether contributions are still flowing in year index `i`
    pub fn contributing_at(&self, year_index: usize) -> bool {
        (year_index as u32) < self.contribution_years
    }

    /// Annual contribution in yen while active
    pub fn annual_contribution(&self) -> f64 {
        self.monthly_contribution * 12.0
    }

    /// Growth factor applied once per simulated year
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.annual_growth_pct / 100.0
    }
}

/// Initial savings plus the set of investment vehicles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Cash savings at year 0, in yen
    pub initial_savings: f64,

    #[serde(default)]
    pub investments: Vec<InvestmentVehicle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_window() {
        let vehicle = InvestmentVehicle {
            name: "nisa".to_string(),
            initial: 0.0,
            monthly_contribution: 50_000.0,
            contribution_years: 20,
            annual_growth_pct: 5.0,
        };

        assert!(vehicle.contributing_at(0));
        assert!(vehicle.contributing_at(19));
        assert!(!vehicle.contributing_at(20));
        assert_eq!(vehicle.annual_contribution(), 600_000.0);
    }
}
