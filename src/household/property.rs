//! Property configuration: purchase prices, structure, performance tier,
//! and fixed-asset tax assessment parameters

use serde::{Deserialize, Serialize};

/// Building structure, driving the taxable-value depreciation curve and the
/// new-construction relief duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Wood,
    Steel,
    #[serde(rename = "rc")]
    ReinforcedConcrete,
}

impl Structure {
    /// Years over which the taxable value declines linearly to the 0.2 floor
    pub fn decline_years(&self) -> u32 {
        match self {
            Structure::Wood => 20,
            Structure::Steel => 30,
            Structure::ReinforcedConcrete => 45,
        }
    }

    /// New-construction relief duration in years; longer for certified
    /// long-term housing
    pub fn relief_years(&self, long_term: bool) -> u32 {
        match self {
            Structure::Wood | Structure::Steel => {
                if long_term {
                    5
                } else {
                    3
                }
            }
            Structure::ReinforcedConcrete => {
                if long_term {
                    7
                } else {
                    5
                }
            }
        }
    }
}

/// Building performance certification tier.
///
/// Drives the mortgage tax-credit borrowing limit, and `LongTerm` also
/// extends the new-construction fixed-asset tax relief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    General,
    Zeh,
    LongTerm,
}

impl PerformanceTier {
    /// Borrowing limit for the mortgage tax credit, in yen
    pub fn borrowing_limit(&self) -> f64 {
        match self {
            PerformanceTier::LongTerm => 45_000_000.0,
            PerformanceTier::Zeh => 35_000_000.0,
            PerformanceTier::General => 30_000_000.0,
        }
    }

    pub fn is_long_term(&self) -> bool {
        matches!(self, PerformanceTier::LongTerm)
    }
}

/// Assessment ratios and tax rates for the fixed-asset tax calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Market value to taxable base ratio for land
    pub land_ratio: f64,

    /// Market value to initial taxable base ratio for the building
    pub building_ratio: f64,

    /// Fixed-asset tax rate in percent
    pub fixed_rate_pct: f64,

    /// City-planning tax rate in percent
    pub city_rate_pct: f64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            land_ratio: 0.7,
            building_ratio: 0.6,
            fixed_rate_pct: 1.4,
            city_rate_pct: 0.3,
        }
    }
}

/// Whether the fixed-asset tax schedule is computed or supplied flat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum FixedAssetTaxMethod {
    Auto,
    Manual { annual: f64 },
}

impl Default for FixedAssetTaxMethod {
    fn default() -> Self {
        FixedAssetTaxMethod::Auto
    }
}

/// The purchased property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Land market price in yen
    pub land_price: f64,

    /// Land area in square meters
    pub land_area: f64,

    /// Building market price in yen
    pub building_price: f64,

    /// Building floor area in square meters
    pub building_area: f64,

    pub structure: Structure,

    pub performance: PerformanceTier,

    /// Whether the building is newly constructed
    pub is_new: bool,

    /// Earnest money paid at contract, in yen
    #[serde(default)]
    pub deposit: f64,

    /// Down payment at purchase, in yen
    #[serde(default)]
    pub down_payment: f64,

    #[serde(default)]
    pub assessment: AssessmentConfig,

    #[serde(default)]
    pub fixed_asset_tax: FixedAssetTaxMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relief_years_by_structure() {
        assert_eq!(Structure::Wood.relief_years(false), 3);
        assert_eq!(Structure::Wood.relief_years(true), 5);
        assert_eq!(Structure::Steel.relief_years(false), 3);
        assert_eq!(Structure::ReinforcedConcrete.relief_years(false), 5);
        assert_eq!(Structure::ReinforcedConcrete.relief_years(true), 7);
    }

    #[test]
    fn test_borrowing_limits() {
        assert_eq!(PerformanceTier::General.borrowing_limit(), 30_000_000.0);
        assert_eq!(PerformanceTier::Zeh.borrowing_limit(), 35_000_000.0);
        assert_eq!(PerformanceTier::LongTerm.borrowing_limit(), 45_000_000.0);
    }
}
