//! Annual fixed-asset (property) tax schedule for land and building
//!
//! Land tax is constant over the horizon; the building's taxable value
//! depreciates linearly to a 0.2 floor at a structure-dependent speed, with
//! the new-construction relief halving the fixed-asset component (not the
//! city-planning component) in the early years.

use crate::household::{FixedAssetTaxMethod, PropertyConfig};
use crate::HORIZON_YEARS;

/// Small-lot relief boundary in square meters
const SMALL_LOT_AREA: f64 = 200.0;

/// Taxable value floor once the building has fully depreciated
const DEPRECIATION_FLOOR: f64 = 0.2;

/// Minimum building floor area eligible for new-construction relief
const RELIEF_MIN_AREA: f64 = 50.0;

/// Constant annual land tax component in yen
fn land_tax(property: &PropertyConfig) -> f64 {
    if property.land_area <= 0.0 {
        return 0.0;
    }

    let assess = &property.assessment;
    let taxable_base = property.land_price * assess.land_ratio;
    let fixed_rate = assess.fixed_rate_pct / 100.0;
    let city_rate = assess.city_rate_pct / 100.0;

    // Small-lot relief: 1/6 (fixed) and 1/3 (city) on the first 200 m²,
    // 1/3 and 2/3 on the excess, pro-rated by area share
    let (fixed_base, city_base) = if property.land_area <= SMALL_LOT_AREA {
        (taxable_base / 6.0, taxable_base / 3.0)
    } else {
        let small_share = SMALL_LOT_AREA / property.land_area;
        let large_share = (property.land_area - SMALL_LOT_AREA) / property.land_area;
        (
            small_share * taxable_base / 6.0 + large_share * taxable_base / 3.0,
            small_share * taxable_base / 3.0 + large_share * taxable_base * 2.0 / 3.0,
        )
    };

    fixed_base * fixed_rate + city_base * city_rate
}

/// Compute the 35-year fixed-asset tax schedule in yen.
///
/// A manual override produces a flat schedule; otherwise land and building
/// components are computed from the assessment parameters, floored per year.
pub fn fixed_asset_tax_schedule(property: &PropertyConfig) -> Vec<i64> {
    if let FixedAssetTaxMethod::Manual { annual } = property.fixed_asset_tax {
        return vec![annual.max(0.0).floor() as i64; HORIZON_YEARS];
    }

    if property.land_price <= 0.0 && property.building_price <= 0.0 {
        return vec![0; HORIZON_YEARS];
    }

    let assess = &property.assessment;
    let fixed_rate = assess.fixed_rate_pct / 100.0;
    let city_rate = assess.city_rate_pct / 100.0;

    let annual_land = land_tax(property);

    let initial_building_taxable = property.building_price * assess.building_ratio;
    let decline_years = property.structure.decline_years() as f64;
    let slope = (1.0 - DEPRECIATION_FLOOR) / decline_years;

    let relief_years = if property.is_new && property.building_area >= RELIEF_MIN_AREA {
        property
            .structure
            .relief_years(property.performance.is_long_term())
    } else {
        0
    };

    (0..HORIZON_YEARS)
        .map(|i| {
            let factor = (1.0 - slope * i as f64).max(DEPRECIATION_FLOOR);
            let taxable = (initial_building_taxable * factor).floor();

            let mut building_fixed = taxable * fixed_rate;
            if (i as u32) < relief_years {
                building_fixed *= 0.5;
            }
            let building_city = taxable * city_rate;

            (annual_land + building_fixed + building_city).floor() as i64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::{AssessmentConfig, PerformanceTier, Structure};

    fn test_property() -> PropertyConfig {
        PropertyConfig {
            land_price: 30_000_000.0,
            land_area: 100.0,
            building_price: 20_000_000.0,
            building_area: 90.0,
            structure: Structure::Wood,
            performance: PerformanceTier::LongTerm,
            is_new: true,
            deposit: 0.0,
            down_payment: 0.0,
            assessment: AssessmentConfig::default(),
            fixed_asset_tax: FixedAssetTaxMethod::Auto,
        }
    }

    #[test]
    fn test_first_year_with_relief() {
        let schedule = fixed_asset_tax_schedule(&test_property());

        // Land: 21M base -> 3.5M*1.4% + 7M*0.3% = 70,000
        // Building: 12M taxable -> fixed 168,000 halved + city 36,000
        assert_eq!(schedule[0], 190_000);
    }

    #[test]
    fn test_relief_expiry() {
        let schedule = fixed_asset_tax_schedule(&test_property());

        // Year index 5: relief over (5 long-term years), factor 0.8,
        // taxable 9.6M -> 134,400 + 28,800 + land 70,000
        assert_eq!(schedule[5], 233_200);
    }

    #[test]
    fn test_depreciation_floor() {
        let schedule = fixed_asset_tax_schedule(&test_property());

        // Wood declines for 20 years; far beyond that the factor stays 0.2:
        // taxable 2.4M -> 33,600 + 7,200 + land 70,000
        assert_eq!(schedule[34], 110_800);
        assert_eq!(schedule[25], schedule[34]);
    }

    #[test]
    fn test_land_constant_over_horizon() {
        let mut property = test_property();
        property.building_price = 0.0;
        let schedule = fixed_asset_tax_schedule(&property);

        assert!(schedule.iter().all(|&t| t == schedule[0]));
        assert_eq!(schedule[0], 70_000);
    }

    #[test]
    fn test_large_lot_proration() {
        let mut property = test_property();
        property.building_price = 0.0;
        property.land_area = 400.0;
        let schedule = fixed_asset_tax_schedule(&property);

        // 21M base, half small-lot and half excess:
        // fixed (10.5M/6 + 10.5M/3)*1.4% = 73,500
        // city (10.5M/3 + 10.5M*2/3)*0.3% = 31,500
        assert_eq!(schedule[0], 105_000);
    }

    #[test]
    fn test_no_relief_when_small_or_used() {
        let mut property = test_property();
        property.building_area = 40.0; // under the 50 m² threshold
        let with_small = fixed_asset_tax_schedule(&property);

        let mut used = test_property();
        used.is_new = false;
        let with_used = fixed_asset_tax_schedule(&used);

        // Full 168,000 fixed component in year one for both
        assert_eq!(with_small[0], 274_000);
        assert_eq!(with_used[0], 274_000);
    }

    #[test]
    fn test_manual_override() {
        let mut property = test_property();
        property.fixed_asset_tax = FixedAssetTaxMethod::Manual { annual: 150_000.0 };
        let schedule = fixed_asset_tax_schedule(&property);

        assert_eq!(schedule.len(), HORIZON_YEARS);
        assert!(schedule.iter().all(|&t| t == 150_000));
    }

    #[test]
    fn test_empty_property_is_zero() {
        let mut property = test_property();
        property.land_price = 0.0;
        property.building_price = 0.0;
        let schedule = fixed_asset_tax_schedule(&property);
        assert!(schedule.iter().all(|&t| t == 0));
    }
}
