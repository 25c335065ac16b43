//! Asset growth simulation: the reconciler that merges income and expense
//! streams into cash, investment, and total-asset trajectories
//!
//! Cash carries no floor; a negative balance is the signal that the plan
//! runs short.

use crate::household::AssetsConfig;
use crate::HORIZON_YEARS;

/// All annual streams consumed by the simulation, in yen
pub struct AssetInputs<'a> {
    /// Total household income per year
    pub income: &'a [f64],

    /// Annual mortgage payments
    pub mortgage: &'a [i64],

    /// Annual education costs
    pub education: &'a [i64],

    /// Flat annual living cost
    pub annual_living_cost: f64,

    /// Annual fixed-asset tax
    pub fixed_asset_tax: &'a [i64],

    /// Other annual expenses (insurance premiums)
    pub other_expenses: &'a [f64],

    /// Annual investment contributions, moved from cash into vehicles
    pub contributions: &'a [f64],
}

/// Yearly balances produced by the simulation
#[derive(Debug, Clone)]
pub struct AssetTrajectory {
    pub cash: Vec<f64>,
    pub investments: Vec<f64>,
    pub total: Vec<f64>,
}

/// Total annual investment contributions while each vehicle's contribution
/// window is open
pub fn investment_contribution_schedule(assets: &AssetsConfig) -> Vec<f64> {
    (0..HORIZON_YEARS)
        .map(|i| {
            assets
                .investments
                .iter()
                .filter(|v| v.contributing_at(i))
                .map(|v| v.annual_contribution())
                .sum()
        })
        .collect()
}

/// Run the 35-year reconciliation.
///
/// Each vehicle compounds once per year after that year's contribution;
/// contributions stop after the vehicle's window but compounding continues.
pub fn simulate_assets(
    initial_savings: f64,
    assets: &AssetsConfig,
    inputs: &AssetInputs,
) -> AssetTrajectory {
    let mut cash = Vec::with_capacity(HORIZON_YEARS);
    let mut investments = Vec::with_capacity(HORIZON_YEARS);
    let mut total = Vec::with_capacity(HORIZON_YEARS);

    let mut current_cash = initial_savings;
    let mut values: Vec<f64> = assets.investments.iter().map(|v| v.initial).collect();

    for i in 0..HORIZON_YEARS {
        let income = inputs.income.get(i).copied().unwrap_or(0.0);
        let expense = inputs.mortgage.get(i).copied().unwrap_or(0) as f64
            + inputs.education.get(i).copied().unwrap_or(0) as f64
            + inputs.annual_living_cost
            + inputs.fixed_asset_tax.get(i).copied().unwrap_or(0) as f64
            + inputs.other_expenses.get(i).copied().unwrap_or(0.0);
        let contribution = inputs.contributions.get(i).copied().unwrap_or(0.0);

        for (value, vehicle) in values.iter_mut().zip(&assets.investments) {
            let inflow = if vehicle.contributing_at(i) {
                vehicle.annual_contribution()
            } else {
                0.0
            };
            *value = (*value + inflow) * vehicle.growth_factor();
        }

        current_cash = current_cash + income - expense - contribution;

        let invested: f64 = values.iter().sum();
        cash.push(current_cash);
        investments.push(invested);
        total.push(current_cash + invested);
    }

    AssetTrajectory {
        cash,
        investments,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::InvestmentVehicle;
    use approx::assert_relative_eq;

    fn vehicle(monthly: f64, years: u32, rate: f64) -> InvestmentVehicle {
        InvestmentVehicle {
            name: String::new(),
            initial: 0.0,
            monthly_contribution: monthly,
            contribution_years: years,
            annual_growth_pct: rate,
        }
    }

    #[test]
    fn test_vehicle_compounds_after_contribution_stop() {
        let assets = AssetsConfig {
            initial_savings: 0.0,
            investments: vec![vehicle(50_000.0, 2, 10.0)],
        };
        let contributions = investment_contribution_schedule(&assets);
        let income = vec![0.0; HORIZON_YEARS];
        let zeros = vec![0i64; HORIZON_YEARS];

        let result = simulate_assets(
            10_000_000.0,
            &assets,
            &AssetInputs {
                income: &income,
                mortgage: &zeros,
                education: &zeros,
                annual_living_cost: 0.0,
                fixed_asset_tax: &zeros,
                other_expenses: &[],
                contributions: &contributions,
            },
        );

        assert_relative_eq!(result.investments[0], 660_000.0);
        assert_relative_eq!(result.investments[1], 1_386_000.0);
        // Contributions stopped; growth continues
        assert_relative_eq!(result.investments[2], 1_524_600.0);
    }

    #[test]
    fn test_cash_reconciliation() {
        let assets = AssetsConfig {
            initial_savings: 0.0,
            investments: vec![vehicle(50_000.0, 35, 0.0)],
        };
        let contributions = investment_contribution_schedule(&assets);
        let income = vec![5_000_000.0; HORIZON_YEARS];
        let mortgage = vec![1_000_000i64; HORIZON_YEARS];
        let zeros = vec![0i64; HORIZON_YEARS];

        let result = simulate_assets(
            2_000_000.0,
            &assets,
            &AssetInputs {
                income: &income,
                mortgage: &mortgage,
                education: &zeros,
                annual_living_cost: 3_000_000.0,
                fixed_asset_tax: &zeros,
                other_expenses: &[],
                contributions: &contributions,
            },
        );

        // 2M + 5M - 1M - 3M - 0.6M = 2.4M
        assert_relative_eq!(result.cash[0], 2_400_000.0);
        assert_relative_eq!(result.investments[0], 600_000.0);
        assert_relative_eq!(result.total[0], 3_000_000.0);
    }

    #[test]
    fn test_cash_may_go_negative() {
        let assets = AssetsConfig::default();
        let income = vec![1_000_000.0; HORIZON_YEARS];
        let zeros = vec![0i64; HORIZON_YEARS];

        let result = simulate_assets(
            0.0,
            &assets,
            &AssetInputs {
                income: &income,
                mortgage: &zeros,
                education: &zeros,
                annual_living_cost: 2_000_000.0,
                fixed_asset_tax: &zeros,
                other_expenses: &[],
                contributions: &[],
            },
        );

        assert!(result.cash[0] < 0.0);
        assert_relative_eq!(result.cash[34], -35_000_000.0);
    }

    #[test]
    fn test_contribution_schedule_window() {
        let assets = AssetsConfig {
            initial_savings: 0.0,
            investments: vec![vehicle(50_000.0, 20, 5.0), vehicle(10_000.0, 10, 3.0)],
        };
        let flow = investment_contribution_schedule(&assets);

        assert_relative_eq!(flow[0], 720_000.0);
        assert_relative_eq!(flow[9], 720_000.0);
        assert_relative_eq!(flow[10], 600_000.0);
        assert_relative_eq!(flow[19], 600_000.0);
        assert_relative_eq!(flow[20], 0.0);
    }
}
