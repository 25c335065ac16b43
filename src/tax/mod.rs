//! Tax and net-income calculations: gross-to-net conversion, retirement
//! lump-sum taxation, pension estimation, property tax, and the mortgage
//! tax credit

mod deduction;
mod fixed_asset;
mod income;

pub use deduction::{tax_deduction_schedule, DEDUCTION_RATE, DEDUCTION_YEARS};
pub use fixed_asset::fixed_asset_tax_schedule;
pub use income::{
    adjusted_net_income, estimate_net_income, pension_estimate_monthly, retirement_net,
    AdjustedNetIncome,
};
