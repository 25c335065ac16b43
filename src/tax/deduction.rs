//! Mortgage-interest tax credit over the statutory 13-year window

use crate::household::PerformanceTier;
use crate::mortgage::MortgageYear;

/// Years the credit applies, counted from year 1
pub const DEDUCTION_YEARS: usize = 13;

/// Credit rate applied to the capped year-end balance
pub const DEDUCTION_RATE: f64 = 0.007;

/// Annual tax credit per year of the schedule, in yen.
///
/// For the first 13 years the credit is 0.7% of the year-end remaining
/// balance, capped by the performance-tier borrowing limit; zero afterwards.
pub fn tax_deduction_schedule(mortgage: &[MortgageYear], tier: PerformanceTier) -> Vec<i64> {
    let limit = tier.borrowing_limit();

    mortgage
        .iter()
        .enumerate()
        .map(|(i, year)| {
            if i >= DEDUCTION_YEARS {
                return 0;
            }
            let balance = (year.remaining_principal as f64).min(limit);
            (balance * DEDUCTION_RATE).floor() as i64
        })
        .collect()
}
