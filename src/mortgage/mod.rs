//! Two-track mortgage amortization against a 5-year-bucketed rate curve
//!
//! A household loan is modeled as two independent sub-schedules: the regular
//! track paid 12 times a year and the bonus track paid twice a year. Each
//! track re-derives its level annuity payment whenever it enters a new rate
//! block, and the final period of year 35 is balloon-corrected so the balance
//! reaches exactly zero.

use crate::{HORIZON_YEARS, RATE_BLOCK_YEARS};
use serde::{Deserialize, Serialize};

/// Rate assumed when the curve is empty, percent per annum
const FALLBACK_RATE_PCT: f64 = 0.5;

/// Payments per year on the regular track
pub const MONTHLY_PAYMENTS: u32 = 12;

/// Payments per year on the bonus track
pub const BONUS_PAYMENTS: u32 = 2;

/// One year of a single amortization track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackYear {
    /// Simulation year, 1-indexed
    pub year: u32,

    /// Annual rate applied this year, percent
    pub rate_pct: f64,

    /// Total paid this year
    pub annual_payment: i64,

    /// Interest portion of the year's payments
    pub interest_paid: i64,

    /// Principal portion of the year's payments
    pub principal_paid: i64,

    /// Balance at year end
    pub remaining_principal: i64,
}

/// One year of the merged (regular + bonus) schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageYear {
    pub year: u32,
    pub rate_pct: f64,
    pub annual_payment: i64,

    /// Regular-track annual payment divided over 12 installments
    pub monthly_payment: i64,

    /// Bonus-track annual payment divided over 2 installments
    pub bonus_payment: i64,

    pub interest_paid: i64,
    pub principal_paid: i64,
    pub remaining_principal: i64,
}

impl MortgageYear {
    /// The same year with every amount zeroed, keeping year and rate.
    /// Used when group-credit life insurance clears a borrower's balance.
    pub fn zeroed(&self) -> Self {
        Self {
            year: self.year,
            rate_pct: self.rate_pct,
            annual_payment: 0,
            monthly_payment: 0,
            bonus_payment: 0,
            interest_paid: 0,
            principal_paid: 0,
            remaining_principal: 0,
        }
    }
}

/// Rate for a given year: block index `(year-1)/5`, reusing the last entry
/// past the end of the curve
fn block_rate(rates: &[f64], year: u32) -> f64 {
    let idx = (year as usize - 1) / RATE_BLOCK_YEARS;
    rates
        .get(idx)
        .or_else(|| rates.last())
        .copied()
        .unwrap_or(FALLBACK_RATE_PCT)
}

/// Amortize a single track over the full horizon.
///
/// A zero principal yields an all-zero schedule. A zero rate degenerates to
/// straight-line repayment over the remaining periods.
pub fn amortize_track(principal: f64, rates: &[f64], payments_per_year: u32) -> Vec<TrackYear> {
    let k = payments_per_year as usize;
    let mut current = principal.max(0.0);
    let mut prev_remaining = current.round() as i64;
    let mut schedule = Vec::with_capacity(HORIZON_YEARS);

    for year in 1..=HORIZON_YEARS as u32 {
        let rate_pct = block_rate(rates, year);
        let period_rate = rate_pct / 100.0 / payments_per_year as f64;
        let remaining_periods = (HORIZON_YEARS as u32 + 1 - year) as f64 * payments_per_year as f64;

        let mut period_payment = if principal <= 0.0 {
            0.0
        } else if period_rate == 0.0 {
            current / remaining_periods
        } else {
            let growth = (1.0 + period_rate).powf(remaining_periods);
            current * period_rate * growth / (growth - 1.0)
        };

        let mut year_payment = 0.0;
        let mut year_interest = 0.0;

        for p in 0..k {
            let interest = current * period_rate;
            let mut principal_part = period_payment - interest;

            // Final-period balloon correction: never overshoot the balance,
            // and force exact zero-out at the end of year 35
            if current - principal_part < 0.0
                || (year == HORIZON_YEARS as u32 && p == k - 1)
            {
                principal_part = current;
                period_payment = principal_part + interest;
            }

            current -= principal_part;
            year_payment += period_payment;
            year_interest += interest;
        }

        let remaining = (current.round() as i64).max(0);
        schedule.push(TrackYear {
            year,
            rate_pct,
            annual_payment: year_payment.round() as i64,
            interest_paid: year_interest.round() as i64,
            // Telescoped off the rounded balances so the 35-year sum
            // reproduces the initial principal exactly
            principal_paid: prev_remaining - remaining,
            remaining_principal: remaining,
        });
        prev_remaining = remaining;
    }

    schedule
}

/// Amortize a loan split into a regular track and a bonus track and merge
/// the two into one yearly schedule.
pub fn amortize(total: f64, bonus_principal: f64, rates: &[f64]) -> Vec<MortgageYear> {
    let bonus = bonus_principal.clamp(0.0, total.max(0.0));
    let regular = (total - bonus).max(0.0);

    let monthly_track = amortize_track(regular, rates, MONTHLY_PAYMENTS);
    let bonus_track = amortize_track(bonus, rates, BONUS_PAYMENTS);

    monthly_track
        .iter()
        .zip(bonus_track.iter())
        .map(|(m, b)| MortgageYear {
            year: m.year,
            rate_pct: m.rate_pct,
            annual_payment: m.annual_payment + b.annual_payment,
            monthly_payment: (m.annual_payment as f64 / 12.0).round() as i64,
            bonus_payment: (b.annual_payment as f64 / 2.0).round() as i64,
            interest_paid: m.interest_paid + b.interest_paid,
            principal_paid: m.principal_paid + b.principal_paid,
            remaining_principal: m.remaining_principal + b.remaining_principal,
        })
        .collect()
}

/// Sum two borrowers' schedules year by year (pair loan)
pub fn merge_schedules(a: &[MortgageYear], b: &[MortgageYear]) -> Vec<MortgageYear> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| MortgageYear {
            year: x.year,
            rate_pct: x.rate_pct,
            annual_payment: x.annual_payment + y.annual_payment,
            monthly_payment: x.monthly_payment + y.monthly_payment,
            bonus_payment: x.bonus_payment + y.bonus_payment,
            interest_paid: x.interest_paid + y.interest_paid,
            principal_paid: x.principal_paid + y.principal_paid,
            remaining_principal: x.remaining_principal + y.remaining_principal,
        })
        .collect()
}
