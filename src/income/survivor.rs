//! Survivor pension paid to the remaining spouse and children
//!
//! Three tiers: the child-dependent basic pension, the earnings-related
//! welfare pension (with a 300-month coverage guarantee), and the middle-aged
//! widow addition, which never stacks with the basic pension.

use serde::{Deserialize, Serialize};

/// Basic survivor pension base amount, yen per year
const BASIC_BASE: f64 = 795_000.0;

/// Addition for each of the first two eligible children, yen per year
const CHILD_ADDITION_FIRST_TWO: f64 = 228_700.0;

/// Addition from the third eligible child onward, yen per year
const CHILD_ADDITION_THIRD_PLUS: f64 = 76_200.0;

/// Middle-aged widow addition, yen per year
const WIDOW_ADDITION: f64 = 596_000.0;

/// Earnings-related accrual coefficient per month of coverage
const EARNINGS_ACCRUAL: f64 = 0.005481;

/// Guaranteed minimum months of coverage for the welfare pension
const GUARANTEED_MONTHS: f64 = 300.0;

/// The deceased person's career facts at death
#[derive(Debug, Clone, Copy)]
pub struct DeceasedProfile {
    /// Annual gross salary used as the career-average proxy, yen
    pub annual_salary: f64,

    /// Age employment started
    pub service_start_age: u8,

    /// Age at death
    pub death_age: u8,
}

/// The surviving spouse at the year being evaluated
#[derive(Debug, Clone, Copy)]
pub struct SurvivorProfile {
    pub age: u32,

    /// Whether the survivor qualifies for the widow addition by role
    pub is_wife: bool,
}

/// Annual survivor pension with its tier breakdown, floored yen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SurvivorPension {
    pub total: i64,
    pub basic: i64,
    pub welfare: i64,
    pub widow: i64,
}

/// Compute the annual survivor pension for one year.
///
/// `child_ages` are the children's ages at the evaluated year; only children
/// aged 0 through 18 keep the basic pension alive.
pub fn survivor_pension(
    deceased: &DeceasedProfile,
    survivor: &SurvivorProfile,
    child_ages: &[i32],
) -> SurvivorPension {
    let eligible_children = child_ages.iter().filter(|&&a| (0..=18).contains(&a)).count();

    let mut basic = 0.0;
    if eligible_children > 0 {
        basic = BASIC_BASE;
        for idx in 0..eligible_children {
            basic += if idx < 2 {
                CHILD_ADDITION_FIRST_TWO
            } else {
                CHILD_ADDITION_THIRD_PLUS
            };
        }
    }

    let monthly_remuneration = deceased.annual_salary / 12.0;
    let working_months =
        ((deceased.death_age as i64 - deceased.service_start_age as i64).max(0) * 12) as f64;
    let counted_months = working_months.max(GUARANTEED_MONTHS);
    let full_old_age = monthly_remuneration * EARNINGS_ACCRUAL * counted_months;
    let welfare = full_old_age * 0.75;

    // The widow addition pays only while no basic pension does
    let widow = if survivor.is_wife && (40..65).contains(&survivor.age) && basic == 0.0 {
        WIDOW_ADDITION
    } else {
        0.0
    };

    let basic = basic.floor() as i64;
    let welfare = welfare.floor() as i64;
    let widow = widow.floor() as i64;

    SurvivorPension {
        total: basic + welfare + widow,
        basic,
        welfare,
        widow,
    }
}
