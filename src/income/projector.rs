//! Per-person income projection across the 35-year horizon
//!
//! One parametrized projector serves both household roles. Cumulative leave
//! months are threaded through the year loop as projector state, reset when
//! a new projector is built at trajectory start.
//!
//! While the person is alive the year's income composes side business,
//! a one-shot retirement lump sum, the old-age pension, and working income
//! with parental-leave and reduced-hours adjustments. Once the simulated
//! death age is reached the person switches permanently to the survivor
//! branch: survivor pension for the remaining spouse plus the private
//! insurance annuity while the youngest child is within the benefit window.

use super::survivor::{survivor_pension, DeceasedProfile, SurvivorProfile};
use crate::household::{Child, PensionAmount, PersonConfig, RetirementAmount, Role};
use crate::tax::{adjusted_net_income, estimate_net_income, pension_estimate_monthly, retirement_net};

/// Government subsidy rate on the worked portion of reduced-hours pay
const REDUCED_HOURS_SUBSIDY_RATE: f64 = 0.10;

/// Income produced by one person in one simulated year, in yen.
/// Kept as floats during accumulation; floored when the annual record is
/// assembled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonYearIncome {
    /// Worked net income plus the reduced-hours subsidy
    pub salary: f64,

    /// Tax-free parental leave benefit
    pub leave_benefit: f64,

    /// Net side-business income
    pub business: f64,

    /// Net retirement lump sum (at most one nonzero year)
    pub retirement: f64,

    /// Old-age pension
    pub pension: f64,

    pub survivor_basic: f64,
    pub survivor_welfare: f64,
    pub survivor_widow: f64,

    /// Private insurance annuity paid after death
    pub insurance: f64,
}

impl PersonYearIncome {
    pub fn survivor_total(&self) -> f64 {
        self.survivor_basic + self.survivor_welfare + self.survivor_widow
    }

    pub fn total(&self) -> f64 {
        self.salary
            + self.leave_benefit
            + self.business
            + self.retirement
            + self.pension
            + self.survivor_total()
            + self.insurance
    }
}

/// Year-by-year income projector for one person
pub struct PersonProjector<'a> {
    person: &'a PersonConfig,
    role: Role,
    spouse: &'a PersonConfig,
    children: &'a [Child],
    cumulative_leave_months: u32,
}

impl<'a> PersonProjector<'a> {
    pub fn new(
        person: &'a PersonConfig,
        role: Role,
        spouse: &'a PersonConfig,
        children: &'a [Child],
    ) -> Self {
        Self {
            person,
            role,
            spouse,
            children,
            cumulative_leave_months: 0,
        }
    }

    /// Project income for year index `i` (0-based). Must be called in order
    /// so the leave accumulator tracks the career correctly.
    pub fn project_year(&mut self, i: usize) -> PersonYearIncome {
        if self.person.is_dead_at(i) {
            return self.survivor_branch(i);
        }

        let year = i as u32 + 1;
        let age = self.person.age_at(i);
        let person = self.person;
        let mut out = PersonYearIncome::default();

        if person.side_business.active_in(year) {
            out.business = estimate_net_income(person.side_business.annual_gross);
        }

        if age == person.retirement_age as u32 {
            let years = person.years_of_service();
            let gross = match person.retirement.amount {
                RetirementAmount::Manual { amount } => amount,
                RetirementAmount::Auto { multiplier } => {
                    // Salary projected to the retirement year
                    let projected_monthly =
                        person.annual_salary() * person.growth_factor(i) / 12.0;
                    projected_monthly * years as f64 * multiplier
                }
            };
            out.retirement = retirement_net(gross, years);
        }

        if age >= person.pension.start_age as u32 {
            let monthly = match person.pension.amount {
                PensionAmount::Manual { monthly } => monthly,
                PensionAmount::Auto => pension_estimate_monthly(
                    person.annual_gross(),
                    person.pension.service_start_age,
                    person.retirement_age,
                ),
            };
            out.pension = monthly * 12.0;
        }

        if age < person.retirement_age as u32 {
            let growth = person.growth_factor(i);
            let mut salary = person.annual_salary() * growth;
            let mut bonus = person.annual_bonus * growth;

            let reduced = person.reduced_hours.active_in(year);
            if reduced {
                let ratio = person.reduced_hours.ratio();
                salary *= ratio;
                bonus *= ratio;
            }

            let leave_months = person.leave.months_in_year(year);
            let prior_leave = self.cumulative_leave_months;
            self.cumulative_leave_months += leave_months;

            let net = adjusted_net_income(
                salary,
                bonus,
                leave_months,
                person.leave.benefit_opt_in,
                prior_leave,
            );

            let mut subsidy = 0.0;
            if reduced && self.has_child_under_two(i) {
                let work_ratio = 12u32.saturating_sub(leave_months) as f64 / 12.0;
                subsidy = (salary + bonus) * work_ratio * REDUCED_HOURS_SUBSIDY_RATE;
            }

            out.salary = net.worked_net + subsidy;
            out.leave_benefit = net.leave_benefit;
        }

        out
    }

    fn has_child_under_two(&self, i: usize) -> bool {
        self.children
            .iter()
            .any(|child| (0..2).contains(&child.age_at(i)))
    }

    fn survivor_branch(&self, i: usize) -> PersonYearIncome {
        let person = self.person;
        let mut out = PersonYearIncome::default();

        let deceased = DeceasedProfile {
            annual_salary: person.annual_gross(),
            service_start_age: person.retirement.service_start_age,
            death_age: person.death.age,
        };
        let survivor = SurvivorProfile {
            age: self.spouse.age_at(i),
            // The surviving partner of the main earner takes the wife role
            is_wife: self.role == Role::Main,
        };
        let child_ages: Vec<i32> = self.children.iter().map(|c| c.age_at(i)).collect();

        let pension = survivor_pension(&deceased, &survivor, &child_ages);
        out.survivor_basic = pension.basic as f64;
        out.survivor_welfare = pension.welfare as f64;
        out.survivor_widow = pension.widow as f64;

        if let Some(youngest) = child_ages.iter().min() {
            if *youngest <= person.insurance.benefit_duration_years {
                out.insurance = person.insurance.benefit_monthly * 12.0;
            }
        }

        out
    }
}
