//! Top-level projection engine composing every calculator into one
//! reconciled 35-year trajectory
//!
//! The engine is the only place the streams meet: the danshin-adjusted
//! mortgage schedule, the tax credit derived from it, education and
//! allowance schedules, the fixed-asset tax, both persons' income
//! projections, the insurance-premium expense stream, and the asset
//! simulation. Each run recomputes everything from the immutable snapshot.

use super::records::{AnnualRecord, IncomeBreakdown, ProjectionResult, SurvivorBreakdown};
use crate::assets::{investment_contribution_schedule, simulate_assets, AssetInputs};
use crate::family::{child_allowance_schedule, education_cost_schedule};
use crate::household::{HouseholdConfig, Role};
use crate::income::{PersonProjector, PersonYearIncome};
use crate::mortgage::{amortize, merge_schedules, MortgageYear};
use crate::tax::{fixed_asset_tax_schedule, tax_deduction_schedule};
use crate::HORIZON_YEARS;

/// Main projection engine
pub struct ProjectionEngine {
    household: HouseholdConfig,
}

impl ProjectionEngine {
    /// Create an engine over an immutable household snapshot
    pub fn new(household: HouseholdConfig) -> Self {
        Self { household }
    }

    pub fn household(&self) -> &HouseholdConfig {
        &self.household
    }

    /// Run the full 35-year projection
    pub fn project(&self) -> ProjectionResult {
        let cfg = &self.household;

        let mortgage = self.mortgage_schedule();
        let deductions = if cfg.loan.has_deduction {
            tax_deduction_schedule(&mortgage, cfg.property.performance)
        } else {
            vec![0; HORIZON_YEARS]
        };

        let education = education_cost_schedule(&cfg.children, cfg.regional_subsidy, cfg.free_nursery);
        let allowance = if cfg.child_allowance_enabled {
            child_allowance_schedule(&cfg.children)
        } else {
            vec![0; HORIZON_YEARS]
        };

        let fixed_asset_tax = fixed_asset_tax_schedule(&cfg.property);
        let annual_living_cost = cfg.annual_living_cost();
        let other_expenses = self.premium_expense_schedule();
        let contributions = investment_contribution_schedule(&cfg.assets);

        let breakdowns = self.income_breakdowns();
        let income_totals: Vec<f64> = breakdowns.iter().map(|b| b.total() as f64).collect();

        let mortgage_payments: Vec<i64> = mortgage.iter().map(|y| y.annual_payment).collect();
        let trajectory = simulate_assets(
            cfg.net_initial_savings(),
            &cfg.assets,
            &AssetInputs {
                income: &income_totals,
                mortgage: &mortgage_payments,
                education: &education,
                annual_living_cost,
                fixed_asset_tax: &fixed_asset_tax,
                other_expenses: &other_expenses,
                contributions: &contributions,
            },
        );

        let records = (0..HORIZON_YEARS)
            .map(|i| AnnualRecord {
                year: i as u32 + 1,
                income_total: breakdowns[i].total(),
                income: breakdowns[i],
                mortgage_payment: mortgage[i].annual_payment,
                mortgage_remaining: mortgage[i].remaining_principal,
                tax_deduction: deductions[i],
                education_cost: education[i],
                child_allowance: allowance[i],
                living_cost: annual_living_cost.floor() as i64,
                fixed_asset_tax: fixed_asset_tax[i],
                other_expense: other_expenses[i].floor() as i64,
                investment_contribution: contributions[i].floor() as i64,
                cash_balance: trajectory.cash[i].floor() as i64,
                investment_balance: trajectory.investments[i].floor() as i64,
                total_assets: trajectory.total[i].floor() as i64,
            })
            .collect();

        ProjectionResult::new(records)
    }

    /// Merged mortgage schedule with group-credit life clearing applied.
    ///
    /// A pair loan clears each borrower's share from that borrower's death
    /// year; a non-split loan is cleared only by the main borrower's death
    /// (assumed sole debtor).
    fn mortgage_schedule(&self) -> Vec<MortgageYear> {
        let cfg = &self.household;
        let loan = &cfg.loan;

        match &loan.pair_split {
            Some(split) => {
                let partner_principal = (loan.total - split.main_principal).max(0.0);
                let partner_bonus = (loan.bonus_principal - split.main_bonus).max(0.0);

                let main =
                    self.cleared(amortize(split.main_principal, split.main_bonus, &loan.rates), Role::Main);
                let partner =
                    self.cleared(amortize(partner_principal, partner_bonus, &loan.rates), Role::Partner);

                merge_schedules(&main, &partner)
            }
            None => self.cleared(
                amortize(loan.total, loan.bonus_principal, &loan.rates),
                Role::Main,
            ),
        }
    }

    /// Zero a borrower's schedule from the year that borrower dies
    fn cleared(&self, schedule: Vec<MortgageYear>, borrower: Role) -> Vec<MortgageYear> {
        let person = self.household.person(borrower);
        schedule
            .into_iter()
            .enumerate()
            .map(|(i, y)| if person.is_dead_at(i) { y.zeroed() } else { y })
            .collect()
    }

    /// Annual insurance premiums while each person is alive
    fn premium_expense_schedule(&self) -> Vec<f64> {
        let cfg = &self.household;
        (0..HORIZON_YEARS)
            .map(|i| {
                let mut monthly = 0.0;
                if !cfg.main.is_dead_at(i) {
                    monthly += cfg.main.insurance.premium_monthly;
                }
                if !cfg.partner.is_dead_at(i) {
                    monthly += cfg.partner.insurance.premium_monthly;
                }
                monthly * 12.0
            })
            .collect()
    }

    /// Both persons' incomes per year, merged into floored breakdowns
    fn income_breakdowns(&self) -> Vec<IncomeBreakdown> {
        let cfg = &self.household;
        let mut main = PersonProjector::new(&cfg.main, Role::Main, &cfg.partner, &cfg.children);
        let mut partner =
            PersonProjector::new(&cfg.partner, Role::Partner, &cfg.main, &cfg.children);

        (0..HORIZON_YEARS)
            .map(|i| merge_incomes(main.project_year(i), partner.project_year(i)))
            .collect()
    }
}

fn merge_incomes(a: PersonYearIncome, b: PersonYearIncome) -> IncomeBreakdown {
    let basic = (a.survivor_basic + b.survivor_basic).floor() as i64;
    let welfare = (a.survivor_welfare + b.survivor_welfare).floor() as i64;
    let widow = (a.survivor_widow + b.survivor_widow).floor() as i64;

    IncomeBreakdown {
        salary: (a.salary + b.salary).floor() as i64,
        leave_benefit: (a.leave_benefit + b.leave_benefit).floor() as i64,
        business: (a.business + b.business).floor() as i64,
        retirement: (a.retirement + b.retirement).floor() as i64,
        pension: (a.pension + b.pension).floor() as i64,
        survivor: SurvivorBreakdown {
            basic,
            welfare,
            widow,
            total: basic + welfare + widow,
        },
        insurance: (a.insurance + b.insurance).floor() as i64,
    }
}
