//! Projection output structures: the per-year annual record and the derived
//! plan summary

use serde::{Deserialize, Serialize};

/// Survivor pension portion of a year's income, floored yen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SurvivorBreakdown {
    pub basic: i64,
    pub welfare: i64,
    pub widow: i64,
    pub total: i64,
}

/// Household income breakdown for one year, floored yen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Worked net income including the reduced-hours subsidy
    pub salary: i64,

    /// Tax-free parental leave benefits
    pub leave_benefit: i64,

    /// Net side-business income
    pub business: i64,

    /// Net retirement lump sums
    pub retirement: i64,

    /// Old-age pensions
    pub pension: i64,

    pub survivor: SurvivorBreakdown,

    /// Private insurance annuities
    pub insurance: i64,
}

impl IncomeBreakdown {
    /// Sum of every category, each counted exactly once
    pub fn total(&self) -> i64 {
        self.salary
            + self.leave_benefit
            + self.business
            + self.retirement
            + self.pension
            + self.survivor.total
            + self.insurance
    }
}

/// One simulated year of the reconciled trajectory, in yen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualRecord {
    /// Simulation year, 1-indexed
    pub year: u32,

    pub income_total: i64,
    pub income: IncomeBreakdown,

    pub mortgage_payment: i64,
    pub mortgage_remaining: i64,

    /// Mortgage tax credit; reported, not fed into the cash trajectory
    pub tax_deduction: i64,

    pub education_cost: i64,

    /// Child allowance; reported, not fed into the cash trajectory
    pub child_allowance: i64,

    pub living_cost: i64,
    pub fixed_asset_tax: i64,

    /// Insurance premiums and other recurring non-living expenses
    pub other_expense: i64,

    pub investment_contribution: i64,

    pub cash_balance: i64,
    pub investment_balance: i64,
    pub total_assets: i64,
}

impl AnnualRecord {
    /// Cash-relevant expenses for the year
    pub fn total_expense(&self) -> i64 {
        self.mortgage_payment
            + self.education_cost
            + self.living_cost
            + self.fixed_asset_tax
            + self.other_expense
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub records: Vec<AnnualRecord>,
}

impl ProjectionResult {
    pub fn new(records: Vec<AnnualRecord>) -> Self {
        Self { records }
    }

    /// Derive the summary consumed by reporting and the advice collaborator
    pub fn summary(&self) -> PlanSummary {
        let final_record = self.records.last();

        let peak_total_assets = self.records.iter().map(|r| r.total_assets).max().unwrap_or(0);
        let min_cash_balance = self.records.iter().map(|r| r.cash_balance).min().unwrap_or(0);
        let first_shortfall_year = self
            .records
            .iter()
            .find(|r| r.cash_balance < 0)
            .map(|r| r.year);

        PlanSummary {
            final_total_assets: final_record.map(|r| r.total_assets).unwrap_or(0),
            final_cash_balance: final_record.map(|r| r.cash_balance).unwrap_or(0),
            final_investment_balance: final_record.map(|r| r.investment_balance).unwrap_or(0),
            peak_total_assets,
            min_cash_balance,
            first_shortfall_year,
            had_cash_shortfall: first_shortfall_year.is_some(),
            total_income: self.records.iter().map(|r| r.income_total).sum(),
            total_expense: self.records.iter().map(|r| r.total_expense()).sum(),
        }
    }
}

/// Headline figures of a trajectory, in yen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub final_total_assets: i64,
    pub final_cash_balance: i64,
    pub final_investment_balance: i64,
    pub peak_total_assets: i64,
    pub min_cash_balance: i64,

    /// First year (1-indexed) the cash balance goes negative
    pub first_shortfall_year: Option<u32>,
    pub had_cash_shortfall: bool,

    pub total_income: i64,
    pub total_expense: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: u32, cash: i64, total: i64) -> AnnualRecord {
        AnnualRecord {
            year,
            income_total: 0,
            income: IncomeBreakdown::default(),
            mortgage_payment: 0,
            mortgage_remaining: 0,
            tax_deduction: 0,
            education_cost: 0,
            child_allowance: 0,
            living_cost: 0,
            fixed_asset_tax: 0,
            other_expense: 0,
            investment_contribution: 0,
            cash_balance: cash,
            investment_balance: total - cash,
            total_assets: total,
        }
    }

    #[test]
    fn test_summary_shortfall_detection() {
        let result = ProjectionResult::new(vec![
            record(1, 1_000_000, 1_000_000),
            record(2, -500_000, 0),
            record(3, 200_000, 800_000),
        ]);

        let summary = result.summary();
        assert!(summary.had_cash_shortfall);
        assert_eq!(summary.first_shortfall_year, Some(2));
        assert_eq!(summary.min_cash_balance, -500_000);
        assert_eq!(summary.peak_total_assets, 1_000_000);
        assert_eq!(summary.final_total_assets, 800_000);
    }

    #[test]
    fn test_summary_without_shortfall() {
        let result = ProjectionResult::new(vec![record(1, 100, 100), record(2, 200, 300)]);
        let summary = result.summary();
        assert!(!summary.had_cash_shortfall);
        assert_eq!(summary.first_shortfall_year, None);
    }

    #[test]
    fn test_breakdown_total_counts_each_category_once() {
        let breakdown = IncomeBreakdown {
            salary: 100,
            leave_benefit: 10,
            business: 20,
            retirement: 30,
            pension: 40,
            survivor: SurvivorBreakdown {
                basic: 5,
                welfare: 6,
                widow: 7,
                total: 18,
            },
            insurance: 50,
        };
        assert_eq!(breakdown.total(), 100 + 10 + 20 + 30 + 40 + 18 + 50);
    }
}
