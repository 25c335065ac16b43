//! Household configuration: the immutable input snapshot a projection runs on

mod child;
mod investment;
mod person;
mod property;
pub mod loader;

pub use child::{Child, EducationPath, SchoolTrack, UniversityTrack};
pub use investment::{AssetsConfig, InvestmentVehicle};
pub use person::{
    DeathConfig, InsuranceCoverage, LeaveConfig, PensionAmount, PensionConfig, PersonConfig,
    ReducedHoursConfig, RetirementAmount, RetirementConfig, Role, SideBusinessConfig,
};
pub use property::{
    AssessmentConfig, FixedAssetTaxMethod, PerformanceTier, PropertyConfig, Structure,
};

use serde::{Deserialize, Serialize};

/// A named expense line item, in yen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: f64,
}

impl ExpenseItem {
    pub fn new(name: &str, amount: f64) -> Self {
        Self {
            name: name.to_string(),
            amount,
        }
    }
}

/// Split of the household loan between the two borrowers (pair loan).
/// The partner carries the remainder of each principal, clamped at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairLoanSplit {
    /// Main borrower's share of the total principal, in yen
    pub main_principal: f64,

    /// Main borrower's share of the bonus-track principal, in yen
    pub main_bonus: f64,
}

/// Mortgage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Total borrowed principal in yen
    pub total: f64,

    /// Portion of the principal repaid via semi-annual bonus installments
    #[serde(default)]
    pub bonus_principal: f64,

    /// Annual rates in percent, one per consecutive 5-year block
    pub rates: Vec<f64>,

    /// Whether the mortgage tax credit applies
    #[serde(default = "default_true")]
    pub has_deduction: bool,

    /// Present when the loan is split between both borrowers
    #[serde(default)]
    pub pair_split: Option<PairLoanSplit>,
}

fn default_true() -> bool {
    true
}

/// The complete input snapshot for one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdConfig {
    pub loan: LoanConfig,

    pub property: PropertyConfig,

    pub main: PersonConfig,

    pub partner: PersonConfig,

    #[serde(default)]
    pub children: Vec<Child>,

    /// Recurring living expenses; `amount` is monthly yen.
    /// Insurance premiums are carried separately per person.
    #[serde(default)]
    pub living_expenses: Vec<ExpenseItem>,

    /// One-time purchase costs netted out of initial savings at year 0;
    /// `amount` is total yen
    #[serde(default)]
    pub one_time_costs: Vec<ExpenseItem>,

    #[serde(default)]
    pub assets: AssetsConfig,

    /// Whether the child allowance stipend is received
    #[serde(default)]
    pub child_allowance_enabled: bool,

    /// Regional tuition-support subsidies (high school and public university)
    #[serde(default)]
    pub regional_subsidy: bool,

    /// Free nursery / kindergarten support programs
    #[serde(default)]
    pub free_nursery: bool,
}

impl HouseholdConfig {
    pub fn person(&self, role: Role) -> &PersonConfig {
        match role {
            Role::Main => &self.main,
            Role::Partner => &self.partner,
        }
    }

    pub fn spouse_of(&self, role: Role) -> &PersonConfig {
        match role {
            Role::Main => &self.partner,
            Role::Partner => &self.main,
        }
    }

    /// Annual recurring living cost, excluding insurance premiums
    pub fn annual_living_cost(&self) -> f64 {
        self.living_expenses.iter().map(|e| e.amount).sum::<f64>() * 12.0
    }

    /// Savings remaining at year 0 after the purchase: deposit, down payment,
    /// and one-time costs come out before the year loop starts
    pub fn net_initial_savings(&self) -> f64 {
        let one_time: f64 = self.one_time_costs.iter().map(|e| e.amount).sum();
        self.assets.initial_savings - self.property.deposit - self.property.down_payment - one_time
    }

    /// A representative dual-income household used by the binaries and tests
    pub fn example() -> Self {
        Self {
            loan: LoanConfig {
                total: 40_000_000.0,
                bonus_principal: 10_000_000.0,
                rates: vec![0.4, 0.4, 0.8, 1.0, 1.2, 1.5, 1.8],
                has_deduction: true,
                pair_split: None,
            },
            property: PropertyConfig {
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
            },
            main: PersonConfig {
                age: 30,
                retirement_age: 65,
                monthly_salary: 450_000.0,
                annual_bonus: 1_200_000.0,
                salary_growth_pct: 0.0,
                leave: LeaveConfig::default(),
                reduced_hours: ReducedHoursConfig::default(),
                side_business: SideBusinessConfig::default(),
                retirement: RetirementConfig::default(),
                pension: PensionConfig::default(),
                death: DeathConfig::default(),
                insurance: InsuranceCoverage::default(),
            },
            partner: PersonConfig {
                age: 30,
                retirement_age: 65,
                monthly_salary: 300_000.0,
                annual_bonus: 800_000.0,
                salary_growth_pct: 0.0,
                leave: LeaveConfig::default(),
                reduced_hours: ReducedHoursConfig::default(),
                side_business: SideBusinessConfig::default(),
                retirement: RetirementConfig::default(),
                pension: PensionConfig::default(),
                death: DeathConfig::default(),
                insurance: InsuranceCoverage::default(),
            },
            children: vec![Child::new(2)],
            living_expenses: vec![
                ExpenseItem::new("Groceries", 70_000.0),
                ExpenseItem::new("Utilities", 25_000.0),
                ExpenseItem::new("Communications", 15_000.0),
                ExpenseItem::new("Household goods", 10_000.0),
                ExpenseItem::new("Clothing", 20_000.0),
                ExpenseItem::new("Medical", 10_000.0),
                ExpenseItem::new("Allowances", 60_000.0),
                ExpenseItem::new("Leisure", 40_000.0),
                ExpenseItem::new("Car upkeep", 15_000.0),
                ExpenseItem::new("Miscellaneous", 10_000.0),
            ],
            one_time_costs: vec![
                ExpenseItem::new("Registration and loan fees", 1_000_000.0),
                ExpenseItem::new("Moving", 200_000.0),
                ExpenseItem::new("Furniture and appliances", 1_000_000.0),
            ],
            assets: AssetsConfig {
                initial_savings: 5_000_000.0,
                investments: vec![InvestmentVehicle {
                    name: "Index fund accumulation".to_string(),
                    initial: 0.0,
                    monthly_contribution: 50_000.0,
                    contribution_years: 20,
                    annual_growth_pct: 5.0,
                }],
            },
            child_allowance_enabled: false,
            regional_subsidy: false,
            free_nursery: false,
        }
    }
}
