//! Per-person configuration: salary, leave, reduced hours, retirement,
//! pension, death assumptions, and term-insurance coverage

use serde::{Deserialize, Serialize};

/// Which of the two household earners a config or schedule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Main,
    Partner,
}

/// Parental leave window and benefit opt-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveConfig {
    /// Whether any leave is taken at all
    pub enabled: bool,

    /// Simulation year (1-indexed) the leave starts in
    pub start_year: u32,

    /// Total leave length in months; may spill into later years
    pub duration_months: u32,

    /// Whether the tiered leave benefit (80%/67%/50%) is received
    pub benefit_opt_in: bool,
}

impl Default for LeaveConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_year: 1,
            duration_months: 0,
            benefit_opt_in: false,
        }
    }
}

impl LeaveConfig {
    /// Months of leave falling inside a given simulation year (1-indexed).
    ///
    /// The leave occupies the month range
    /// `[(start_year-1)*12, (start_year-1)*12 + duration_months)`; the result
    /// is the overlap with the year's own 12-month window.
    pub fn months_in_year(&self, year: u32) -> u32 {
        if !self.enabled || self.duration_months == 0 || self.start_year == 0 {
            return 0;
        }
        let leave_start = (self.start_year - 1) * 12;
        let leave_end = leave_start + self.duration_months;
        let year_start = (year - 1) * 12;
        let year_end = year_start + 12;

        let overlap_start = leave_start.max(year_start);
        let overlap_end = leave_end.min(year_end);
        overlap_end.saturating_sub(overlap_start)
    }
}

/// Reduced-working-hours ("jitan") arrangement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReducedHoursConfig {
    pub enabled: bool,

    /// Simulation year (1-indexed) the arrangement starts in
    pub start_year: u32,

    /// How many years it lasts
    pub duration_years: u32,

    /// Percentage of full pay received while active (e.g. 80.0)
    pub pay_ratio_pct: f64,
}

impl Default for ReducedHoursConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_year: 1,
            duration_years: 0,
            pay_ratio_pct: 100.0,
        }
    }
}

impl ReducedHoursConfig {
    /// Whether the arrangement is active in a given simulation year
    pub fn active_in(&self, year: u32) -> bool {
        self.enabled
            && self.duration_years > 0
            && year >= self.start_year
            && year < self.start_year + self.duration_years
    }

    /// Pay ratio as a factor, clamped at 0
    pub fn ratio(&self) -> f64 {
        self.pay_ratio_pct.max(0.0) / 100.0
    }
}

/// Side-business income window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideBusinessConfig {
    pub enabled: bool,

    /// Annual gross side income in yen
    pub annual_gross: f64,

    /// Simulation year (1-indexed) the business starts in
    pub start_year: u32,

    /// How many years it runs
    pub duration_years: u32,
}

impl Default for SideBusinessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            annual_gross: 0.0,
            start_year: 1,
            duration_years: 35,
        }
    }
}

impl SideBusinessConfig {
    pub fn active_in(&self, year: u32) -> bool {
        self.enabled
            && self.annual_gross > 0.0
            && year >= self.start_year
            && year < self.start_year + self.duration_years
    }
}

/// How the retirement lump sum is determined
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RetirementAmount {
    /// Fixed gross amount in yen
    Manual { amount: f64 },
    /// Projected monthly salary at retirement x years of service x multiplier
    Auto { multiplier: f64 },
}

/// Retirement lump-sum configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementConfig {
    /// Age employment started; drives years of service
    pub service_start_age: u8,

    #[serde(flatten)]
    pub amount: RetirementAmount,
}

impl Default for RetirementConfig {
    fn default() -> Self {
        Self {
            service_start_age: 22,
            amount: RetirementAmount::Manual { amount: 0.0 },
        }
    }
}

/// How the old-age pension amount is determined
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PensionAmount {
    /// Fixed monthly amount in yen
    Manual { monthly: f64 },
    /// Estimated from career-average gross and years of coverage
    Auto,
}

/// Old-age pension configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PensionConfig {
    /// Age the pension starts paying
    pub start_age: u8,

    /// Age coverage started; drives years of coverage in auto mode
    pub service_start_age: u8,

    #[serde(flatten)]
    pub amount: PensionAmount,
}

impl Default for PensionConfig {
    fn default() -> Self {
        Self {
            start_age: 65,
            service_start_age: 22,
            amount: PensionAmount::Manual { monthly: 0.0 },
        }
    }
}

/// Simulated death assumption for stress planning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeathConfig {
    pub enabled: bool,

    /// Age at which the person dies in the simulation
    pub age: u8,
}

impl Default for DeathConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            age: 60,
        }
    }
}

/// Private term-insurance coverage on one person's life
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceCoverage {
    /// Monthly premium in yen, paid while the person is alive
    pub premium_monthly: f64,

    /// Monthly survivor annuity in yen paid after death
    pub benefit_monthly: f64,

    /// Annuity pays while the youngest child is at most this age
    pub benefit_duration_years: i32,
}

impl Default for InsuranceCoverage {
    fn default() -> Self {
        Self {
            premium_monthly: 0.0,
            benefit_monthly: 0.0,
            benefit_duration_years: 18,
        }
    }
}

/// Full configuration for one household earner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonConfig {
    /// Age at simulation year 0
    pub age: u8,

    /// Age working income stops
    pub retirement_age: u8,

    /// Gross monthly salary in yen at year 0
    pub monthly_salary: f64,

    /// Gross annual bonus in yen at year 0
    pub annual_bonus: f64,

    /// Annual salary growth rate in percent
    pub salary_growth_pct: f64,

    #[serde(default)]
    pub leave: LeaveConfig,

    #[serde(default)]
    pub reduced_hours: ReducedHoursConfig,

    #[serde(default)]
    pub side_business: SideBusinessConfig,

    #[serde(default)]
    pub retirement: RetirementConfig,

    #[serde(default)]
    pub pension: PensionConfig,

    #[serde(default)]
    pub death: DeathConfig,

    #[serde(default)]
    pub insurance: InsuranceCoverage,
}

impl PersonConfig {
    /// Age reached in simulation year index `i` (0-based)
    pub fn age_at(&self, year_index: usize) -> u32 {
        self.age as u32 + year_index as u32
    }

    /// Whether the simulated death has occurred by year index `i`
    pub fn is_dead_at(&self, year_index: usize) -> bool {
        self.death.enabled && self.age_at(year_index) >= self.death.age as u32
    }

    /// Gross annual salary at year 0 (12 monthly payments, bonus excluded)
    pub fn annual_salary(&self) -> f64 {
        self.monthly_salary * 12.0
    }

    /// Gross annual salary plus bonus at year 0
    pub fn annual_gross(&self) -> f64 {
        self.annual_salary() + self.annual_bonus
    }

    /// Salary growth factor compounded to year index `i`
    pub fn growth_factor(&self, year_index: usize) -> f64 {
        (1.0 + self.salary_growth_pct / 100.0).powi(year_index as i32)
    }

    /// Years of service at retirement, at least 1
    pub fn years_of_service(&self) -> u32 {
        (self.retirement_age as i64 - self.retirement.service_start_age as i64).max(1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_overlap_single_year() {
        let leave = LeaveConfig {
            enabled: true,
            start_year: 2,
            duration_months: 7,
            benefit_opt_in: true,
        };

        assert_eq!(leave.months_in_year(1), 0);
        assert_eq!(leave.months_in_year(2), 7);
        assert_eq!(leave.months_in_year(3), 0);
    }

    #[test]
    fn test_leave_overlap_spillover() {
        let leave = LeaveConfig {
            enabled: true,
            start_year: 1,
            duration_months: 18,
            benefit_opt_in: true,
        };

        assert_eq!(leave.months_in_year(1), 12);
        assert_eq!(leave.months_in_year(2), 6);
        assert_eq!(leave.months_in_year(3), 0);
    }

    #[test]
    fn test_leave_disabled_is_zero() {
        let leave = LeaveConfig {
            enabled: false,
            start_year: 1,
            duration_months: 12,
            benefit_opt_in: true,
        };
        assert_eq!(leave.months_in_year(1), 0);
    }

    #[test]
    fn test_reduced_hours_window() {
        let jitan = ReducedHoursConfig {
            enabled: true,
            start_year: 3,
            duration_years: 2,
            pay_ratio_pct: 80.0,
        };

        assert!(!jitan.active_in(2));
        assert!(jitan.active_in(3));
        assert!(jitan.active_in(4));
        assert!(!jitan.active_in(5));
    }

    #[test]
    fn test_years_of_service_floor() {
        let person = PersonConfig {
            age: 30,
            retirement_age: 20, // nonsensical, clamps to 1 year
            monthly_salary: 300_000.0,
            annual_bonus: 0.0,
            salary_growth_pct: 0.0,
            leave: LeaveConfig::default(),
            reduced_hours: ReducedHoursConfig::default(),
            side_business: SideBusinessConfig::default(),
            retirement: RetirementConfig::default(),
            pension: PensionConfig::default(),
            death: DeathConfig::default(),
            insurance: InsuranceCoverage::default(),
        };
        assert_eq!(person.years_of_service(), 1);
    }
}
