//! Gross-to-net income conversion and the related one-shot formulas
//!
//! The net-income conversion is a deliberate flat-rate approximation, not a
//! progressive computation; the retirement lump sum is the one place a real
//! bracket table applies.

/// Full-coverage national pension component, yen per month
const NATIONAL_PENSION_MONTHLY: f64 = 66_000.0;

/// Earnings-related pension accrual coefficient per month of coverage
const EARNINGS_ACCRUAL: f64 = 0.005481;

/// Annual gross to annual net via a flat-rate band lookup.
///
/// Bands: up to 3M 80%, up to 6M 78%, up to 10M 75%, above 70%.
pub fn estimate_net_income(annual_gross: f64) -> f64 {
    let rate = if annual_gross > 10_000_000.0 {
        0.70
    } else if annual_gross > 6_000_000.0 {
        0.75
    } else if annual_gross > 3_000_000.0 {
        0.78
    } else {
        0.80
    };
    annual_gross * rate
}

/// Result of a leave-adjusted net income split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedNetIncome {
    /// Worked (taxed) net plus the tax-free leave benefit
    pub total: f64,

    /// Net income from the months actually worked
    pub worked_net: f64,

    /// Tax-free parental leave benefit
    pub leave_benefit: f64,
}

/// Split a year's salary and bonus into a taxed worked portion and the
/// tax-free parental leave benefit.
///
/// The benefit tier depends on the cumulative leave month across the whole
/// career: the first month pays 80% of the monthly salary equivalent, months
/// 2-6 pay 67%, and every month after pays 50%. With the opt-in disabled the
/// benefit is zero while the worked proration still applies.
pub fn adjusted_net_income(
    annual_salary_gross: f64,
    annual_bonus_gross: f64,
    leave_months: u32,
    benefit_opt_in: bool,
    prior_leave_months: u32,
) -> AdjustedNetIncome {
    if leave_months == 0 {
        let total = estimate_net_income(annual_salary_gross + annual_bonus_gross).floor();
        return AdjustedNetIncome {
            total,
            worked_net: total,
            leave_benefit: 0.0,
        };
    }

    let worked_months = 12u32.saturating_sub(leave_months) as f64;
    let worked_salary = annual_salary_gross / 12.0 * worked_months;
    let worked_bonus = annual_bonus_gross / 12.0 * worked_months;
    let worked_net = estimate_net_income(worked_salary + worked_bonus);

    let monthly_salary = annual_salary_gross / 12.0;
    let mut benefit = 0.0;
    if benefit_opt_in {
        for m in 0..leave_months {
            let career_month = prior_leave_months + m;
            let rate = if career_month == 0 {
                0.80
            } else if career_month < 6 {
                0.67
            } else {
                0.50
            };
            benefit += monthly_salary * rate;
        }
    }

    AdjustedNetIncome {
        total: (worked_net + benefit).floor(),
        worked_net: worked_net.floor(),
        leave_benefit: benefit.floor(),
    }
}

/// Progressive income tax on taxable retirement income
fn income_tax(taxable: f64) -> f64 {
    if taxable <= 1_950_000.0 {
        taxable * 0.05
    } else if taxable <= 3_300_000.0 {
        taxable * 0.10 - 97_500.0
    } else if taxable <= 6_950_000.0 {
        taxable * 0.20 - 427_500.0
    } else if taxable <= 9_000_000.0 {
        taxable * 0.23 - 636_000.0
    } else if taxable <= 18_000_000.0 {
        taxable * 0.33 - 1_536_000.0
    } else {
        taxable * 0.40 - 2_796_000.0
    }
}

/// Net retirement lump sum after the retirement income deduction, progressive
/// income tax, the 2.1% reconstruction surtax, and 10% resident tax.
///
/// The service-years deduction is 400k per year up to 20 years, then 8M plus
/// 700k per further year; only half the excess is taxable. A lump sum fully
/// covered by the deduction is returned untaxed.
pub fn retirement_net(gross: f64, years_of_service: u32) -> f64 {
    if gross <= 0.0 {
        return 0.0;
    }

    let years = years_of_service as f64;
    let deduction = if years_of_service <= 20 {
        400_000.0 * years
    } else {
        8_000_000.0 + 700_000.0 * (years - 20.0)
    };

    let taxable = ((gross - deduction) * 0.5).max(0.0);
    if taxable <= 0.0 {
        return gross;
    }

    let base_tax = income_tax(taxable);
    let reconstruction = base_tax * 0.021;
    let resident = taxable * 0.10;

    (gross - (base_tax + reconstruction + resident)).floor()
}

/// Estimated monthly old-age pension, net of tax and insurance.
///
/// Flat national component plus the earnings-related component accrued over
/// the coverage years, taken at 90% and floored to 1,000-yen granularity.
pub fn pension_estimate_monthly(
    career_average_annual_gross: f64,
    service_start_age: u8,
    retirement_age: u8,
) -> f64 {
    if career_average_annual_gross <= 0.0 {
        return 0.0;
    }

    let coverage_years = (retirement_age as i64 - service_start_age as i64).max(0) as f64;
    let monthly_remuneration = career_average_annual_gross / 12.0;
    let earnings_related = monthly_remuneration * EARNINGS_ACCRUAL * coverage_years;

    let net = (NATIONAL_PENSION_MONTHLY + earnings_related) * 0.9;
    (net / 1_000.0).floor() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_net_income_bands() {
        assert_relative_eq!(estimate_net_income(3_000_000.0), 2_400_000.0);
        assert_relative_eq!(estimate_net_income(5_000_000.0), 3_900_000.0);
        assert_relative_eq!(estimate_net_income(8_000_000.0), 6_000_000.0);
        assert_relative_eq!(estimate_net_income(12_000_000.0), 8_400_000.0);
    }

    #[test]
    fn test_leave_benefit_tiering() {
        // 500k/month, 7 months of leave from a clean history:
        // 1 month at 80%, 5 at 67%, 1 at 50%
        let result = adjusted_net_income(6_000_000.0, 0.0, 7, true, 0);

        let expected_benefit: f64 = 500_000.0 * (0.80 + 5.0 * 0.67 + 0.50);
        assert_relative_eq!(result.leave_benefit, expected_benefit.floor());

        // 5 worked months of a 6M salary net at the 80% band
        assert_relative_eq!(result.worked_net, (2_500_000.0_f64 * 0.8).floor());
        assert_relative_eq!(result.total, result.worked_net + result.leave_benefit);
    }

    #[test]
    fn test_leave_benefit_opt_out() {
        let result = adjusted_net_income(6_000_000.0, 0.0, 7, false, 0);
        assert_eq!(result.leave_benefit, 0.0);
        assert_relative_eq!(result.worked_net, (2_500_000.0_f64 * 0.8).floor());
    }

    #[test]
    fn test_leave_tier_continuation_across_years() {
        // 6 prior months exhaust the 80%/67% tiers; everything further is 50%
        let result = adjusted_net_income(6_000_000.0, 0.0, 3, true, 6);
        assert_relative_eq!(result.leave_benefit, (500_000.0_f64 * 0.50 * 3.0).floor());
    }

    #[test]
    fn test_no_leave_passthrough() {
        let result = adjusted_net_income(6_000_000.0, 1_200_000.0, 0, true, 0);
        assert_relative_eq!(result.total, (7_200_000.0_f64 * 0.75).floor());
        assert_eq!(result.leave_benefit, 0.0);
    }

    #[test]
    fn test_retirement_fully_deducted() {
        // 38 years of service gives a 20.6M deduction; 20M gross is untaxed
        assert_relative_eq!(retirement_net(20_000_000.0, 38), 20_000_000.0);
    }

    #[test]
    fn test_retirement_taxed() {
        // 30M gross, 38 years: taxable (30M - 20.6M) / 2 = 4.7M
        // income tax 4.7M*0.20 - 427.5k = 512.5k, surtax 10,762.5,
        // resident 470k -> net 29,006,737
        assert_relative_eq!(retirement_net(30_000_000.0, 38), 29_006_737.0);
    }

    #[test]
    fn test_retirement_zero_gross() {
        assert_eq!(retirement_net(0.0, 38), 0.0);
    }

    #[test]
    fn test_pension_estimate() {
        // 6.6M career average, 43 years coverage:
        // 550k * 0.005481 * 43 = 129,625.65 + 66,000, at 90% -> 176,063
        // floored to the 1,000-yen grid
        assert_relative_eq!(pension_estimate_monthly(6_600_000.0, 22, 65), 176_000.0);
    }

    #[test]
    fn test_pension_estimate_no_coverage() {
        // Retirement before service start clamps coverage to zero:
        // only the national component remains
        let expected = ((NATIONAL_PENSION_MONTHLY * 0.9) / 1_000.0).floor() * 1_000.0;
        assert_relative_eq!(pension_estimate_monthly(6_000_000.0, 65, 60), expected);
    }
}
