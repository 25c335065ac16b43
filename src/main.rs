//! Lifeplan Engine CLI
//!
//! Runs a 35-year household projection from a JSON snapshot (or a built-in
//! example household), prints the trajectory, and exports the full schedule
//! as CSV.

use anyhow::Context;
use clap::Parser;
use lifeplan_engine::advice::review_plan;
use lifeplan_engine::household::{loader, HouseholdConfig};
use lifeplan_engine::projection::{ProjectionEngine, ProjectionResult};

#[derive(Parser)]
#[command(name = "lifeplan_engine", version, about = "Household life-plan projection")]
struct Args {
    /// Path to a household snapshot JSON; the built-in example runs if omitted
    #[arg(long)]
    snapshot: Option<std::path::PathBuf>,

    /// Where to write the full 35-year schedule as CSV
    #[arg(long, default_value = "projection_output.csv")]
    output: std::path::PathBuf,

    /// How many years to print to the console
    #[arg(long, default_value_t = 15)]
    show_years: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Lifeplan Engine v0.1.0");
    println!("======================\n");

    let household = match &args.snapshot {
        Some(path) => loader::load_snapshot(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?,
        None => {
            println!("No snapshot given; projecting the built-in example household.\n");
            HouseholdConfig::example()
        }
    };

    println!("Loan: {:.0} yen over 35 years", household.loan.total);
    println!(
        "Main earner: age {}, {:.0} yen/month",
        household.main.age, household.main.monthly_salary
    );
    println!(
        "Partner: age {}, {:.0} yen/month",
        household.partner.age, household.partner.monthly_salary
    );
    println!("Children: {}\n", household.children.len());

    let engine = ProjectionEngine::new(household);
    let result = engine.project();

    println!(
        "{:>4} {:>13} {:>13} {:>13} {:>11} {:>13} {:>13} {:>13}",
        "Year", "Income", "Mortgage", "Education", "Tax", "Cash", "Invested", "Total"
    );
    println!("{}", "-".repeat(100));

    for record in result.records.iter().take(args.show_years) {
        println!(
            "{:>4} {:>13} {:>13} {:>13} {:>11} {:>13} {:>13} {:>13}",
            record.year,
            record.income_total,
            record.mortgage_payment,
            record.education_cost,
            record.fixed_asset_tax,
            record.cash_balance,
            record.investment_balance,
            record.total_assets,
        );
    }
    if result.records.len() > args.show_years {
        println!("... ({} more years)", result.records.len() - args.show_years);
    }

    write_csv(&args.output, &result)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("\nFull schedule written to: {}", args.output.display());

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Lifetime income:  {:>15} yen", summary.total_income);
    println!("  Lifetime expense: {:>15} yen", summary.total_expense);
    println!("  Peak assets:      {:>15} yen", summary.peak_total_assets);
    println!("  Minimum cash:     {:>15} yen", summary.min_cash_balance);
    println!("  Final assets:     {:>15} yen", summary.final_total_assets);
    if let Some(year) = summary.first_shortfall_year {
        println!("  Cash first goes negative in year {}", year);
    }

    let review = review_plan(&result);
    println!("\nReview: {} (score {})", review.headline, review.score);
    for message in &review.messages {
        println!("  [{:?}] {}", message.kind, message.text);
    }

    Ok(())
}

fn write_csv(path: &std::path::Path, result: &ProjectionResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "Year",
        "IncomeTotal",
        "Salary",
        "LeaveBenefit",
        "Business",
        "Retirement",
        "Pension",
        "SurvivorBasic",
        "SurvivorWelfare",
        "SurvivorWidow",
        "Insurance",
        "MortgagePayment",
        "MortgageRemaining",
        "TaxDeduction",
        "EducationCost",
        "ChildAllowance",
        "LivingCost",
        "FixedAssetTax",
        "OtherExpense",
        "InvestmentContribution",
        "CashBalance",
        "InvestmentBalance",
        "TotalAssets",
    ])?;

    for r in &result.records {
        writer.write_record([
            r.year.to_string(),
            r.income_total.to_string(),
            r.income.salary.to_string(),
            r.income.leave_benefit.to_string(),
            r.income.business.to_string(),
            r.income.retirement.to_string(),
            r.income.pension.to_string(),
            r.income.survivor.basic.to_string(),
            r.income.survivor.welfare.to_string(),
            r.income.survivor.widow.to_string(),
            r.income.insurance.to_string(),
            r.mortgage_payment.to_string(),
            r.mortgage_remaining.to_string(),
            r.tax_deduction.to_string(),
            r.education_cost.to_string(),
            r.child_allowance.to_string(),
            r.living_cost.to_string(),
            r.fixed_asset_tax.to_string(),
            r.other_expense.to_string(),
            r.investment_contribution.to_string(),
            r.cash_balance.to_string(),
            r.investment_balance.to_string(),
            r.total_assets.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
