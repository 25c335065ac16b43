//! Mortgage rate sensitivity across parallel projection runs
//!
//! Projects the same household under a ladder of rate-curve shifts and
//! compares the resulting trajectories.

use clap::Parser;
use lifeplan_engine::household::{loader, HouseholdConfig};
use lifeplan_engine::ScenarioRunner;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "rate_scenarios", version, about = "Mortgage rate stress comparison")]
struct Args {
    /// Path to a household snapshot JSON; the built-in example runs if omitted
    #[arg(long)]
    snapshot: Option<std::path::PathBuf>,

    /// Parallel upward shifts (percentage points) applied to the base curve
    #[arg(long, value_delimiter = ',', default_value = "0.0,0.5,1.0,1.5,2.0")]
    shifts: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.snapshot {
        Some(path) => loader::load_snapshot(path)?,
        None => HouseholdConfig::example(),
    };

    let base_curve = base.loan.rates.clone();
    let curves: Vec<Vec<f64>> = args
        .shifts
        .iter()
        .map(|shift| base_curve.iter().map(|r| r + shift).collect())
        .collect();

    println!("Running {} rate scenarios...", curves.len());
    let start = Instant::now();

    let runner = ScenarioRunner::new(base);
    let results = runner.run_rate_curves(&curves);

    println!("Done in {:?}\n", start.elapsed());
    println!(
        "{:>7} {:>16} {:>16} {:>16} {:>10}",
        "Shift", "TotalInterest", "MinCash", "FinalAssets", "Shortfall"
    );
    println!("{}", "-".repeat(70));

    for (shift, result) in args.shifts.iter().zip(&results) {
        let summary = result.summary();
        let total_interest: i64 = result
            .records
            .iter()
            .map(|r| r.mortgage_payment)
            .sum::<i64>()
            - runner.base().loan.total as i64;

        println!(
            "{:>6.2}% {:>16} {:>16} {:>16} {:>10}",
            shift,
            total_interest,
            summary.min_cash_balance,
            summary.final_total_assets,
            match summary.first_shortfall_year {
                Some(year) => format!("year {}", year),
                None => "-".to_string(),
            }
        );
    }

    Ok(())
}
