//! Scenario runner for batch projections over config variants
//!
//! Projections are pure and independent, so variants fan out across threads.

use crate::household::HouseholdConfig;
use crate::projection::{ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Pre-configured runner for projecting many variants of one base household
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(base_config);
/// let results = runner.run_rate_curves(&[
///     vec![0.4, 0.4, 0.8, 1.0, 1.2, 1.5, 1.8],
///     vec![0.9, 0.9, 1.3, 1.5, 1.7, 2.0, 2.3],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: HouseholdConfig,
}

impl ScenarioRunner {
    pub fn new(base: HouseholdConfig) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &HouseholdConfig {
        &self.base
    }

    /// Project the base household unchanged
    pub fn run(&self) -> ProjectionResult {
        ProjectionEngine::new(self.base.clone()).project()
    }

    /// Project arbitrary config variants in parallel
    pub fn run_batch(&self, variants: Vec<HouseholdConfig>) -> Vec<ProjectionResult> {
        variants
            .into_par_iter()
            .map(|config| ProjectionEngine::new(config).project())
            .collect()
    }

    /// Project the base household under each mortgage rate curve, in parallel
    pub fn run_rate_curves(&self, curves: &[Vec<f64>]) -> Vec<ProjectionResult> {
        curves
            .par_iter()
            .map(|curve| {
                let mut config = self.base.clone();
                config.loan.rates = curve.clone();
                ProjectionEngine::new(config).project()
            })
            .collect()
    }
}
