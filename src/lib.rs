//! Lifeplan Engine - Household cash-flow projection over a 35-year horizon
//!
//! This library provides:
//! - Two-track mortgage amortization with variable rate curves
//! - Fixed-asset (property) tax scheduling with depreciation and relief rules
//! - Education cost, child allowance, and mortgage tax-credit estimation
//! - Per-person income projection (salary growth, parental leave, reduced
//!   hours, side business, retirement lump sums, old-age and survivor pensions)
//! - Asset growth simulation reconciling income, expenses, and investments
//! - Multi-scenario batch runs and plan review heuristics

pub mod advice;
pub mod assets;
pub mod family;
pub mod household;
pub mod income;
pub mod mortgage;
pub mod projection;
pub mod scenario;
pub mod tax;

/// Number of simulated years in every trajectory.
pub const HORIZON_YEARS: usize = 35;

/// Length of one rate-curve block in years.
pub const RATE_BLOCK_YEARS: usize = 5;

// Re-export commonly used types
pub use household::{HouseholdConfig, PersonConfig, Role};
pub use mortgage::{amortize, MortgageYear};
pub use projection::{AnnualRecord, PlanSummary, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
