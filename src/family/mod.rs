//! Child-related cost and benefit schedules

mod allowance;
mod education;

pub use allowance::child_allowance_schedule;
pub use education::education_cost_schedule;
