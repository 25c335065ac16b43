//! Deterministic plan review heuristics
//!
//! Scores a projected trajectory and emits human-readable findings. The
//! [`crate::projection::PlanSummary`] plus the raw config echo is also the
//! input contract for the external AI-advice generator; that collaborator is
//! free-text and lives outside this crate.

use crate::household::HouseholdConfig;
use crate::projection::{PlanSummary, ProjectionResult};
use serde::{Deserialize, Serialize};

/// Cash reserve under which the plan is flagged as thin, yen
const THIN_RESERVE: i64 = 1_000_000;

/// Final-asset level under which old-age funding is flagged, yen
const OLD_AGE_TARGET: i64 = 20_000_000;

/// Overall plan health classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Safe,
    Warning,
    Danger,
}

/// Severity of one review finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Danger,
    Warning,
    Info,
    Success,
}

/// One review finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Result of a heuristic plan review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReview {
    pub status: PlanStatus,

    /// 0-100 health score
    pub score: u8,

    pub headline: String,
    pub messages: Vec<ReviewMessage>,
}

/// Everything the external advice generator consumes: the derived summary
/// plus the raw configuration echo. Serialized opaquely; nothing the
/// generator returns ever feeds back into the projection.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceContext<'a> {
    pub summary: PlanSummary,
    pub household: &'a HouseholdConfig,
}

/// Build the advice-generator input for a finished projection
pub fn advice_context<'a>(
    household: &'a HouseholdConfig,
    result: &ProjectionResult,
) -> AdviceContext<'a> {
    AdviceContext {
        summary: result.summary(),
        household,
    }
}

/// Review a projected trajectory
pub fn review_plan(result: &ProjectionResult) -> PlanReview {
    let summary = result.summary();
    let mut messages = Vec::new();

    let (mut status, mut score, mut headline) = if summary.min_cash_balance < 0 {
        let year = summary.first_shortfall_year.unwrap_or(1);
        messages.push(ReviewMessage {
            kind: MessageKind::Danger,
            text: format!(
                "Cash goes negative in year {}. Spending cuts or smaller investment \
                 contributions are needed to keep the plan funded.",
                year
            ),
        });
        (
            PlanStatus::Danger,
            30i32,
            "The plan runs out of cash".to_string(),
        )
    } else if summary.min_cash_balance < THIN_RESERVE {
        messages.push(ReviewMessage {
            kind: MessageKind::Warning,
            text: "Cash reserves dip below one million yen at some point. Keeping a \
                   larger buffer against unexpected expenses is recommended."
                .to_string(),
        });
        (
            PlanStatus::Warning,
            60i32,
            "Cash reserves run thin".to_string(),
        )
    } else {
        messages.push(ReviewMessage {
            kind: MessageKind::Success,
            text: "Cash never runs short across the simulated horizon.".to_string(),
        });
        (PlanStatus::Safe, 80i32, "A stable funding plan".to_string())
    };

    if summary.final_total_assets < OLD_AGE_TARGET {
        if status == PlanStatus::Safe {
            status = PlanStatus::Warning;
            score = score.min(70);
            headline.push_str(" (old-age funding needs review)");
        }
        messages.push(ReviewMessage {
            kind: MessageKind::Warning,
            text: format!(
                "Total assets after 35 years are {} million yen, short of the \
                 20-million old-age benchmark. Consider larger contributions or a \
                 longer working life.",
                summary.final_total_assets / 1_000_000
            ),
        });
    } else {
        score += 10;
        messages.push(ReviewMessage {
            kind: MessageKind::Success,
            text: format!(
                "About {} million yen of assets are projected after 35 years, a \
                 solid old-age position.",
                summary.final_total_assets / 1_000_000
            ),
        });
    }

    if summary.final_total_assets > 0 {
        let invest_ratio =
            summary.final_investment_balance as f64 / summary.final_total_assets as f64;
        if invest_ratio > 0.8 {
            messages.push(ReviewMessage {
                kind: MessageKind::Info,
                text: "Most assets end up in investments; check the risk tolerance \
                       against a market downturn."
                    .to_string(),
            });
        } else if invest_ratio < 0.1 && summary.min_cash_balance > 0 {
            messages.push(ReviewMessage {
                kind: MessageKind::Info,
                text: "The cash share is high; moving part of it into investments \
                       could hedge inflation."
                    .to_string(),
            });
        }
    }

    PlanReview {
        status,
        score: score.clamp(0, 100) as u8,
        headline,
        messages,
    }
}
