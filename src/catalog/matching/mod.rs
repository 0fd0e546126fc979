//! Eligibility matching between a user profile and a scholarship record.
//!
//! The rubric is fixed: education level is a 40-point hard gate, CGPA,
//! family income, and category each carry 20 points. Every dimension that
//! loses points contributes one human-readable reason so the frontend can
//! explain the score.

mod rules;
mod selector;

pub use rules::FULL_MATCH;
pub use selector::eligible_candidates;

use serde::Serialize;

use super::domain::{Scholarship, UserProfile};

/// Exact reason text consumers rely on to distinguish "no profile" from a
/// genuinely low score.
pub const PROFILE_MISSING_REASON: &str = "Profile not completed.";

/// Rubric outcome before collapsing for the API: the hard gates produce
/// `Rejected`, everything else accumulates under `Scored`.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Rejected { reason: String },
    Scored { score: u8, reasons: Vec<String> },
}

impl MatchOutcome {
    pub fn into_result(self) -> MatchResult {
        match self {
            MatchOutcome::Rejected { reason } => MatchResult {
                score: 0,
                reasons: vec![reason],
            },
            MatchOutcome::Scored { score, reasons } => MatchResult { score, reasons },
        }
    }
}

/// Score in `[0, 100]` plus one reason per dimension that lost points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Score one scholarship against one profile. Pure and synchronous; both
/// inputs are fetched by the caller.
pub fn match_score(scholarship: &Scholarship, profile: Option<&UserProfile>) -> MatchResult {
    evaluate(scholarship, profile).into_result()
}

pub fn evaluate(scholarship: &Scholarship, profile: Option<&UserProfile>) -> MatchOutcome {
    let Some(profile) = profile else {
        return MatchOutcome::Rejected {
            reason: PROFILE_MISSING_REASON.to_string(),
        };
    };

    // The list endpoint pre-filters candidates with a normalized comparison;
    // this gate is stricter (exact, untrimmed) and stays authoritative for
    // callers that skip the filter, such as direct detail lookups.
    if profile.highest_education.as_deref() != Some(scholarship.education_level.as_str()) {
        return MatchOutcome::Rejected {
            reason: format!(
                "Education level mismatch (Requires {})",
                scholarship.education_level
            ),
        };
    }

    let mut score = rules::EDUCATION_WEIGHT;
    let mut reasons = Vec::new();

    let (points, reason) = rules::cgpa_points(profile.cgpa);
    score += points;
    reasons.extend(reason);

    if let Some((points, reason)) =
        rules::income_points(profile.family_income, scholarship.annual_income)
    {
        score += points;
        reasons.extend(reason);
    }

    if let Some((points, reason)) = rules::category_points(profile.category, scholarship.category) {
        score += points;
        reasons.extend(reason);
    }

    // The weights sum to 100 by construction; the clamp guards future rubric
    // edits.
    MatchOutcome::Scored {
        score: score.min(rules::FULL_MATCH),
        reasons,
    }
}
