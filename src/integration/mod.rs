//! Public entry point for externally-produced score sets.
//!
//! An upstream scoring pipeline (human grader or AI-assisted) hands over a
//! quality-to-record mapping; this adapter checks completeness, delegates
//! to the validation engine and flattens the report into a
//! serialization-friendly shape keyed by factor number.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{EntryType, Olq, Score, ScoreSet};
use crate::validation::{validate, Recommendation};

/// A score as delivered by the upstream pipeline.
///
/// `confidence` and `reasoning` are grader metadata; the engine passes
/// them through untouched and never computes with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: Score,
    /// Grader confidence in this assessment (0-100), if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Brief justification for the score, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl ScoreRecord {
    pub fn new(score: Score) -> Self {
        Self {
            score,
            confidence: None,
            reasoning: None,
        }
    }
}

/// Externally-facing verdict. A pure renaming of the internal
/// three-valued recommendation: Doubtful is surfaced as Borderline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationOutcome {
    Recommended,
    Borderline,
    NotRecommended,
}

impl From<Recommendation> for RecommendationOutcome {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Recommended => RecommendationOutcome::Recommended,
            Recommendation::Doubtful => RecommendationOutcome::Borderline,
            Recommendation::NotRecommended => RecommendationOutcome::NotRecommended,
        }
    }
}

/// Flattened validation result for downstream UI, report and notification
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreValidationResult {
    /// Whether the input was complete enough to trust the verdict
    /// (at most one quality missing). Callers must check this first.
    pub is_valid: bool,
    pub limitation_count: usize,
    pub limitations: Vec<Olq>,
    pub exceeds_max_limitations: bool,
    pub has_critical_weakness: bool,
    pub critical_weaknesses: Vec<Olq>,
    pub factor_ii_auto_reject: bool,
    pub has_factor_inconsistency: bool,
    /// Factor numbers (1-4) with consistency issues.
    pub inconsistent_factors: Vec<u8>,
    /// Mean score per factor, keyed by factor number (1-4).
    pub factor_averages: BTreeMap<u8, f64>,
    pub recommendation: RecommendationOutcome,
    /// One-line human-readable summary.
    pub summary: String,
}

/// Validate an externally-supplied score set against the board rules.
///
/// Returns an explicit invalid result (never panics, never errors) when
/// the input is empty or more than one quality is missing. Otherwise the
/// grader metadata is stripped and the full rule engine runs.
pub fn validate_scores(
    records: &BTreeMap<Olq, ScoreRecord>,
    entry_type: EntryType,
) -> ScoreValidationResult {
    if records.is_empty() {
        return invalid_result("No scores provided");
    }

    let missing = Olq::ALL.len() - records.len();
    if missing > 1 {
        return invalid_result(&format!(
            "Score set is missing {} of {} qualities; at most one may be absent",
            missing,
            Olq::ALL.len()
        ));
    }

    debug!(
        "validating {} scored qualities for {} entry",
        records.len(),
        entry_type.display_name()
    );

    let scores: ScoreSet = records
        .iter()
        .map(|(&olq, record)| (olq, record.score))
        .collect();

    let report = validate(&scores, entry_type);

    let limitations: Vec<Olq> = report.limitations.limited.keys().copied().collect();
    let critical_weaknesses: Vec<Olq> = report.critical.weaknesses.keys().copied().collect();
    let inconsistent_factors: Vec<u8> = report
        .consistency
        .inconsistent_factors
        .iter()
        .map(|factor| factor.number())
        .collect();
    let factor_averages: BTreeMap<u8, f64> = report
        .factor_averages
        .iter()
        .map(|(factor, &avg)| (factor.number(), avg))
        .collect();

    let mut summary_parts = Vec::new();
    if report.limitations.count > 0 {
        summary_parts.push(format!("{} limitation(s)", report.limitations.count));
    }
    if report.critical.has_weakness() {
        summary_parts.push("Critical OLQ weakness".to_string());
    }
    if report.critical.auto_reject {
        summary_parts.push("Factor II auto-reject".to_string());
    }
    if !report.consistency.is_consistent {
        summary_parts.push("Factor inconsistency detected".to_string());
    }
    let summary = if summary_parts.is_empty() {
        "Scores pass all validation criteria".to_string()
    } else {
        summary_parts.join("; ")
    };

    let recommendation = RecommendationOutcome::from(report.recommendation.recommendation);
    debug!("verdict {:?}: {}", recommendation, summary);

    ScoreValidationResult {
        is_valid: true,
        limitation_count: report.limitations.count,
        limitations,
        exceeds_max_limitations: report.limitations.count > entry_type.max_limitations(),
        has_critical_weakness: report.critical.has_weakness(),
        critical_weaknesses,
        factor_ii_auto_reject: report.critical.auto_reject,
        has_factor_inconsistency: !report.consistency.is_consistent,
        inconsistent_factors,
        factor_averages,
        recommendation,
        summary,
    }
}

/// Invalid-input result: every field defaulted, verdict Not Recommended,
/// summary naming the reason.
fn invalid_result(reason: &str) -> ScoreValidationResult {
    ScoreValidationResult {
        is_valid: false,
        limitation_count: 0,
        limitations: Vec::new(),
        exceeds_max_limitations: false,
        has_critical_weakness: false,
        critical_weaknesses: Vec::new(),
        factor_ii_auto_reject: false,
        has_factor_inconsistency: false,
        inconsistent_factors: Vec::new(),
        factor_averages: BTreeMap::new(),
        recommendation: RecommendationOutcome::NotRecommended,
        summary: reason.to_string(),
    }
}
