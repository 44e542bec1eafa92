//! Board rule checks over a score set.
//!
//! Every function in this module tree is pure and total: no shared state,
//! no I/O, nothing to lock. Each check returns its own owned result value,
//! so independent score sets can be validated in parallel freely.

pub mod averages;
pub mod consistency;
pub mod critical;
pub mod limitations;
pub mod recommendation;
pub mod report;

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::catalog::{Factor, Olq, Score};

pub use averages::factor_averages;
pub use consistency::check_factor_consistency;
pub use critical::detect_critical_weaknesses;
pub use limitations::{count_limitations, exceeds_max_limitations};
pub use recommendation::determine_recommendation;
pub use report::{validate, ValidationReport};

/// Qualities at or above the limitation threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitationResult {
    pub count: usize,
    /// The limited qualities with their scores.
    pub limited: BTreeMap<Olq, Score>,
}

/// Spread of scores within one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSpread {
    pub factor: Factor,
    pub min_score: Score,
    pub max_score: Score,
    pub variation: u8,
    pub is_consistent: bool,
}

/// Outcome of the within-factor consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// True only if no factor exceeded its allowed tick variation.
    pub is_consistent: bool,
    pub inconsistent_factors: Vec<Factor>,
    /// Largest spread observed across any judged factor.
    pub max_variation_found: u8,
    /// Per-factor detail; factors with fewer than 2 scored qualities are
    /// absent (they cannot be judged).
    pub details: BTreeMap<Factor, FactorSpread>,
}

/// Critical qualities at limitation plus the Factor II auto-reject check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalWeaknessResult {
    /// Critical qualities whose score is a limitation.
    pub weaknesses: BTreeMap<Olq, Score>,
    /// True when the Factor II average meets or exceeds the critical
    /// threshold. False when Factor II has no scored qualities.
    pub auto_reject: bool,
    pub auto_reject_reason: Option<String>,
}

impl CriticalWeaknessResult {
    pub fn has_weakness(&self) -> bool {
        !self.weaknesses.is_empty()
    }
}

/// Three-valued board verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Recommended,
    Doubtful,
    NotRecommended,
}

/// Verdict plus the ordered reasons that contributed to it.
///
/// Reasons are retained even when a lower-severity condition did not by
/// itself decide the outcome, so a Not-Recommended verdict can be
/// explained fully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendation: Recommendation,
    pub reasons: Vector<String>,
}
