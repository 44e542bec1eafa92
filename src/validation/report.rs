use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{EntryType, Factor, ScoreSet};

use super::{
    check_factor_consistency, count_limitations, detect_critical_weaknesses,
    determine_recommendation, factor_averages, ConsistencyResult, CriticalWeaknessResult,
    LimitationResult, Recommendation, RecommendationResult,
};

/// Immutable bundle of every rule check run against one score set.
///
/// Constructed fresh per validation call and owned by the caller; it
/// carries no references back into the engine or the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub limitations: LimitationResult,
    pub consistency: ConsistencyResult,
    pub critical: CriticalWeaknessResult,
    /// Mean score per factor; factors with no scored qualities are absent.
    pub factor_averages: BTreeMap<Factor, f64>,
    pub recommendation: RecommendationResult,
    pub entry_type: EntryType,
}

impl ValidationReport {
    /// Whether the verdict is Recommended.
    pub fn is_passing(&self) -> bool {
        self.recommendation.recommendation == Recommendation::Recommended
    }

    /// Whether a hard-reject condition holds: Factor II auto-reject or a
    /// limitation count over the entry track's maximum.
    pub fn has_critical_issues(&self) -> bool {
        self.critical.auto_reject || self.limitations.count > self.entry_type.max_limitations()
    }
}

/// Run every rule check once against the same score set and entry type.
///
/// Pure composition; each check sees the identical input and none share
/// state.
pub fn validate(scores: &ScoreSet, entry_type: EntryType) -> ValidationReport {
    let limitations = count_limitations(scores);
    let consistency = check_factor_consistency(scores);
    let critical = detect_critical_weaknesses(scores);
    let averages: BTreeMap<Factor, f64> = factor_averages(scores)
        .into_iter()
        .filter_map(|(factor, average)| average.map(|avg| (factor, avg)))
        .collect();
    let recommendation = determine_recommendation(&limitations, &critical, &consistency, entry_type);

    ValidationReport {
        limitations,
        consistency,
        critical,
        factor_averages: averages,
        recommendation,
        entry_type,
    }
}
