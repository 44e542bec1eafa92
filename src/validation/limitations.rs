use crate::catalog::{EntryType, ScoreSet};

use super::LimitationResult;

/// Count the qualities scoring at or above the limitation threshold.
///
/// Total over any score set; an empty set yields a zero-count result
/// rather than a failure.
pub fn count_limitations(scores: &ScoreSet) -> LimitationResult {
    let limited: std::collections::BTreeMap<_, _> = scores
        .iter()
        .filter(|(_, score)| score.is_limitation())
        .map(|(&olq, &score)| (olq, score))
        .collect();

    LimitationResult {
        count: limited.len(),
        limited,
    }
}

/// Whether the limitation count exceeds the maximum the candidate's entry
/// track tolerates.
pub fn exceeds_max_limitations(scores: &ScoreSet, entry_type: EntryType) -> bool {
    count_limitations(scores).count > entry_type.max_limitations()
}
