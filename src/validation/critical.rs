use std::collections::BTreeMap;

use crate::catalog::{rules, ScoreSet};

use super::CriticalWeaknessResult;

/// Detect weaknesses among the 6 critical qualities and check the
/// Factor II auto-reject condition.
///
/// Auto-reject triggers when the Factor II (Social Adjustment) average
/// meets or exceeds the critical threshold. With zero Factor II scores the
/// flag stays false and no explanation is produced; insufficient data is
/// not a rejection.
pub fn detect_critical_weaknesses(scores: &ScoreSet) -> CriticalWeaknessResult {
    let weaknesses: BTreeMap<_, _> = scores
        .iter()
        .filter(|(olq, score)| olq.is_critical() && score.is_limitation())
        .map(|(&olq, &score)| (olq, score))
        .collect();

    let factor_ii_scores: Vec<f64> = scores
        .iter()
        .filter(|(olq, _)| olq.is_social_adjustment())
        .map(|(_, score)| f64::from(score.value()))
        .collect();

    let (auto_reject, auto_reject_reason) = if factor_ii_scores.is_empty() {
        (false, None)
    } else {
        let average = factor_ii_scores.iter().sum::<f64>() / factor_ii_scores.len() as f64;
        if average >= rules::FACTOR_II_CRITICAL_THRESHOLD {
            let reason = format!(
                "Factor II (Social Adjustment) average score is {:.1}, which meets or \
                 exceeds the critical threshold of {}. This is an automatic rejection \
                 criterion per SSB rules.",
                average,
                rules::FACTOR_II_CRITICAL_THRESHOLD as u8
            );
            (true, Some(reason))
        } else {
            (false, None)
        }
    };

    CriticalWeaknessResult {
        weaknesses,
        auto_reject,
        auto_reject_reason,
    }
}
