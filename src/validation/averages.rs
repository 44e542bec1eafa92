use std::collections::BTreeMap;

use crate::catalog::{Factor, ScoreSet};

/// Arithmetic mean score per factor over the qualities present in the set.
///
/// Factors with no scored qualities map to `None` rather than failing.
pub fn factor_averages(scores: &ScoreSet) -> BTreeMap<Factor, Option<f64>> {
    Factor::ALL
        .into_iter()
        .map(|factor| {
            let factor_scores: Vec<f64> = scores
                .iter()
                .filter(|(olq, _)| olq.factor() == factor)
                .map(|(_, score)| f64::from(score.value()))
                .collect();

            let average = if factor_scores.is_empty() {
                None
            } else {
                Some(factor_scores.iter().sum::<f64>() / factor_scores.len() as f64)
            };

            (factor, average)
        })
        .collect()
}
