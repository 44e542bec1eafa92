use std::collections::BTreeMap;

use crate::catalog::{Factor, ScoreSet};

use super::{ConsistencyResult, FactorSpread};

/// Check that scores within each factor stay inside that factor's allowed
/// tick variation.
///
/// A factor is judged only when at least 2 of its qualities are scored.
/// The check is strictly greater-than: a spread exactly at the maximum is
/// still consistent.
pub fn check_factor_consistency(scores: &ScoreSet) -> ConsistencyResult {
    let mut inconsistent_factors = Vec::new();
    let mut details = BTreeMap::new();
    let mut max_variation_found = 0;

    for factor in Factor::ALL {
        let factor_scores: Vec<_> = scores
            .iter()
            .filter(|(olq, _)| olq.factor() == factor)
            .map(|(_, &score)| score)
            .collect();

        if factor_scores.len() < 2 {
            continue;
        }

        let (Some(&min_score), Some(&max_score)) =
            (factor_scores.iter().min(), factor_scores.iter().max())
        else {
            continue;
        };
        let variation = max_score.value() - min_score.value();

        max_variation_found = max_variation_found.max(variation);

        let is_consistent = variation <= factor.max_tick_variation();
        if !is_consistent {
            inconsistent_factors.push(factor);
        }

        details.insert(
            factor,
            FactorSpread {
                factor,
                min_score,
                max_score,
                variation,
                is_consistent,
            },
        );
    }

    ConsistencyResult {
        is_consistent: inconsistent_factors.is_empty(),
        inconsistent_factors,
        max_variation_found,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Olq, Score, ScoreSet};

    fn scores(pairs: &[(Olq, u8)]) -> ScoreSet {
        pairs
            .iter()
            .map(|&(olq, raw)| (olq, Score::new(raw).unwrap()))
            .collect()
    }

    #[test]
    fn test_consistent_factor_passes() {
        let set = scores(&[
            (Olq::EffectiveIntelligence, 4),
            (Olq::ReasoningAbility, 4),
            (Olq::OrganizingAbility, 5),
            (Olq::PowerOfExpression, 4),
        ]);

        let result = check_factor_consistency(&set);

        assert!(result.is_consistent);
        assert!(result.inconsistent_factors.is_empty());
        assert_eq!(result.max_variation_found, 1);
    }

    #[test]
    fn test_spread_at_maximum_is_still_consistent() {
        // Planning allows 1 tick; {3, 4} sits exactly at the limit
        let set = scores(&[(Olq::EffectiveIntelligence, 3), (Olq::ReasoningAbility, 4)]);

        let result = check_factor_consistency(&set);

        assert!(result.is_consistent);
    }

    #[test]
    fn test_spread_beyond_maximum_is_inconsistent() {
        let set = scores(&[(Olq::EffectiveIntelligence, 3), (Olq::ReasoningAbility, 5)]);

        let result = check_factor_consistency(&set);

        assert!(!result.is_consistent);
        assert_eq!(result.inconsistent_factors, vec![Factor::Planning]);
        assert_eq!(result.max_variation_found, 2);
    }

    #[test]
    fn test_lenient_factors_allow_two_ticks() {
        // Effectiveness allows 2 ticks
        let set = scores(&[
            (Olq::Initiative, 4),
            (Olq::SelfConfidence, 6),
            (Olq::Liveliness, 5),
        ]);

        let result = check_factor_consistency(&set);

        assert!(result.is_consistent);
        assert_eq!(result.details[&Factor::Effectiveness].variation, 2);
    }

    #[test]
    fn test_multiple_inconsistent_factors_reported() {
        let set = scores(&[
            (Olq::EffectiveIntelligence, 2),
            (Olq::ReasoningAbility, 6),
            (Olq::SocialAdjustment, 1),
            (Olq::Cooperation, 5),
        ]);

        let result = check_factor_consistency(&set);

        assert!(!result.is_consistent);
        assert_eq!(result.inconsistent_factors.len(), 2);
        assert_eq!(result.max_variation_found, 4);
    }

    #[test]
    fn test_single_scored_quality_is_skipped() {
        let set = scores(&[(Olq::EffectiveIntelligence, 2)]);

        let result = check_factor_consistency(&set);

        assert!(result.is_consistent);
        assert!(result.details.is_empty());
        assert_eq!(result.max_variation_found, 0);
    }

    #[test]
    fn test_detail_carries_min_max_and_verdict() {
        let set = scores(&[(Olq::SocialAdjustment, 3), (Olq::Cooperation, 7)]);

        let result = check_factor_consistency(&set);
        let detail = &result.details[&Factor::SocialAdjustment];

        assert_eq!(detail.min_score.value(), 3);
        assert_eq!(detail.max_score.value(), 7);
        assert_eq!(detail.variation, 4);
        assert!(!detail.is_consistent);
    }
}
