use im::Vector;

use crate::catalog::EntryType;

use super::{
    ConsistencyResult, CriticalWeaknessResult, LimitationResult, Recommendation,
    RecommendationResult,
};

/// Combine the rule-check outputs into a single board verdict.
///
/// Verdict precedence:
/// - Not Recommended when the limitation count exceeds the entry track's
///   maximum, or when Factor II auto-rejects. Either alone is sufficient.
/// - Doubtful when a critical quality has a limitation or a factor is
///   inconsistent, absent a Not-Recommended trigger.
/// - Recommended otherwise.
///
/// All applicable reasons are collected regardless of which condition
/// decided the verdict.
pub fn determine_recommendation(
    limitations: &LimitationResult,
    critical: &CriticalWeaknessResult,
    consistency: &ConsistencyResult,
    entry_type: EntryType,
) -> RecommendationResult {
    let mut reasons = Vector::new();

    let exceeds_limitations = limitations.count > entry_type.max_limitations();
    if exceeds_limitations {
        reasons.push_back(format!(
            "Candidate has {} limitation(s), exceeding the maximum of {} for {} entry.",
            limitations.count,
            entry_type.max_limitations(),
            entry_type.display_name()
        ));
    }

    if critical.auto_reject {
        reasons.push_back(
            critical
                .auto_reject_reason
                .clone()
                .unwrap_or_else(|| "Factor II overall is at limitation level.".to_string()),
        );
    }

    if critical.has_weakness() {
        let names: Vec<&str> = critical
            .weaknesses
            .keys()
            .map(|olq| olq.display_name())
            .collect();
        reasons.push_back(format!("Critical OLQ(s) at limitation: {}", names.join(", ")));
    }

    if !consistency.is_consistent {
        let names: Vec<&str> = consistency
            .inconsistent_factors
            .iter()
            .map(|factor| factor.name())
            .collect();
        reasons.push_back(format!(
            "Score inconsistency detected in factor(s): {}. Maximum variation found: {} ticks.",
            names.join(", "),
            consistency.max_variation_found
        ));
    }

    let recommendation = if exceeds_limitations || critical.auto_reject {
        Recommendation::NotRecommended
    } else if critical.has_weakness() || !consistency.is_consistent {
        Recommendation::Doubtful
    } else {
        Recommendation::Recommended
    };

    RecommendationResult {
        recommendation,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Olq, Score, ScoreSet};
    use crate::validation::{
        check_factor_consistency, count_limitations, detect_critical_weaknesses,
    };

    fn scores(pairs: &[(Olq, u8)]) -> ScoreSet {
        pairs
            .iter()
            .map(|&(olq, raw)| (olq, Score::new(raw).unwrap()))
            .collect()
    }

    fn recommend(set: &ScoreSet, entry_type: EntryType) -> RecommendationResult {
        determine_recommendation(
            &count_limitations(set),
            &detect_critical_weaknesses(set),
            &check_factor_consistency(set),
            entry_type,
        )
    }

    #[test]
    fn test_excellent_scores_are_recommended() {
        let set = scores(&[
            (Olq::EffectiveIntelligence, 3),
            (Olq::ReasoningAbility, 3),
            (Olq::OrganizingAbility, 4),
            (Olq::PowerOfExpression, 3),
            (Olq::SocialAdjustment, 3),
            (Olq::Cooperation, 4),
            (Olq::SenseOfResponsibility, 3),
            (Olq::Initiative, 3),
            (Olq::SelfConfidence, 4),
            (Olq::SpeedOfDecision, 3),
            (Olq::InfluenceOnGroup, 4),
            (Olq::Liveliness, 3),
            (Olq::Determination, 3),
            (Olq::Stamina, 4),
            (Olq::Courage, 3),
        ]);

        let result = recommend(&set, EntryType::Nda);

        assert_eq!(result.recommendation, Recommendation::Recommended);
    }

    #[test]
    fn test_exceeding_max_limitations_rejects() {
        // 5 limitations against the NDA maximum of 4
        let set = scores(&[
            (Olq::EffectiveIntelligence, 8),
            (Olq::OrganizingAbility, 8),
            (Olq::PowerOfExpression, 8),
            (Olq::Initiative, 8),
            (Olq::SelfConfidence, 8),
        ]);

        let result = recommend(&set, EntryType::Nda);

        assert_eq!(result.recommendation, Recommendation::NotRecommended);
        assert!(result.reasons.iter().any(|r| r.contains("limitation")));
    }

    #[test]
    fn test_same_scores_pass_lenient_track() {
        let set = scores(&[
            (Olq::EffectiveIntelligence, 8),
            (Olq::OrganizingAbility, 8),
            (Olq::PowerOfExpression, 8),
            (Olq::Initiative, 8),
            (Olq::SelfConfidence, 8),
        ]);

        let result = recommend(&set, EntryType::Ota);

        // 5 limitations fit within OTA's maximum of 7; the critical rule
        // still leaves nothing to flag here, and factors stay consistent.
        assert_ne!(result.recommendation, Recommendation::NotRecommended);
    }

    #[test]
    fn test_factor_ii_auto_reject_overrides_limit_count() {
        // Only 3 limitations (within NDA's 4) but Factor II averages 8
        let set = scores(&[
            (Olq::SocialAdjustment, 8),
            (Olq::Cooperation, 8),
            (Olq::SenseOfResponsibility, 8),
        ]);

        let result = recommend(&set, EntryType::Nda);

        assert_eq!(result.recommendation, Recommendation::NotRecommended);
        assert!(result.reasons.iter().any(|r| r.contains("Factor II")));
    }

    #[test]
    fn test_critical_limitation_downgrades_to_doubtful() {
        // One critical quality limited, Factor II average well below 8,
        // limitation count within bounds, factors consistent
        let set = scores(&[
            (Olq::EffectiveIntelligence, 4),
            (Olq::ReasoningAbility, 4),
            (Olq::SocialAdjustment, 4),
            (Olq::Cooperation, 4),
            (Olq::Courage, 8),
        ]);

        let result = recommend(&set, EntryType::Nda);

        assert_eq!(result.recommendation, Recommendation::Doubtful);
        assert!(result.reasons.iter().any(|r| r.contains("Critical OLQ")));
    }

    #[test]
    fn test_inconsistency_downgrades_to_doubtful() {
        let set = scores(&[
            (Olq::EffectiveIntelligence, 2),
            (Olq::ReasoningAbility, 5),
            (Olq::SocialAdjustment, 4),
            (Olq::Cooperation, 4),
        ]);

        let result = recommend(&set, EntryType::Nda);

        assert_eq!(result.recommendation, Recommendation::Doubtful);
        assert!(result.reasons.iter().any(|r| r.contains("inconsistency")));
    }

    #[test]
    fn test_all_contributing_reasons_are_retained() {
        // Exceeds limitations AND auto-rejects AND has critical weaknesses
        let set = scores(&[
            (Olq::EffectiveIntelligence, 8),
            (Olq::ReasoningAbility, 8),
            (Olq::OrganizingAbility, 8),
            (Olq::PowerOfExpression, 8),
            (Olq::SocialAdjustment, 8),
            (Olq::Cooperation, 8),
            (Olq::SenseOfResponsibility, 8),
        ]);

        let result = recommend(&set, EntryType::Nda);

        assert_eq!(result.recommendation, Recommendation::NotRecommended);
        assert!(result.reasons.len() >= 3);
    }

    #[test]
    fn test_non_recommended_verdicts_always_carry_reasons() {
        let set = scores(&[
            (Olq::SocialAdjustment, 9),
            (Olq::Cooperation, 9),
            (Olq::SenseOfResponsibility, 9),
        ]);

        let result = recommend(&set, EntryType::Graduate);

        assert_ne!(result.recommendation, Recommendation::Recommended);
        assert!(!result.reasons.is_empty());
    }
}
