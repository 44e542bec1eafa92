use serde::{Deserialize, Serialize};

use super::Factor;

/// The 15 Officer-Like Qualities assessed by the selection board.
///
/// Each quality belongs to exactly one [`Factor`]:
/// - Factor I (Planning & Organizing): EI, RA, OA, PoE
/// - Factor II (Social Adjustment): SA, CO-OP, SoR
/// - Factor III (Social Effectiveness): INI, SC, SoD, AIG, LIV
/// - Factor IV (Dynamic): DET, COU, STA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Olq {
    // Factor I: Planning & Organizing
    EffectiveIntelligence,
    ReasoningAbility,
    OrganizingAbility,
    PowerOfExpression,

    // Factor II: Social Adjustment
    SocialAdjustment,
    Cooperation,
    SenseOfResponsibility,

    // Factor III: Social Effectiveness
    Initiative,
    SelfConfidence,
    SpeedOfDecision,
    InfluenceOnGroup,
    Liveliness,

    // Factor IV: Dynamic
    Determination,
    Courage,
    Stamina,
}

impl Olq {
    /// All 15 qualities in factor order.
    pub const ALL: [Olq; 15] = [
        Olq::EffectiveIntelligence,
        Olq::ReasoningAbility,
        Olq::OrganizingAbility,
        Olq::PowerOfExpression,
        Olq::SocialAdjustment,
        Olq::Cooperation,
        Olq::SenseOfResponsibility,
        Olq::Initiative,
        Olq::SelfConfidence,
        Olq::SpeedOfDecision,
        Olq::InfluenceOnGroup,
        Olq::Liveliness,
        Olq::Determination,
        Olq::Courage,
        Olq::Stamina,
    ];

    /// Get the display name for this quality
    pub fn display_name(&self) -> &'static str {
        match self {
            Olq::EffectiveIntelligence => "Effective Intelligence",
            Olq::ReasoningAbility => "Reasoning Ability",
            Olq::OrganizingAbility => "Organizing Ability",
            Olq::PowerOfExpression => "Power of Expression",
            Olq::SocialAdjustment => "Social Adjustment",
            Olq::Cooperation => "Cooperation",
            Olq::SenseOfResponsibility => "Sense of Responsibility",
            Olq::Initiative => "Initiative",
            Olq::SelfConfidence => "Self Confidence",
            Olq::SpeedOfDecision => "Speed of Decision",
            Olq::InfluenceOnGroup => "Ability to Influence Group",
            Olq::Liveliness => "Liveliness",
            Olq::Determination => "Determination",
            Olq::Courage => "Courage",
            Olq::Stamina => "Stamina",
        }
    }

    /// The factor this quality is grouped under.
    pub fn factor(&self) -> Factor {
        match self {
            Olq::EffectiveIntelligence
            | Olq::ReasoningAbility
            | Olq::OrganizingAbility
            | Olq::PowerOfExpression => Factor::Planning,
            Olq::SocialAdjustment | Olq::Cooperation | Olq::SenseOfResponsibility => {
                Factor::SocialAdjustment
            }
            Olq::Initiative
            | Olq::SelfConfidence
            | Olq::SpeedOfDecision
            | Olq::InfluenceOnGroup
            | Olq::Liveliness => Factor::Effectiveness,
            Olq::Determination | Olq::Courage | Olq::Stamina => Factor::Dynamic,
        }
    }

    /// Whether this is one of the 6 critical qualities whose limitation
    /// carries elevated weight in the recommendation.
    ///
    /// Critical per the published rubric: Reasoning Ability, all of
    /// Factor II, Liveliness and Courage.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Olq::ReasoningAbility
                | Olq::SocialAdjustment
                | Olq::Cooperation
                | Olq::SenseOfResponsibility
                | Olq::Liveliness
                | Olq::Courage
        )
    }

    /// Whether this quality belongs to Factor II (Social Adjustment),
    /// the factor the auto-reject rule averages over.
    pub fn is_social_adjustment(&self) -> bool {
        self.factor() == Factor::SocialAdjustment
    }

    /// All qualities grouped under the given factor.
    pub fn in_factor(factor: Factor) -> impl Iterator<Item = Olq> {
        Self::ALL.into_iter().filter(move |q| q.factor() == factor)
    }

    /// The fixed critical-quality subset.
    pub fn critical() -> impl Iterator<Item = Olq> {
        Self::ALL.into_iter().filter(|q| q.is_critical())
    }
}
