use serde::{Deserialize, Serialize};

/// The 4 SSB factors grouping the Officer-Like Qualities.
///
/// Factor II (Social Adjustment) is the critical factor: if its average
/// score reaches the limitation threshold the candidate is auto-rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Factor {
    Planning,
    SocialAdjustment,
    Effectiveness,
    Dynamic,
}

impl Factor {
    /// All four factors in rubric order.
    pub const ALL: [Factor; 4] = [
        Factor::Planning,
        Factor::SocialAdjustment,
        Factor::Effectiveness,
        Factor::Dynamic,
    ];

    /// Factor number (1-4), the stable identifier used in external results.
    pub fn number(&self) -> u8 {
        match self {
            Factor::Planning => 1,
            Factor::SocialAdjustment => 2,
            Factor::Effectiveness => 3,
            Factor::Dynamic => 4,
        }
    }

    /// Roman numeral as written in the board paperwork.
    pub fn numeral(&self) -> &'static str {
        match self {
            Factor::Planning => "I",
            Factor::SocialAdjustment => "II",
            Factor::Effectiveness => "III",
            Factor::Dynamic => "IV",
        }
    }

    /// Official factor name
    pub fn name(&self) -> &'static str {
        match self {
            Factor::Planning => "Planning & Organizing",
            Factor::SocialAdjustment => "Social Adjustment",
            Factor::Effectiveness => "Social Effectiveness",
            Factor::Dynamic => "Dynamic",
        }
    }

    /// Maximum allowed score spread between qualities of this factor.
    ///
    /// Factors I and II demand tight consistency (1 tick); III and IV
    /// tolerate 2 ticks.
    pub fn max_tick_variation(&self) -> u8 {
        match self {
            Factor::Planning | Factor::SocialAdjustment => 1,
            Factor::Effectiveness | Factor::Dynamic => 2,
        }
    }

    /// Look up a factor by its number (1-4).
    pub fn from_number(number: u8) -> Option<Factor> {
        Self::ALL.into_iter().find(|f| f.number() == number)
    }
}
