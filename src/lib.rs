// Export modules for library usage
pub mod catalog;
pub mod formatting;
pub mod integration;
pub mod validation;

// Re-export commonly used types
pub use crate::catalog::{rules, EntryType, Factor, Olq, Score, ScoreError, ScoreSet};

pub use crate::validation::{
    check_factor_consistency, count_limitations, detect_critical_weaknesses,
    determine_recommendation, exceeds_max_limitations, factor_averages, validate,
    ConsistencyResult, CriticalWeaknessResult, FactorSpread, LimitationResult, Recommendation,
    RecommendationResult, ValidationReport,
};

pub use crate::integration::{
    validate_scores, RecommendationOutcome, ScoreRecord, ScoreValidationResult,
};

pub use crate::formatting::render_report;
