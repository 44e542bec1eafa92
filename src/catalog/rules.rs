//! Fixed numeric parameters of the published scoring rubric.
//!
//! Single source of truth: any code needing a board constant references
//! this module rather than repeating the literal.

/// Minimum possible score (1 = exceptional, rare).
pub const MIN_SCORE: u8 = 1;

/// Maximum possible score (10 = very poor).
pub const MAX_SCORE: u8 = 10;

/// Score at or above which a quality counts as a limitation.
pub const LIMITATION_THRESHOLD: u8 = 8;

/// Factor II average at or above this triggers automatic rejection.
///
/// Same constant as [`LIMITATION_THRESHOLD`], reused as a category-average
/// threshold by the rubric.
pub const FACTOR_II_CRITICAL_THRESHOLD: f64 = 8.0;

/// Maximum allowed tick variation between factor averages.
///
/// Recorded from the published table; no board rule currently enforces
/// cross-factor spread, only the within-factor variation held per factor.
pub const MAX_TICK_VARIATION_BETWEEN_FACTORS: u8 = 2;
