//! Static rule catalog: the closed enumerations of the SSB rubric and
//! their fixed per-instance constants.
//!
//! Everything in here is data defined once at compile time. Qualities,
//! factors and entry types are never created or configured at runtime;
//! exhaustive `match` keeps a silently-unhandled variant from compiling.

pub mod entry_type;
pub mod factor;
pub mod olq;
pub mod rules;
pub mod score;

pub use entry_type::EntryType;
pub use factor::Factor;
pub use olq::Olq;
pub use score::{Score, ScoreError, ScoreSet};
