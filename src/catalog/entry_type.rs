use serde::{Deserialize, Serialize};

/// Officer-candidate entry track, which fixes how many limitations the
/// board tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Service-academy entry. Candidates are young and must be highly
    /// trainable, so this is the most stringent track.
    Nda,
    /// Officer-training-academy entry (short service commission).
    Ota,
    /// Graduate entry (CDS, TGC and similar direct-entry schemes).
    Graduate,
}

impl EntryType {
    /// All three entry tracks.
    pub const ALL: [EntryType; 3] = [EntryType::Nda, EntryType::Ota, EntryType::Graduate];

    /// Maximum number of limitations tolerated for this track.
    pub fn max_limitations(&self) -> usize {
        match self {
            EntryType::Nda => 4,
            EntryType::Ota | EntryType::Graduate => 7,
        }
    }

    /// Get the display name for this entry type
    pub fn display_name(&self) -> &'static str {
        match self {
            EntryType::Nda => "NDA",
            EntryType::Ota => "OTA",
            EntryType::Graduate => "Graduate",
        }
    }
}
