use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::definition::Definition;

/// Payload stored for a word saved without a lookup.
pub const EMPTY_DEFINITIONS: &str = "[]";

/// A word the user chose to keep, with its definitions serialized verbatim.
///
/// `word` is the primary key: saving an existing word replaces the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedWord {
    pub word: String,
    /// Serialized definitions payload. Opaque to the store.
    pub definitions: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedWord {
    /// Create a record stamped with the current time, at millisecond
    /// precision so it compares equal after a store round trip.
    #[must_use]
    pub fn new(word: impl Into<String>, definitions: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definitions: definitions.into(),
            saved_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Create a record with no definitions (`"[]"`).
    #[must_use]
    pub fn bare(word: impl Into<String>) -> Self {
        Self::new(word, EMPTY_DEFINITIONS)
    }

    /// Create a record from a lookup result, serializing the definitions.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the definitions cannot be serialized.
    pub fn from_definitions(
        word: impl Into<String>,
        definitions: &[Definition],
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(word, serde_json::to_string(definitions)?))
    }

    /// Decode the stored payload back into definitions.
    ///
    /// A blank payload decodes to an empty list.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the payload is not a JSON array of definitions.
    pub fn parse_definitions(&self) -> Result<Vec<Definition>, serde_json::Error> {
        if self.definitions.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.definitions)
    }

    /// Case-insensitive substring match on `word`.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_folded(&self, needle: &str) -> bool {
        needle.is_empty() || self.word.to_lowercase().contains(needle)
    }
}
