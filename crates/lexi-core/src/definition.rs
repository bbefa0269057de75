//! Dictionary definition records.
//!
//! Shapes follow the dictionary API response body: an array of entries, each
//! with `word` and `meanings[{partOfSpeech, definitions[{definition, example?}]}]`.
//! Fields the API sends that Lexi does not use (phonetics, sources, synonyms)
//! are ignored on decode.

use serde::{Deserialize, Serialize};

/// One dictionary entry for a word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Definition {
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// Senses of a word grouped under one part of speech.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<MeaningDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeaningDefinition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Definition {
    /// Total number of senses across all meanings.
    #[must_use]
    pub fn sense_count(&self) -> usize {
        self.meanings.iter().map(|m| m.definitions.len()).sum()
    }
}
