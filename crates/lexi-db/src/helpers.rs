//! Row-to-entity parsing helpers.
//!
//! `saved_at` is stored as integer milliseconds since the Unix epoch; these
//! helpers convert between that and `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use lexi_core::entities::SavedWord;

use crate::error::StorageError;

/// Columns selected by every saved-word read, in `row_to_saved_word` order.
pub const SAVED_WORD_COLUMNS: &str = "word, definitions, saved_at";

/// Convert stored epoch milliseconds into a timestamp.
///
/// # Errors
///
/// Returns `StorageError::InvalidState` if the value is outside chrono's range.
pub fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, StorageError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| StorageError::InvalidState(format!("saved_at out of range: {millis}")))
}

/// Parse a `saved_words` row selected with [`SAVED_WORD_COLUMNS`].
///
/// # Errors
///
/// Returns `StorageError` if a column is missing, has the wrong type, or
/// holds an out-of-range timestamp.
pub fn row_to_saved_word(row: &libsql::Row) -> Result<SavedWord, StorageError> {
    Ok(SavedWord {
        word: row.get::<String>(0)?,
        definitions: row.get::<String>(1)?,
        saved_at: millis_to_datetime(row.get::<i64>(2)?)?,
    })
}
