//! Entity structs for Lexi domain objects.
//!
//! Each entity maps to a table in the libSQL database.

mod saved_word;

pub use saved_word::SavedWord;
