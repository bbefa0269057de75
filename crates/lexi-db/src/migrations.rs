//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::LexiDb;
use crate::error::StorageError;

/// `saved_words` table and its `saved_at` index.
const MIGRATION_001: &str = include_str!("../migrations/001_saved_words.sql");

impl LexiDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StorageError::Migration(format!("001_saved_words: {e}")))?;
        Ok(())
    }
}
