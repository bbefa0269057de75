//! # lexi-db
//!
//! libSQL-backed storage for Lexi saved words.
//!
//! [`LexiDb`] owns the connection and schema; [`WordStore`] layers the saved-word
//! operations on top, including live feeds that push a fresh snapshot to every
//! subscriber after each committed mutation.

pub mod error;
pub mod feed;
pub mod helpers;
mod migrations;
pub mod store;

pub use error::StorageError;
pub use feed::{StorageFailure, WordFeed};
pub use store::WordStore;

use std::path::Path;

use libsql::Builder;

/// Path that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Database handle for Lexi state.
pub struct LexiDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LexiDb {
    /// Open a local database at the given path, creating parent directories.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created, the database
    /// cannot be opened, or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StorageError> {
        if path != IN_MEMORY {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let lexi_db = Self { db, conn };
        lexi_db.run_migrations().await?;
        tracing::debug!(path, "opened word database");
        Ok(lexi_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
