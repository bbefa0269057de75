//! Word store: saved-word CRUD plus live feeds.
//!
//! Mutations (`save`, `delete`, `clear_all`) are serialized through an async
//! write lock. After the write commits, and before the call returns, every live
//! feed is refreshed from one ordered read of the table. Reads that are not
//! feeds (`snapshot`, `get`, `count`) go straight to the connection.

use std::sync::{Arc, Mutex, PoisonError};

use lexi_core::entities::SavedWord;
use tokio::sync::broadcast;

use crate::LexiDb;
use crate::error::StorageError;
use crate::feed::{FeedSlot, StorageFailure, WordFeed, WordFilter};
use crate::helpers::{SAVED_WORD_COLUMNS, row_to_saved_word};

/// Buffered failure notices per receiver before old ones are dropped.
const FAILURE_CAPACITY: usize = 16;

pub struct WordStore {
    db: LexiDb,
    write_lock: tokio::sync::Mutex<()>,
    feeds: Mutex<Vec<Arc<FeedSlot>>>,
    failures: broadcast::Sender<StorageFailure>,
}

impl WordStore {
    /// Open a store backed by a local database file, or `":memory:"`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened or migrated.
    pub async fn open_local(path: &str) -> Result<Self, StorageError> {
        Ok(Self::from_db(LexiDb::open_local(path).await?))
    }

    /// Wrap an already-open database.
    #[must_use]
    pub fn from_db(db: LexiDb) -> Self {
        let (failures, _) = broadcast::channel(FAILURE_CAPACITY);
        Self {
            db,
            write_lock: tokio::sync::Mutex::new(()),
            feeds: Mutex::new(Vec::new()),
            failures,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LexiDb {
        &self.db
    }

    /// Insert or replace the record keyed by `word.word`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails. Feeds are not refreshed then.
    pub async fn save(&self, word: &SavedWord) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.db
            .conn()
            .execute(
                "INSERT OR REPLACE INTO saved_words (word, definitions, saved_at)
                 VALUES (?1, ?2, ?3)",
                libsql::params![
                    word.word.as_str(),
                    word.definitions.as_str(),
                    word.saved_at.timestamp_millis()
                ],
            )
            .await?;
        tracing::debug!(word = %word.word, "saved word");

        self.refresh_feeds().await;
        Ok(())
    }

    /// Remove the record matching `word.word`. Absent records are not an error.
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    pub async fn delete(&self, word: &SavedWord) -> Result<bool, StorageError> {
        self.delete_word(&word.word).await
    }

    /// Remove a record by its key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    pub async fn delete_word(&self, word: &str) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;
        let removed = self
            .db
            .conn()
            .execute("DELETE FROM saved_words WHERE word = ?1", [word])
            .await?;
        tracing::debug!(word, removed, "deleted word");

        self.refresh_feeds().await;
        Ok(removed > 0)
    }

    /// Remove every record. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    pub async fn clear_all(&self) -> Result<u64, StorageError> {
        let _guard = self.write_lock.lock().await;
        let removed = self
            .db
            .conn()
            .execute("DELETE FROM saved_words", ())
            .await?;
        tracing::debug!(removed, "cleared saved words");

        self.refresh_feeds().await;
        Ok(removed)
    }

    /// Live feed of every record, most recently saved first.
    pub async fn list_all(&self) -> WordFeed {
        self.subscribe(WordFilter::All).await
    }

    /// Live feed of records whose word contains `substring`, ignoring case.
    ///
    /// A blank substring (empty or only whitespace) matches every record.
    pub async fn search(&self, substring: &str) -> WordFeed {
        self.subscribe(WordFilter::containing(substring)).await
    }

    /// Subscribe to out-of-band notices about feeds that failed to refresh.
    #[must_use]
    pub fn failures(&self) -> broadcast::Receiver<StorageFailure> {
        self.failures.subscribe()
    }

    /// All records, most recently saved first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query or row parsing fails.
    pub async fn snapshot(&self) -> Result<Vec<SavedWord>, StorageError> {
        let sql = format!(
            "SELECT {SAVED_WORD_COLUMNS} FROM saved_words ORDER BY saved_at DESC, rowid DESC"
        );
        let mut rows = self.db.conn().query(&sql, ()).await?;

        let mut words = Vec::new();
        while let Some(row) = rows.next().await? {
            words.push(row_to_saved_word(&row)?);
        }
        Ok(words)
    }

    /// One-shot version of [`Self::search`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying read fails.
    pub async fn search_once(&self, substring: &str) -> Result<Vec<SavedWord>, StorageError> {
        let all = self.snapshot().await?;
        Ok(WordFilter::containing(substring).apply(&all))
    }

    /// Fetch one record by its exact key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query or row parsing fails.
    pub async fn get(&self, word: &str) -> Result<Option<SavedWord>, StorageError> {
        let sql = format!("SELECT {SAVED_WORD_COLUMNS} FROM saved_words WHERE word = ?1");
        let mut rows = self.db.conn().query(&sql, [word]).await?;
        rows.next()
            .await?
            .map(|row| row_to_saved_word(&row))
            .transpose()
    }

    /// Number of saved words.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    pub async fn count(&self) -> Result<u64, StorageError> {
        let mut rows = self
            .db
            .conn()
            .query("SELECT COUNT(*) FROM saved_words", ())
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| StorageError::Query("COUNT returned no row".into()))?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| StorageError::InvalidState(format!("negative row count: {count}")))
    }

    /// Register a feed and prime it with the current contents.
    ///
    /// Holds the write lock so no mutation lands between the priming read and
    /// registration.
    async fn subscribe(&self, filter: WordFilter) -> WordFeed {
        let (slot, feed) = FeedSlot::new(filter);
        let slot = Arc::new(slot);

        let _guard = self.write_lock.lock().await;
        match self.snapshot().await {
            Ok(all) => slot.publish(&all),
            Err(error) => self.report_failure("subscribe", &error),
        }
        self.lock_feeds().push(slot);
        feed
    }

    /// Push a fresh snapshot into every live feed. Caller holds the write lock.
    async fn refresh_feeds(&self) {
        let slots = {
            let mut feeds = self.lock_feeds();
            feeds.retain(|slot| !slot.is_closed());
            feeds.clone()
        };
        if slots.is_empty() {
            return;
        }

        match self.snapshot().await {
            Ok(all) => {
                for slot in &slots {
                    slot.publish(&all);
                }
            }
            Err(error) => self.report_failure("refresh", &error),
        }
    }

    fn report_failure(&self, operation: &'static str, error: &StorageError) {
        tracing::warn!(operation, %error, "live feed read failed");
        // No receivers is fine: nobody asked to be told.
        let _ = self.failures.send(StorageFailure {
            operation,
            message: error.to_string(),
        });
    }

    fn lock_feeds(&self) -> std::sync::MutexGuard<'_, Vec<Arc<FeedSlot>>> {
        self.feeds.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn live_feed_count(&self) -> usize {
        let mut feeds = self.lock_feeds();
        feeds.retain(|slot| !slot.is_closed());
        feeds.len()
    }
}
