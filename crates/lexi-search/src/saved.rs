//! Live search over saved words.
//!
//! [`SavedSearch`] keeps one store subscription for the current query. Setting
//! a new query swaps the subscription; results from the old one are dropped
//! even if they arrive late.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lexi_core::entities::SavedWord;
use lexi_db::{StorageError, StorageFailure, WordStore};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

pub struct SavedSearch {
    store: Arc<WordStore>,
    shared: Arc<SearchShared>,
}

struct SearchShared {
    query: watch::Sender<String>,
    results: watch::Sender<Vec<SavedWord>>,
    inner: Mutex<SearchInner>,
}

struct SearchInner {
    generation: u64,
    /// Query the published results answer.
    results_query: String,
    task: Option<JoinHandle<()>>,
}

impl SavedSearch {
    /// Start with an empty query, which shows every saved word.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn new(store: Arc<WordStore>) -> Self {
        let (query, _) = watch::channel(String::new());
        let (results, _) = watch::channel(Vec::new());
        let search = Self {
            store,
            shared: Arc::new(SearchShared {
                query,
                results,
                inner: Mutex::new(SearchInner {
                    generation: 0,
                    results_query: String::new(),
                    task: None,
                }),
            }),
        };
        search.set_query("");
        search
    }

    /// Replace the active query. Takes effect immediately, with no debounce.
    ///
    /// A blank query follows the full list. Anything else is matched as a
    /// case-insensitive substring of the saved word.
    ///
    /// [`Self::query`] changes at once. The result list still answers the
    /// previous query until the new subscription publishes; compare
    /// [`Self::results_query`] with [`Self::query`] to tell the two apart.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn set_query(&self, query: &str) {
        let mut inner = self.shared.lock();
        inner.generation += 1;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
        self.shared.query.send_replace(query.to_string());

        let generation = inner.generation;
        tracing::debug!(generation, query, "saved search query");
        let shared = Arc::clone(&self.shared);
        let store = Arc::clone(&self.store);
        inner.task = Some(tokio::spawn(shared.follow(
            store,
            generation,
            query.to_string(),
        )));
    }

    /// Live receiver of the current result list.
    #[must_use]
    pub fn results(&self) -> watch::Receiver<Vec<SavedWord>> {
        self.shared.results.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<SavedWord> {
        self.shared.results.borrow().clone()
    }

    /// The active query.
    #[must_use]
    pub fn query(&self) -> String {
        self.shared.query.borrow().clone()
    }

    /// The query the current result list was computed for.
    #[must_use]
    pub fn results_query(&self) -> String {
        self.shared.lock().results_query.clone()
    }

    /// Notices about store reads that could not refresh the results.
    #[must_use]
    pub fn failures(&self) -> broadcast::Receiver<StorageFailure> {
        self.store.failures()
    }

    /// Save a word. Results reflect it before this returns.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn save(&self, word: &SavedWord) -> Result<(), StorageError> {
        self.store.save(word).await?;
        self.reread().await;
        Ok(())
    }

    /// Delete a word. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn delete(&self, word: &SavedWord) -> Result<bool, StorageError> {
        let removed = self.store.delete(word).await?;
        self.reread().await;
        Ok(removed)
    }

    /// Remove every saved word. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn clear_all(&self) -> Result<u64, StorageError> {
        let removed = self.store.clear_all().await?;
        self.reread().await;
        Ok(removed)
    }

    /// Publish the current query's results straight from the store.
    async fn reread(&self) {
        let (generation, query) = {
            let inner = self.shared.lock();
            (inner.generation, self.shared.query.borrow().clone())
        };
        match self.store.search_once(&query).await {
            Ok(words) => {
                self.shared.publish(generation, &query, words);
            }
            // The store has already broadcast the failed feed refresh.
            Err(error) => tracing::warn!(%error, query, "saved search reread failed"),
        }
    }
}

impl Drop for SavedSearch {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        inner.generation += 1;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
    }
}

impl SearchShared {
    async fn follow(self: Arc<Self>, store: Arc<WordStore>, generation: u64, query: String) {
        let mut feed = if query.trim().is_empty() {
            store.list_all().await
        } else {
            store.search(&query).await
        };
        // The store already reported why the initial read failed.
        if !feed.is_primed() && !self.publish(generation, &query, Vec::new()) {
            return;
        }
        while let Some(words) = feed.next().await {
            if !self.publish(generation, &query, words) {
                return;
            }
        }
    }

    fn publish(&self, generation: u64, query: &str, words: Vec<SavedWord>) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }
        tracing::trace!(generation, count = words.len(), "saved search results");
        query.clone_into(&mut inner.results_query);
        self.results.send_replace(words);
        true
    }

    fn lock(&self) -> MutexGuard<'_, SearchInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
