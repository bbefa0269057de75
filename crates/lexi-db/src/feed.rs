//! Live feeds over the word store.
//!
//! A feed is a `watch` channel of full snapshots. The store keeps the sending
//! half in a [`FeedSlot`] and republishes into every slot after each committed
//! mutation. Slow consumers only ever see the latest snapshot.

use lexi_core::entities::SavedWord;
use tokio::sync::watch;

/// Which records a feed shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordFilter {
    All,
    /// Lowercased, non-blank substring.
    Containing(String),
}

impl WordFilter {
    /// Build a filter for a user substring. A blank substring matches everything.
    #[must_use]
    pub fn containing(substring: &str) -> Self {
        if substring.trim().is_empty() {
            Self::All
        } else {
            Self::Containing(substring.to_lowercase())
        }
    }

    /// Apply to an already-ordered snapshot, preserving order.
    #[must_use]
    pub fn apply(&self, words: &[SavedWord]) -> Vec<SavedWord> {
        match self {
            Self::All => words.to_vec(),
            Self::Containing(needle) => words
                .iter()
                .filter(|w| w.matches_folded(needle))
                .cloned()
                .collect(),
        }
    }
}

/// Sending half of a feed, owned by the store.
pub(crate) struct FeedSlot {
    filter: WordFilter,
    tx: watch::Sender<Option<Vec<SavedWord>>>,
}

impl FeedSlot {
    pub(crate) fn new(filter: WordFilter) -> (Self, WordFeed) {
        let (tx, rx) = watch::channel(None);
        (Self { filter, tx }, WordFeed { rx })
    }

    pub(crate) fn publish(&self, all: &[SavedWord]) {
        self.tx.send_replace(Some(self.filter.apply(all)));
    }

    /// True once every [`WordFeed`] for this slot has been dropped.
    pub(crate) fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half of a live query.
///
/// `None` from [`WordFeed::next`] means the store itself was dropped.
#[derive(Debug)]
pub struct WordFeed {
    rx: watch::Receiver<Option<Vec<SavedWord>>>,
}

impl WordFeed {
    /// Wait for the next snapshot.
    ///
    /// The first call returns the initial snapshot as soon as it exists. If the
    /// initial read failed, this waits until a later mutation refreshes the feed.
    pub async fn next(&mut self) -> Option<Vec<SavedWord>> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(snapshot) = self.rx.borrow_and_update().as_ref() {
                return Some(snapshot.clone());
            }
        }
    }

    /// Latest snapshot without waiting. `None` until the feed is primed.
    #[must_use]
    pub fn current(&self) -> Option<Vec<SavedWord>> {
        self.rx.borrow().clone()
    }

    /// Whether any snapshot has been produced yet.
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.rx.borrow().is_some()
    }
}

/// Out-of-band notice that a live feed could not be refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFailure {
    pub operation: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn words(names: &[&str]) -> Vec<SavedWord> {
        names.iter().map(|n| SavedWord::bare(*n)).collect()
    }

    fn names(words: &[SavedWord]) -> Vec<&str> {
        words.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn empty_substring_is_all() {
        assert_eq!(WordFilter::containing(""), WordFilter::All);
    }

    #[test]
    fn blank_substring_is_all() {
        for blank in [" ", "   ", "\t\n"] {
            assert_eq!(WordFilter::containing(blank), WordFilter::All);
        }
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(
            WordFilter::containing("Ice Cream"),
            WordFilter::Containing("ice cream".into())
        );
    }

    #[test]
    fn containing_keeps_order() {
        let all = words(&["banana", "Anchor", "apple", "cabana"]);
        let filtered = WordFilter::containing("AN").apply(&all);
        assert_eq!(names(&filtered), vec!["banana", "Anchor", "cabana"]);
    }

    #[tokio::test]
    async fn publish_primes_feed() {
        let (slot, mut feed) = FeedSlot::new(WordFilter::All);
        assert!(!feed.is_primed());

        slot.publish(&words(&["cat"]));
        assert!(feed.is_primed());
        assert_eq!(names(&feed.next().await.unwrap()), vec!["cat"]);
    }

    #[tokio::test]
    async fn next_returns_none_when_slot_dropped() {
        let (slot, mut feed) = FeedSlot::new(WordFilter::All);
        drop(slot);
        assert!(feed.next().await.is_none());
    }

    #[test]
    fn slot_closes_with_feed() {
        let (slot, feed) = FeedSlot::new(WordFilter::All);
        assert!(!slot.is_closed());
        drop(feed);
        assert!(slot.is_closed());
    }
}
