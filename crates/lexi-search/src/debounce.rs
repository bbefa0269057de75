//! Debounced definition lookups.
//!
//! A [`LookupSession`] turns a stream of query edits into at most one remote
//! fetch per quiet period. Every `submit` bumps a generation counter and aborts
//! the previous task; a task only publishes while its generation is still the
//! current one, checked under the same lock that bumps it. A superseded result
//! therefore never reaches observers, whatever order the fetches finish in.
//!
//! ```text
//! Idle ──submit(w)──▶ Pending(w) ──quiet period──▶ InFlight(w) ──done──▶ Idle
//!   ▲                    │                             │
//!   └── submit(blank) ───┴──────── submit(w') ─────────┴──▶ Pending(w')
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lexi_core::state::LookupState;
use lexi_lookup::DefinitionLookup;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Quiet period used when the caller has no configured value.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Where the session's state machine currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Waiting out the quiet period for this word.
    Pending(String),
    /// Fetch for this word is running.
    InFlight(String),
}

/// One search box's worth of remote lookups.
pub struct LookupSession {
    shared: Arc<Shared>,
}

struct Shared {
    lookup: Arc<dyn DefinitionLookup>,
    quiet: Duration,
    state: watch::Sender<LookupState>,
    inner: Mutex<Inner>,
}

struct Inner {
    generation: u64,
    phase: SessionPhase,
    task: Option<JoinHandle<()>>,
}

impl LookupSession {
    #[must_use]
    pub fn new(lookup: Arc<dyn DefinitionLookup>, quiet: Duration) -> Self {
        let (state, _) = watch::channel(LookupState::Initial);
        Self {
            shared: Arc::new(Shared {
                lookup,
                quiet,
                state,
                inner: Mutex::new(Inner {
                    generation: 0,
                    phase: SessionPhase::Idle,
                    task: None,
                }),
            }),
        }
    }

    /// Replace the active query. Never blocks.
    ///
    /// A blank query publishes [`LookupState::Initial`] immediately and
    /// performs no fetch. Anything else is trimmed and fetched once the quiet
    /// period passes without another `submit`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn submit(&self, query: &str) {
        let mut inner = self.shared.lock();
        inner.generation += 1;
        if let Some(task) = inner.task.take() {
            task.abort();
        }

        let word = query.trim();
        if word.is_empty() {
            inner.phase = SessionPhase::Idle;
            self.shared.state.send_replace(LookupState::Initial);
            tracing::debug!(generation = inner.generation, "blank query, reset to initial");
            return;
        }

        let generation = inner.generation;
        let word = word.to_string();
        inner.phase = SessionPhase::Pending(word.clone());
        tracing::debug!(generation, %word, "query pending");

        let shared = Arc::clone(&self.shared);
        inner.task = Some(tokio::spawn(shared.run(generation, word)));
    }

    /// Watch every published state. The current value is visible immediately.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.shared.state.subscribe()
    }

    /// Latest published state.
    #[must_use]
    pub fn state(&self) -> LookupState {
        self.shared.state.borrow().clone()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.shared.lock().phase.clone()
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.shared.quiet
    }
}

impl Drop for LookupSession {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        inner.generation += 1;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
    }
}

impl Shared {
    async fn run(self: Arc<Self>, generation: u64, word: String) {
        tokio::time::sleep(self.quiet).await;

        if !self.advance(
            generation,
            SessionPhase::InFlight(word.clone()),
            LookupState::Loading,
        ) {
            return;
        }

        let state = match self.lookup.fetch(&word).await {
            Ok(definitions) => LookupState::Success(definitions),
            Err(error) => {
                tracing::debug!(%word, %error, "lookup failed");
                LookupState::Error(error.to_string())
            }
        };
        self.advance(generation, SessionPhase::Idle, state);
    }

    /// Move to `phase` and publish `state` if `generation` is still current.
    fn advance(&self, generation: u64, phase: SessionPhase, state: LookupState) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            tracing::trace!(generation, current = inner.generation, "discarding stale lookup");
            return false;
        }
        tracing::debug!(generation, state = state.label(), "lookup state");
        if phase == SessionPhase::Idle {
            inner.task = None;
        }
        inner.phase = phase;
        self.state.send_replace(state);
        true
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
