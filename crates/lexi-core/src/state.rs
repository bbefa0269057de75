//! Published state of a remote definition lookup.

use serde::{Deserialize, Serialize};

use crate::definition::Definition;

/// What observers of a lookup session currently see.
///
/// Exactly one variant holds at a time.
///
/// ```text
/// Initial ──query──▶ Loading ──ok──▶ Success
///    ▲                  └──err──▶ Error
///    └──── blank query (from any state)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "payload", rename_all = "snake_case")]
pub enum LookupState {
    /// Nothing asked yet, or the query was cleared.
    #[default]
    Initial,
    /// A fetch for the latest query is running.
    Loading,
    Success(Vec<Definition>),
    /// Human-readable failure message.
    Error(String),
}

impl LookupState {
    /// True for `Success` and `Error`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }

    /// Short label used in logs and text output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}
