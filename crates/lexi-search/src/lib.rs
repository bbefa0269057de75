//! # lexi-search
//!
//! The two search flows a front end drives:
//! - [`LookupSession`]: remote dictionary lookups, debounced, where a newer
//!   query always supersedes older work.
//! - [`SavedSearch`]: local saved-word search, re-subscribed on every query
//!   change and kept current as the store mutates.

pub mod debounce;
pub mod saved;

pub use debounce::{DEFAULT_QUIET_PERIOD, LookupSession, SessionPhase};
pub use saved::SavedSearch;

#[cfg(test)]
mod test_support;
