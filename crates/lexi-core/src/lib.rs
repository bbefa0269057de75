//! # lexi-core
//!
//! Core types shared across all Lexi crates:
//! - [`entities::SavedWord`], the persisted favorite-word record
//! - [`definition::Definition`] and friends, as returned by the dictionary API
//! - [`state::LookupState`], the published state of a remote lookup

pub mod definition;
pub mod entities;
pub mod state;
