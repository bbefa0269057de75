//! Shared test doubles for lexi-search unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lexi_core::definition::Definition;
use lexi_core::state::LookupState;
use lexi_lookup::{DefinitionLookup, LookupError};

/// Word the fake reports as unknown.
pub const MISSING_WORD: &str = "missing";

/// In-process lookup that records calls and can stall per word.
#[derive(Default)]
pub struct FakeLookup {
    calls: Mutex<Vec<String>>,
    delays: HashMap<String, Duration>,
}

impl FakeLookup {
    pub fn with_delay(mut self, word: &str, delay: Duration) -> Self {
        self.delays.insert(word.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionLookup for FakeLookup {
    async fn fetch(&self, word: &str) -> Result<Vec<Definition>, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());
        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }
        if word == MISSING_WORD {
            return Err(LookupError::NotFound(word.to_string()));
        }
        Ok(vec![definition_for(word)])
    }
}

pub fn definition_for(word: &str) -> Definition {
    Definition {
        word: word.to_string(),
        meanings: Vec::new(),
    }
}

pub fn success_for(word: &str) -> LookupState {
    LookupState::Success(vec![definition_for(word)])
}
