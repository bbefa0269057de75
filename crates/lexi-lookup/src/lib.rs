//! # lexi-lookup
//!
//! Definition lookups against the free dictionary API
//! (`GET /api/v2/entries/en/{word}`).
//!
//! Callers depend on the [`DefinitionLookup`] trait; [`DictionaryClient`] is
//! the HTTP implementation.

mod error;
mod http;

pub use error::LookupError;

use std::time::Duration;

use async_trait::async_trait;
use lexi_config::LookupConfig;
use lexi_core::definition::Definition;

use crate::http::{check_response, decode_definitions};

/// Anything that can turn a word into dictionary definitions.
#[async_trait]
pub trait DefinitionLookup: Send + Sync + 'static {
    /// Fetch all entries for `word`.
    async fn fetch(&self, word: &str) -> Result<Vec<Definition>, LookupError>;
}

/// HTTP client for the dictionary API.
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    /// Build a client for `base_url` (scheme and host, no path).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the `[lookup]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Network`] if the HTTP client cannot be built.
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::new(
            config.trimmed_base_url(),
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    /// Full entry URL for `word`, path-encoded.
    #[must_use]
    pub fn entry_url(&self, word: &str) -> String {
        format!(
            "{}/api/v2/entries/en/{}",
            self.base_url,
            urlencoding::encode(word.trim())
        )
    }
}

#[async_trait]
impl DefinitionLookup for DictionaryClient {
    async fn fetch(&self, word: &str) -> Result<Vec<Definition>, LookupError> {
        let url = self.entry_url(word);
        tracing::debug!(word, %url, "fetching definitions");

        let resp = check_response(self.http.get(&url).send().await?, word).await?;
        let body = resp.text().await?;
        let definitions = decode_definitions(&body, word)?;

        tracing::debug!(word, entries = definitions.len(), "fetched definitions");
        Ok(definitions)
    }
}
