use std::sync::Arc;

use anyhow::Context;
use lexi_config::LexiConfig;
use lexi_db::WordStore;
use lexi_lookup::DictionaryClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: Arc<WordStore>,
    pub config: LexiConfig,
}

impl AppContext {
    /// Open the word store named by the config.
    pub async fn init(config: LexiConfig) -> anyhow::Result<Self> {
        let store = WordStore::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open word store at {}", config.database.path))?;

        Ok(Self {
            store: Arc::new(store),
            config,
        })
    }

    /// Build a dictionary client. Only commands that hit the network need one.
    pub fn dictionary(&self) -> anyhow::Result<DictionaryClient> {
        DictionaryClient::from_config(&self.config.lookup)
            .context("failed to build dictionary client")
    }

    /// Context over a fresh in-memory store with default settings.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let mut config = LexiConfig::default();
        config.database.path = lexi_db::IN_MEMORY.to_string();
        Self::init(config).await.expect("in-memory store should open")
    }
}
