use anyhow::{Context, bail};
use lexi_core::definition::Definition;
use lexi_core::entities::SavedWord;
use lexi_lookup::DefinitionLookup;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SaveArgs;
use crate::commands::words::sense_summary;
use crate::context::AppContext;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct SaveResponse {
    saved: SavedWord,
}

impl TextView for SaveResponse {
    fn to_text(&self) -> String {
        format!(
            "saved '{}' ({} senses)",
            self.saved.word,
            sense_summary(&self.saved)
        )
    }
}

/// Handle `lexi save`.
pub async fn handle(args: &SaveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let word = args.word.trim();
    if word.is_empty() {
        bail!("word must not be empty");
    }

    let saved = if args.fetch {
        let definitions = ctx
            .dictionary()?
            .fetch(word)
            .await
            .with_context(|| format!("failed to fetch definitions for '{word}'"))?;
        SavedWord::from_definitions(word, &definitions)?
    } else if let Some(payload) = &args.definitions {
        SavedWord::new(word, checked_payload(payload)?)
    } else {
        SavedWord::bare(word)
    };

    ctx.store.save(&saved).await?;

    if flags.quiet {
        return Ok(());
    }
    output(&SaveResponse { saved }, flags.format)
}

/// Accept only payloads that decode as definitions, then store them as given.
fn checked_payload(payload: &str) -> anyhow::Result<&str> {
    serde_json::from_str::<Vec<Definition>>(payload)
        .context("--definitions must be a JSON array of dictionary entries")?;
    Ok(payload)
}
