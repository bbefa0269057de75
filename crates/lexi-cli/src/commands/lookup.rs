use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use lexi_core::definition::Definition;
use lexi_core::state::LookupState;
use lexi_lookup::DefinitionLookup;
use lexi_search::LookupSession;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct LookupResponse {
    word: String,
    definitions: Vec<Definition>,
}

impl TextView for LookupResponse {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.definitions {
            let _ = writeln!(out, "{}", entry.word);
            for meaning in &entry.meanings {
                let _ = writeln!(out, "  ({})", meaning.part_of_speech);
                for (index, sense) in meaning.definitions.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}", index + 1, sense.definition);
                    if let Some(example) = &sense.example {
                        let _ = writeln!(out, "     e.g. {example}");
                    }
                }
            }
        }
        out.trim_end().to_string()
    }
}

/// Handle `lexi lookup`.
pub async fn handle(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = Arc::new(ctx.dictionary()?);
    let word = args.word.trim();
    let definitions = lookup_definitions(client, word, ctx.config.search.debounce()).await?;

    output(
        &LookupResponse {
            word: word.to_string(),
            definitions,
        },
        flags.format,
    )
}

/// Run one query through a lookup session and wait for its outcome.
async fn lookup_definitions(
    lookup: Arc<dyn DefinitionLookup>,
    word: &str,
    quiet: Duration,
) -> anyhow::Result<Vec<Definition>> {
    if word.trim().is_empty() {
        bail!("word must not be empty");
    }

    let session = LookupSession::new(lookup, quiet);
    let mut states = session.subscribe();
    session.submit(word);

    let state = states
        .wait_for(LookupState::is_terminal)
        .await
        .context("lookup session closed before finishing")?
        .clone();

    match state {
        LookupState::Success(definitions) => Ok(definitions),
        LookupState::Error(message) => bail!("{message}"),
        other => bail!("lookup ended in unexpected state '{}'", other.label()),
    }
}
