use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct DeleteResponse {
    word: String,
    deleted: bool,
}

impl TextView for DeleteResponse {
    fn to_text(&self) -> String {
        if self.deleted {
            format!("deleted '{}'", self.word)
        } else {
            format!("'{}' was not saved", self.word)
        }
    }
}

/// Handle `lexi delete`. Deleting a word that is not saved is not an error.
pub async fn handle(args: &DeleteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deleted = ctx.store.delete_word(&args.word).await?;
    if flags.quiet {
        return Ok(());
    }
    output(
        &DeleteResponse {
            word: args.word.clone(),
            deleted,
        },
        flags.format,
    )
}
