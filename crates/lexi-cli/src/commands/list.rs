use crate::cli::GlobalFlags;
use crate::commands::words::WordListResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexi list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let words = ctx.store.snapshot().await?;
    output(&WordListResponse { query: None, words }, flags.format)
}
