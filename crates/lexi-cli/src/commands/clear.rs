use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct ClearResponse {
    removed: u64,
}

impl TextView for ClearResponse {
    fn to_text(&self) -> String {
        match self.removed {
            1 => String::from("removed 1 saved word"),
            n => format!("removed {n} saved words"),
        }
    }
}

/// Handle `lexi clear`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx.store.clear_all().await?;
    if flags.quiet {
        return Ok(());
    }
    output(&ClearResponse { removed }, flags.format)
}
