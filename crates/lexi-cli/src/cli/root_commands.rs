use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Look a word up in the online dictionary.
    Lookup(LookupArgs),
    /// Save a word, optionally with its definitions.
    Save(SaveArgs),
    /// List saved words, most recent first.
    List,
    /// Find saved words containing a substring (case-insensitive).
    Search(SearchArgs),
    /// Delete one saved word.
    Delete(DeleteArgs),
    /// Delete every saved word.
    Clear,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Word to look up.
    pub word: String,
}

#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    /// Word to save. Replaces any existing record for it.
    pub word: String,

    /// Fetch definitions from the dictionary before saving.
    #[arg(long, conflicts_with = "definitions")]
    pub fetch: bool,

    /// Definitions as a JSON array, stored as given.
    #[arg(long)]
    pub definitions: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Substring to match. Empty lists everything.
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Word to delete.
    pub word: String,
}
