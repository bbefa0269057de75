use lexi_config::LexiConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, `LEXI_*`) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LexiConfig> {
    let config = LexiConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: LexiConfig, flags: &GlobalFlags) -> LexiConfig {
    if let Some(path) = &flags.database {
        tracing::debug!(path, "database path overridden from command line");
        config.database.path.clone_from(path);
    }
    config
}
