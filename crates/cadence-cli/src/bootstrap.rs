use std::path::Path;

use anyhow::Context;
use cadence_config::{CadenceConfig, LoadedConfig};

use crate::cli::GlobalFlags;

/// Load `.env` next to the config file, falling back to the working directory.
///
/// Values already present in the environment are never overwritten.
pub fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config_dir = flags
        .config
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let env_path = config_dir.join(".env");
    if env_path.is_file() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}

/// Lenient config load. Problems were already logged; they are only
/// re-surfaced here when the subscriber hides warnings.
pub fn load_config(flags: &GlobalFlags) -> LoadedConfig {
    let loaded = CadenceConfig::load(&flags.config);
    if flags.quiet {
        for warning in &loaded.warnings {
            eprintln!("cadence warning: {warning}");
        }
    }
    loaded
}
