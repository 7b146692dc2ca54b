use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use cadence_config::{CadenceConfig, LoadedConfig};
use serde::Serialize;

use crate::cli::{ConfigInitArgs, GlobalFlags};
use crate::output;

#[derive(Serialize)]
struct ConfigView {
    path: PathBuf,
    created: bool,
    warnings: Vec<String>,
    config: CadenceConfig,
}

impl fmt::Display for ConfigView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.created { " (created)" } else { "" };
        writeln!(f, "Config file: {}{status}", self.path.display())?;
        for warning in &self.warnings {
            writeln!(f, "Warning: {warning}")?;
        }
        let body = serde_json::to_string_pretty(&self.config).map_err(|_| fmt::Error)?;
        write!(f, "{body}")
    }
}

pub fn show(loaded: LoadedConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ConfigView {
        path: loaded.path,
        created: loaded.created,
        warnings: loaded.warnings,
        config: loaded.config,
    };
    output::output(&view, flags.format)
}

pub fn init(args: &ConfigInitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = CadenceConfig::write_default(&flags.config, args.force)
        .with_context(|| format!("failed to write {}", flags.config.display()))?;
    tracing::info!(path = %flags.config.display(), "wrote default configuration");

    let view = ConfigView {
        path: flags.config.clone(),
        created: true,
        warnings: Vec::new(),
        config,
    };
    output::output(&view, flags.format)
}
