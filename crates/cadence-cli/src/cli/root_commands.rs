use std::path::PathBuf;

use cadence_audit::DEFAULT_RECENT_DAYS;
use cadence_core::enums::RunMode;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Make commits for today or backfill past days.
    Run(RunArgs),
    /// Analyze the execution log for unnatural patterns.
    Audit(AuditArgs),
    /// Inspect or create the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Run mode: daily or backfill
    #[arg(long, default_value = "daily")]
    pub mode: RunMode,

    /// Days to backfill, ending today (backfill mode only)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Simulate without touching the repository
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Execution log to analyze (defaults to the configured log file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Days covered by the recent activity listing
    #[arg(long, default_value_t = DEFAULT_RECENT_DAYS)]
    pub recent_days: u32,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration.
    Show,
    /// Write the default configuration to the config path.
    Init(ConfigInitArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
