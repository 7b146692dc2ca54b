use std::path::PathBuf;

use cadence_config::DEFAULT_CONFIG_FILE;
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{AuditArgs, Commands, ConfigCommands, ConfigInitArgs, RunArgs};

/// Top-level CLI parser for the `cadence` binary.
#[derive(Debug, Parser)]
#[command(name = "cadence", version, about = "Cadence - scheduled commit activity and auditing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            config: self.config.clone(),
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use cadence_core::enums::RunMode;
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, ConfigCommands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "cadence",
            "--format",
            "json",
            "--config",
            "custom.json",
            "--verbose",
            "run",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config.to_str(), Some("custom.json"));
        assert!(cli.verbose);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.mode, RunMode::Daily);
                assert_eq!(args.days, None);
                assert!(!args.dry_run);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cadence", "audit", "--quiet", "-f", "json"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config.to_str(), Some("config.json"));
    }

    #[test]
    fn run_accepts_backfill_with_days() {
        let cli = Cli::try_parse_from([
            "cadence", "run", "--mode", "Backfill", "--days", "30", "--dry-run",
        ])
        .expect("cli should parse");
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.mode, RunMode::Backfill);
        assert_eq!(args.days, Some(30));
        assert!(args.dry_run);
    }

    #[test]
    fn run_rejects_zero_days_and_unknown_mode() {
        assert!(Cli::try_parse_from(["cadence", "run", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["cadence", "run", "--mode", "weekly"]).is_err());
    }

    #[test]
    fn audit_defaults() {
        let cli = Cli::try_parse_from(["cadence", "audit"]).expect("cli should parse");
        let Commands::Audit(args) = cli.command else {
            panic!("expected audit");
        };
        assert_eq!(args.log_file, None);
        assert_eq!(args.recent_days, 7);
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::try_parse_from(["cadence", "config", "init", "--force"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Init(ref args)
            } if args.force
        ));
    }
}
