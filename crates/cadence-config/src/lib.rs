//! # cadence-config
//!
//! Layered configuration loading for cadence using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CADENCE_*` prefix, e.g. `CADENCE_DRY_RUN=true`)
//! 2. The JSON config file (default `config.json`)
//! 3. Built-in defaults
//!
//! A missing config file is created from the defaults. A file that fails to
//! parse or validate never aborts a run: [`CadenceConfig::load`] logs one
//! warning and falls back to the defaults.
//!
//! # Usage
//!
//! ```no_run
//! use cadence_config::CadenceConfig;
//!
//! let loaded = CadenceConfig::load("config.json");
//! for warning in &loaded.warnings {
//!     eprintln!("{warning}");
//! }
//! println!("repository: {}", loaded.config.repository_path.display());
//! ```

mod defaults;
mod error;
mod range;
mod validate;

pub use error::ConfigError;
pub use range::InclusiveRange;
pub use validate::MAX_UTC_OFFSET_MINUTES;

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, Offset, Utc};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "CADENCE_";

/// Immutable-per-run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CadenceConfig {
    /// Working tree that receives the commits.
    pub repository_path: PathBuf,

    /// Base commit messages, chosen uniformly.
    pub commit_messages: Vec<String>,

    /// Variations appended to a base message, chosen uniformly and independently.
    pub message_suffixes: Vec<String>,

    /// Repository-relative files that receive the appended activity line.
    pub files_to_modify: Vec<String>,

    /// Commits per eligible day, `[min, max]` inclusive.
    pub daily_commit_range: InclusiveRange,

    /// First hour (inclusive) of the active window.
    pub active_hours_start: u32,

    /// Last hour (exclusive) of the active window.
    pub active_hours_end: u32,

    /// Days covered by a backfill run, ending today.
    pub backfill_days: u32,

    /// Append-only execution log.
    pub log_file: PathBuf,

    pub dry_run: bool,

    /// When false, daily runs ignore the active window and the random skip.
    pub enable_randomization: bool,

    /// Delay between consecutive daily commits, `[min, max]` seconds inclusive.
    pub commit_delay_secs: InclusiveRange,

    /// Offset from UTC used for active hours, backfill dates, and auditing.
    pub utc_offset_minutes: i32,

    /// Primary branch created on bootstrap and pushed after a run.
    pub branch: String,

    /// Remote that receives the push.
    pub remote: String,

    /// Author/committer name passed to git (uses git's own config when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// Author/committer email passed to git (uses git's own config when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            repository_path: defaults::repository_path(),
            commit_messages: defaults::commit_messages(),
            message_suffixes: defaults::message_suffixes(),
            files_to_modify: defaults::files_to_modify(),
            daily_commit_range: defaults::daily_commit_range(),
            active_hours_start: defaults::active_hours_start(),
            active_hours_end: defaults::active_hours_end(),
            backfill_days: defaults::backfill_days(),
            log_file: defaults::log_file(),
            dry_run: false,
            enable_randomization: true,
            commit_delay_secs: defaults::commit_delay_secs(),
            utc_offset_minutes: 0,
            branch: defaults::branch(),
            remote: defaults::remote(),
            author_name: None,
            author_email: None,
        }
    }
}

/// Result of a lenient load: always carries a usable configuration.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CadenceConfig,
    pub path: PathBuf,
    /// The file did not exist and was written from the defaults.
    pub created: bool,
    /// Problems that caused values to fall back to defaults.
    pub warnings: Vec<String>,
}

impl CadenceConfig {
    /// Build the figment provider chain for the given file.
    ///
    /// Public so tests can inspect the figment directly or layer more
    /// providers on top.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Json::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
    }

    /// Strict load: extract from all sources and validate.
    ///
    /// Does not create the file when it is missing.
    pub fn extract(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Lenient load used by the CLI.
    ///
    /// - Missing file: defaults are written to `path`, then loading continues.
    /// - Unparseable file, bad env value, or failed validation: one warning is
    ///   logged and the built-in defaults are returned.
    pub fn load(path: impl AsRef<Path>) -> LoadedConfig {
        let path = path.as_ref().to_path_buf();
        let mut warnings = Vec::new();
        let mut created = false;

        if !path.exists() {
            match Self::default().save(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "created default config file");
                    created = true;
                }
                Err(error) => {
                    tracing::warn!(%error, "could not write default config file");
                    warnings.push(error.to_string());
                }
            }
        }

        let config = match Self::extract(&path) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %path.display(),
                    "falling back to default configuration"
                );
                warnings.push(error.to_string());
                Self::default()
            }
        };

        LoadedConfig {
            config,
            path,
            created,
            warnings,
        }
    }

    /// Check semantic invariants (ordered ranges, hour window, non-empty pools).
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::validate(self)
    }

    /// Write this configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the defaults to `path`, refusing to overwrite unless `force`.
    pub fn write_default(path: impl AsRef<Path>, force: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// The configured zone as a chrono offset. Falls back to UTC if out of range.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }

    /// Half-open hour window `[start, end)`.
    #[must_use]
    pub const fn active_hours(&self) -> Range<u32> {
        self.active_hours_start..self.active_hours_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = CadenceConfig::default();
        assert_eq!(config.daily_commit_range, InclusiveRange::new(1, 5));
        assert_eq!(config.active_hours(), 8..22);
        assert_eq!(config.backfill_days, 365);
        assert_eq!(config.commit_messages.len(), 15);
        assert_eq!(config.message_suffixes[0], "");
        assert_eq!(config.branch, "main");
        assert_eq!(config.remote, "origin");
        assert!(!config.dry_run);
        assert!(config.enable_randomization);
    }

    #[test]
    fn utc_offset_converts_minutes() {
        let config = CadenceConfig {
            utc_offset_minutes: -330,
            ..Default::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), -330 * 60);
    }

    #[test]
    fn utc_offset_falls_back_to_utc_on_overflow() {
        for minutes in [i32::MIN, i32::MAX, 1440] {
            let config = CadenceConfig {
                utc_offset_minutes: minutes,
                ..Default::default()
            };
            assert_eq!(config.utc_offset().local_minus_utc(), 0, "minutes = {minutes}");
        }
    }

    #[test]
    fn author_fields_are_omitted_when_unset() {
        let json = serde_json::to_string(&CadenceConfig::default()).unwrap();
        assert!(!json.contains("author_name"));
        assert!(json.contains("\"daily_commit_range\":[1,5]"));
    }

    #[test]
    fn figment_builds_without_files() {
        let config: CadenceConfig = CadenceConfig::figment("does-not-exist.json")
            .extract()
            .expect("should extract defaults");
        assert_eq!(config, CadenceConfig::default());
    }
}
