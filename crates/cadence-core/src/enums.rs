//! Event kinds, severity levels, outcomes, and run modes.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the same representation in plain text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EventLevel
// ---------------------------------------------------------------------------

/// Severity recorded on every execution log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Info,
    Warn,
    Error,
}

impl EventLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of one unit of scheduled work.
///
/// `Created` and `DryRun` both count as successful; `Error` and `Skipped`
/// never abort the enclosing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created,
    DryRun,
    Error,
    Skipped,
}

impl Outcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Created | Self::DryRun)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::DryRun => "dry_run",
            Self::Error => "error",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Every kind of line the execution log can contain.
///
/// The first four mirror [`Outcome`]; the rest bracket a run or describe
/// repository-level actions and are ignored by the auditor's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Created,
    DryRun,
    Error,
    Skipped,
    Push,
    PushFailed,
    RepositoryInitialized,
    RunStarted,
    RunCompleted,
}

impl EventKind {
    /// Level written when the caller does not pick one explicitly.
    #[must_use]
    pub const fn default_level(self) -> EventLevel {
        match self {
            Self::Error => EventLevel::Error,
            Self::PushFailed => EventLevel::Warn,
            Self::Created
            | Self::DryRun
            | Self::Skipped
            | Self::Push
            | Self::RepositoryInitialized
            | Self::RunStarted
            | Self::RunCompleted => EventLevel::Info,
        }
    }

    /// The per-unit outcome this kind represents, if any.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Created => Some(Outcome::Created),
            Self::DryRun => Some(Outcome::DryRun),
            Self::Error => Some(Outcome::Error),
            Self::Skipped => Some(Outcome::Skipped),
            Self::Push
            | Self::PushFailed
            | Self::RepositoryInitialized
            | Self::RunStarted
            | Self::RunCompleted => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::DryRun => "dry_run",
            Self::Error => "error",
            Self::Skipped => "skipped",
            Self::Push => "push",
            Self::PushFailed => "push_failed",
            Self::RepositoryInitialized => "repository_initialized",
            Self::RunStarted => "run_started",
            Self::RunCompleted => "run_completed",
        }
    }
}

impl From<Outcome> for EventKind {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Created => Self::Created,
            Outcome::DryRun => Self::DryRun,
            Outcome::Error => Self::Error,
            Outcome::Skipped => Self::Skipped,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RunMode
// ---------------------------------------------------------------------------

/// Which driver produced a batch of commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    Daily,
    Backfill,
}

impl RunMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Backfill => "backfill",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "backfill" => Ok(Self::Backfill),
            other => Err(CoreError::UnknownVariant {
                kind: "run mode",
                value: other.to_string(),
                expected: "daily, backfill",
            }),
        }
    }
}
