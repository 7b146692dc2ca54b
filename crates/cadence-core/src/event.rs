//! Structured execution log envelope.
//!
//! Every run appends `CommitEvent` records, one JSON object per line, to the
//! configured log file. The auditor classifies lines by `kind`, never by
//! free text, so `note` is purely for humans reading the file.
//!
//! The `v` field supports schema versioning: lines without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EventKind, EventLevel, Outcome, RunMode};

/// Current execution log schema version.
pub const EVENT_VERSION: u32 = 1;

const fn default_event_version() -> u32 {
    EVENT_VERSION
}

/// A single line of the execution log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommitEvent {
    /// Schema version. Defaults to 1 for lines without this field.
    #[serde(default = "default_event_version")]
    pub v: u32,

    /// Wall-clock time the event was recorded.
    pub ts: DateTime<FixedOffset>,

    pub level: EventLevel,

    pub kind: EventKind,

    /// Driver that produced the event, when it belongs to a run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RunMode>,

    /// Commit message, for commit-level events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Repository-relative path that was mutated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Author/committer date override (backfill commits only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_date: Option<DateTime<FixedOffset>>,

    /// Human-readable description of what happened.
    #[serde(default)]
    pub note: String,
}

impl CommitEvent {
    /// Start a new event at `ts` with the kind's default level.
    #[must_use]
    pub fn new(ts: DateTime<FixedOffset>, kind: EventKind) -> Self {
        Self {
            v: EVENT_VERSION,
            ts,
            level: kind.default_level(),
            kind,
            mode: None,
            message: None,
            file: None,
            commit_date: None,
            note: String::new(),
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: EventLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub const fn with_commit_date(mut self, commit_date: Option<DateTime<FixedOffset>>) -> Self {
        self.commit_date = commit_date;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// The per-unit outcome this event records, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.kind.outcome()
    }

    /// The instant this event should be attributed to on a calendar:
    /// the commit date override when present, else the wall-clock time.
    #[must_use]
    pub fn effective_time(&self) -> DateTime<FixedOffset> {
        self.commit_date.unwrap_or(self.ts)
    }
}
