//! Execution log line parsing.
//!
//! JSON lines are classified by their `kind`. Anything else is tried as a
//! legacy `YYYY-MM-DD HH:MM:SS - LEVEL - message` line, classified by
//! substring in the order created, dry-run, error, skipped. Lines matching
//! neither shape are ignored.

use cadence_core::enums::Outcome;
use cadence_core::event::CommitEvent;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use serde::Serialize;

const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LEGACY_TIMESTAMP_LEN: usize = 19;

/// Which line shape an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    Structured,
    Legacy,
}

/// One classified log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub outcome: Outcome,
    /// Calendar date the outcome is attributed to, in the configured offset.
    pub date: NaiveDate,
    pub source: EntrySource,
}

/// Result of looking at one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(LogEntry),
    /// A well-formed line that does not record a per-unit outcome.
    Other,
    /// Blank, truncated, or unrecognized.
    Ignored,
}

/// Classify one line. Never fails.
#[must_use]
pub fn parse_line(line: &str, offset: FixedOffset) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::Ignored;
    }
    if line.starts_with('{') {
        return parse_structured(line, offset);
    }
    parse_legacy(line)
}

fn parse_structured(line: &str, offset: FixedOffset) -> ParsedLine {
    let Ok(event) = serde_json::from_str::<CommitEvent>(line) else {
        return ParsedLine::Ignored;
    };
    match event.outcome() {
        Some(outcome) => ParsedLine::Entry(LogEntry {
            outcome,
            date: event.effective_time().with_timezone(&offset).date_naive(),
            source: EntrySource::Structured,
        }),
        None => ParsedLine::Other,
    }
}

fn parse_legacy(line: &str) -> ParsedLine {
    let Some(prefix) = line.get(..LEGACY_TIMESTAMP_LEN) else {
        return ParsedLine::Ignored;
    };
    let Ok(timestamp) = NaiveDateTime::parse_from_str(prefix, LEGACY_TIMESTAMP_FORMAT) else {
        return ParsedLine::Ignored;
    };
    match classify_legacy(line) {
        Some(outcome) => ParsedLine::Entry(LogEntry {
            outcome,
            date: timestamp.date(),
            source: EntrySource::Legacy,
        }),
        None => ParsedLine::Other,
    }
}

fn classify_legacy(line: &str) -> Option<Outcome> {
    if line.contains("Created commit:") {
        Some(Outcome::Created)
    } else if line.contains("DRY RUN") {
        Some(Outcome::DryRun)
    } else if line.contains("ERROR") {
        Some(Outcome::Error)
    } else if line.contains("SKIP") || line.contains("Skipping") {
        Some(Outcome::Skipped)
    } else {
        None
    }
}
