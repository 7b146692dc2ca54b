//! # cadence-audit
//!
//! Reads the execution log after the fact and reports whether the recorded
//! activity looks organic: per-day counts, streaks, count uniformity, weekend
//! share, and error rate, each compared against a fixed threshold.
//!
//! The log is read once, lossily decoded, and never locked. Lines that are
//! malformed or cut off mid-write are skipped.

mod error;
pub mod parse;
pub mod report;
pub mod stats;
pub mod tally;

pub use error::AuditError;
pub use report::{AuditReport, DEFAULT_RECENT_DAYS, DayActivity, Finding};
pub use tally::{Counters, Tally};

use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

/// Audit the log at `path`.
///
/// Dates are attributed in `offset`. A missing file yields a report with
/// `log_found == false`.
///
/// # Errors
///
/// Returns `AuditError::Read` when the file exists but cannot be read.
pub fn audit_log(
    path: &Path,
    offset: FixedOffset,
    now: DateTime<FixedOffset>,
    recent_days: u32,
) -> Result<AuditReport, AuditError> {
    let now = now.with_timezone(&offset);
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no execution log found");
            return Ok(AuditReport::missing(path.to_path_buf(), now, recent_days));
        }
        Err(source) => {
            return Err(AuditError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let tally = Tally::from_text(&String::from_utf8_lossy(&bytes), offset);
    tracing::debug!(
        structured = tally.lines.structured,
        legacy = tally.lines.legacy,
        ignored = tally.lines.ignored,
        "execution log parsed"
    );
    Ok(AuditReport::build(path.to_path_buf(), &tally, now, recent_days))
}
