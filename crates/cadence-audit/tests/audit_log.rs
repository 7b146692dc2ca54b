//! Auditing log files on disk, including ones written mid-append.

use std::fs;
use std::io::Write;

use cadence_audit::{DEFAULT_RECENT_DAYS, audit_log};
use cadence_core::enums::{EventKind, RunMode};
use cadence_core::event::CommitEvent;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn at(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

fn json_line(event: &CommitEvent) -> String {
    let mut line = serde_json::to_string(event).unwrap();
    line.push('\n');
    line
}

#[test]
fn missing_log_is_an_empty_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.jsonl");

    let report = audit_log(&path, Utc.fix(), at("2026-01-05T12:00:00+00:00"), 7).unwrap();

    assert!(!report.log_found);
    assert_eq!(report.counters.commits, 0);
    assert!(report.to_string().contains("No log file found"));
}

#[test]
fn truncated_final_line_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cadence.jsonl");

    let mut content = String::new();
    for day in 1..=5 {
        let event = CommitEvent::new(at("2026-01-06T12:00:00+00:00"), EventKind::Created)
            .with_mode(RunMode::Backfill)
            .with_message("Fix typo")
            .with_commit_date(Some(at(&format!("2024-01-0{day}T10:00:00+00:00"))))
            .with_note("Created commit: Fix typo");
        content.push_str(&json_line(&event));
    }
    let cut = json_line(&CommitEvent::new(at("2026-01-06T12:00:01+00:00"), EventKind::Created));
    content.push_str(&cut[..cut.len() / 2]);
    fs::write(&path, content).unwrap();

    let now = at("2026-01-06T12:00:00+00:00");
    let report = audit_log(&path, Utc.fix(), now, DEFAULT_RECENT_DAYS).unwrap();

    assert_eq!(report.counters.commits, 5);
    assert_eq!(report.lines.structured, 5);
    assert_eq!(report.lines.ignored, 1);
    // Backfilled commits are attributed to their commit dates.
    assert_eq!(report.longest_streak, 5);
    assert!(report.recent_activity.is_empty());
}

#[test]
fn mixed_structured_and_legacy_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.log");
    let mut file = fs::File::create(&path).unwrap();

    writeln!(file, "2024-01-01 10:00:00 - INFO - Created commit: old style").unwrap();
    writeln!(file, "2024-01-01 10:05:00 - ERROR - Skipping broken step").unwrap();
    write!(
        file,
        "{}",
        json_line(
            &CommitEvent::new(at("2024-01-02T09:00:00+00:00"), EventKind::Skipped)
                .with_mode(RunMode::Daily)
                .with_note("Skipping commit - not appropriate time")
        )
    )
    .unwrap();
    write!(
        file,
        "{}",
        json_line(&CommitEvent::new(at("2024-01-02T09:00:01+00:00"), EventKind::RunCompleted))
    )
    .unwrap();
    // Invalid UTF-8 must not abort the read.
    file.write_all(b"\xff\xfe not text\n").unwrap();
    drop(file);

    let report = audit_log(&path, Utc.fix(), at("2024-01-03T00:00:00+00:00"), 7).unwrap();

    assert_eq!(report.counters.commits, 1);
    assert_eq!(report.counters.errors, 1);
    assert_eq!(report.counters.skipped, 1);
    assert_eq!(report.lines.legacy, 2);
    assert_eq!(report.lines.structured, 1);
    assert_eq!(report.lines.other, 1);
    assert_eq!(report.lines.ignored, 1);
    assert!((report.error_rate_percent - 100.0 / 3.0).abs() < 1e-9);
}
