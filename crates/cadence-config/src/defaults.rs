//! Built-in default values.

use std::path::PathBuf;

use crate::range::InclusiveRange;

const COMMIT_MESSAGES: [&str; 15] = [
    "Update documentation",
    "Refactor code for better performance",
    "Add new feature implementation",
    "Fix minor bug in code",
    "Improve code readability",
    "Update dependencies",
    "Enhance user experience",
    "Optimize algorithm efficiency",
    "Add unit tests",
    "Update README file",
    "Improve error handling",
    "Add type annotations",
    "Refactor module structure",
    "Update configuration files",
    "Add logging functionality",
];

const MESSAGE_SUFFIXES: [&str; 4] = ["", " - minor update", " - improvements", " - cleanup"];

const FILES_TO_MODIFY: [&str; 2] = ["activity_log.txt", "progress_tracker.md"];

pub fn repository_path() -> PathBuf {
    PathBuf::from(".")
}

pub fn commit_messages() -> Vec<String> {
    COMMIT_MESSAGES.iter().map(ToString::to_string).collect()
}

pub fn message_suffixes() -> Vec<String> {
    MESSAGE_SUFFIXES.iter().map(ToString::to_string).collect()
}

pub fn files_to_modify() -> Vec<String> {
    FILES_TO_MODIFY.iter().map(ToString::to_string).collect()
}

pub const fn daily_commit_range() -> InclusiveRange {
    InclusiveRange::new(1, 5)
}

pub const fn active_hours_start() -> u32 {
    8
}

pub const fn active_hours_end() -> u32 {
    22
}

pub const fn backfill_days() -> u32 {
    365
}

pub fn log_file() -> PathBuf {
    PathBuf::from("cadence.jsonl")
}

pub const fn commit_delay_secs() -> InclusiveRange {
    InclusiveRange::new(30, 300)
}

pub fn branch() -> String {
    "main".to_string()
}

pub fn remote() -> String {
    "origin".to_string()
}
