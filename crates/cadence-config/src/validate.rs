//! Semantic checks applied after extraction.

use std::path::{Component, Path};

use crate::CadenceConfig;
use crate::error::ConfigError;

/// Largest accepted UTC offset magnitude, in minutes (exclusive of a full day).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

pub fn validate(config: &CadenceConfig) -> Result<(), ConfigError> {
    if !config.daily_commit_range.is_ordered() {
        return Err(ConfigError::invalid(
            "daily_commit_range",
            format!(
                "min ({}) must not exceed max ({})",
                config.daily_commit_range.min, config.daily_commit_range.max
            ),
        ));
    }

    if config.active_hours_start >= config.active_hours_end {
        return Err(ConfigError::invalid(
            "active_hours_start",
            format!(
                "start ({}) must be before end ({})",
                config.active_hours_start, config.active_hours_end
            ),
        ));
    }

    if config.active_hours_end > 24 {
        return Err(ConfigError::invalid(
            "active_hours_end",
            format!("{} is past the end of the day", config.active_hours_end),
        ));
    }

    if config.backfill_days == 0 {
        return Err(ConfigError::invalid("backfill_days", "must be at least 1"));
    }

    if config.commit_messages.iter().all(|m| m.trim().is_empty()) {
        return Err(ConfigError::invalid(
            "commit_messages",
            "at least one non-empty message is required",
        ));
    }

    if config.files_to_modify.is_empty() {
        return Err(ConfigError::invalid(
            "files_to_modify",
            "at least one target file is required",
        ));
    }

    for file in &config.files_to_modify {
        if !is_contained_relative(Path::new(file)) {
            return Err(ConfigError::invalid(
                "files_to_modify",
                format!("'{file}' must be a relative path inside the repository"),
            ));
        }
    }

    if !config.commit_delay_secs.is_ordered() {
        return Err(ConfigError::invalid(
            "commit_delay_secs",
            format!(
                "min ({}) must not exceed max ({})",
                config.commit_delay_secs.min, config.commit_delay_secs.max
            ),
        ));
    }

    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&config.utc_offset_minutes) {
        return Err(ConfigError::invalid(
            "utc_offset_minutes",
            format!(
                "{} is outside ±{MAX_UTC_OFFSET_MINUTES}",
                config.utc_offset_minutes
            ),
        ));
    }

    if config.branch.trim().is_empty() {
        return Err(ConfigError::invalid("branch", "must not be empty"));
    }

    Ok(())
}

fn is_contained_relative(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
