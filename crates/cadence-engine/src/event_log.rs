//! Execution log writer.
//!
//! Appends `CommitEvent` records to the configured JSONL file using
//! `serde_jsonlines::append_json_lines`, one object per line. Each event is
//! also mirrored to `tracing` so it shows up in diagnostics.

use std::path::{Path, PathBuf};

use cadence_core::enums::EventLevel;
use cadence_core::event::CommitEvent;

use crate::error::EngineError;

#[derive(Debug, Clone)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A log that only mirrors to `tracing`.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one event, creating the file and its parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Log` if the file cannot be created or written.
    pub fn append(&self, event: &CommitEvent) -> Result<(), EngineError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let fail = |source| EngineError::Log {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(fail)?;
        }
        serde_jsonlines::append_json_lines(path, [event]).map_err(fail)
    }

    /// Mirror to `tracing`, then append. A write failure is a warning, never fatal.
    pub fn record(&self, event: &CommitEvent) {
        match event.level {
            EventLevel::Info => tracing::info!(kind = %event.kind, "{}", event.note),
            EventLevel::Warn => tracing::warn!(kind = %event.kind, "{}", event.note),
            EventLevel::Error => tracing::error!(kind = %event.kind, "{}", event.note),
        }
        if let Err(error) = self.append(event) {
            tracing::warn!(%error, "could not append to execution log");
        }
    }
}
