//! Run-level aggregates.
//!
//! A `RunSummary` is built by the run mode that owns it and handed back to
//! the caller. Nothing accumulates in process-wide state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Outcome, RunMode};
use crate::event::CommitEvent;

/// What happened to the push step at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PushStatus {
    NotAttempted { reason: String },
    Pushed { remote: String, branch: String },
    Failed { reason: String },
}

impl Default for PushStatus {
    fn default() -> Self {
        Self::NotAttempted {
            reason: "run not finished".to_string(),
        }
    }
}

/// Counts and outcomes for one invocation of a run mode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunSummary {
    pub mode: RunMode,
    pub dry_run: bool,
    /// Units of work scheduled by the timing policy.
    pub planned: u32,
    pub created: u32,
    pub dry_runs: u32,
    pub errors: u32,
    pub skipped: u32,
    pub push: PushStatus,
    /// Outcome events in execution order.
    #[serde(skip)]
    pub events: Vec<CommitEvent>,
}

impl RunSummary {
    #[must_use]
    pub fn new(mode: RunMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            planned: 0,
            created: 0,
            dry_runs: 0,
            errors: 0,
            skipped: 0,
            push: PushStatus::default(),
            events: Vec::new(),
        }
    }

    /// Fold one outcome event into the counters. Non-outcome events are ignored.
    pub fn record(&mut self, event: CommitEvent) {
        let Some(outcome) = event.outcome() else {
            return;
        };
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::DryRun => self.dry_runs += 1,
            Outcome::Error => self.errors += 1,
            Outcome::Skipped => self.skipped += 1,
        }
        self.events.push(event);
    }

    /// Commits made, counting simulated commits under dry-run.
    #[must_use]
    pub const fn successful(&self) -> u32 {
        self.created + self.dry_runs
    }

    /// Outcome events of a single kind, in execution order.
    pub fn events_with(&self, outcome: Outcome) -> impl Iterator<Item = &CommitEvent> {
        self.events
            .iter()
            .filter(move |event| event.outcome() == Some(outcome))
    }
}
