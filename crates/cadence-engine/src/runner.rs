//! Daily and backfill drivers, plus the push that follows a run.

use cadence_core::enums::{EventKind, RunMode};
use cadence_core::summary::{PushStatus, RunSummary};
use rand::Rng;

use crate::error::EngineError;
use crate::executor::Engine;
use crate::message::pick_message;
use crate::policy;

impl Engine<'_> {
    /// Bootstrap, drive `mode`, then push.
    ///
    /// `days` overrides `backfill_days` and is ignored for daily runs.
    ///
    /// # Errors
    ///
    /// Only repository bootstrap failures are returned. Per-commit and push
    /// failures are counted in the summary.
    pub fn run<R: Rng>(
        &self,
        mode: RunMode,
        days: Option<u32>,
        rng: &mut R,
    ) -> Result<RunSummary, EngineError> {
        self.emit(
            self.event(EventKind::RunStarted)
                .with_mode(mode)
                .with_note(format!("Starting {mode} run")),
        );

        if let Err(error) = self.ensure_repository() {
            self.emit(
                self.event(EventKind::Error)
                    .with_mode(mode)
                    .with_note(format!("Failed to setup git repository: {error}")),
            );
            return Err(error);
        }

        let mut summary = match mode {
            RunMode::Daily => self.run_daily(rng),
            RunMode::Backfill => {
                self.run_backfill(days.unwrap_or(self.config.backfill_days), rng)
            }
        };
        summary.push = self.push_changes(&summary);

        self.emit(
            self.event(EventKind::RunCompleted)
                .with_mode(mode)
                .with_note(format!(
                    "{mode} run completed: {} commits, {} errors, {} skipped",
                    summary.successful(),
                    summary.errors,
                    summary.skipped
                )),
        );
        Ok(summary)
    }

    /// One gate check for "now", then up to `daily_commit_range` commits.
    ///
    /// Consecutive successful commits are separated by a sampled delay,
    /// skipped under dry-run and after the last commit.
    pub fn run_daily<R: Rng>(&self, rng: &mut R) -> RunSummary {
        let mut summary = RunSummary::new(RunMode::Daily, self.config.dry_run);
        let verdict = policy::evaluate_window(self.config, self.clock.now(), rng);

        if let Some(reason) = verdict.skip_reason() {
            let skip = self
                .event(EventKind::Skipped)
                .with_mode(RunMode::Daily)
                .with_note(reason);
            summary.record(self.emit(skip));
            return summary;
        }

        let count = policy::choose_daily_commit_count(self.config, rng);
        summary.planned = count;
        tracing::debug!(count, "daily commit count chosen");

        for index in 0..count {
            let event = match self.next_message(rng) {
                Ok(message) => self.execute_commit(&message, None, RunMode::Daily, rng),
                Err(error) => self.emit(
                    self.event(EventKind::Error)
                        .with_mode(RunMode::Daily)
                        .with_note(format!("Failed to create commit: {error}")),
                ),
            };
            let succeeded = event.kind == EventKind::Created || event.kind == EventKind::DryRun;
            summary.record(event);

            if succeeded && index + 1 < count && !self.config.dry_run {
                let delay = policy::choose_delay(self.config, rng);
                tracing::debug!(secs = delay.as_secs(), "waiting before next commit");
                self.sleeper.sleep(delay);
            }
        }
        summary
    }

    /// Commit across the `days` dates ending today, oldest first.
    ///
    /// Every date gets a fresh draw from `daily_commit_range`; the active-hours
    /// gate does not apply. Each commit is dated inside the active window of
    /// its day, in strictly increasing order.
    pub fn run_backfill<R: Rng>(&self, days: u32, rng: &mut R) -> RunSummary {
        let mut summary = RunSummary::new(RunMode::Backfill, self.config.dry_run);
        let now = self.clock.now();
        let today = now.with_timezone(&self.config.utc_offset()).date_naive();
        tracing::info!(days, "starting backfill");

        for date in policy::backfill_dates(today, days) {
            let count = policy::choose_daily_commit_count(self.config, rng);
            summary.planned += count;

            for commit_date in policy::spread_commit_times(self.config, date, count, now, rng) {
                let event = match self.next_message(rng) {
                    Ok(message) => {
                        self.execute_commit(&message, Some(commit_date), RunMode::Backfill, rng)
                    }
                    Err(error) => self.emit(
                        self.event(EventKind::Error)
                            .with_mode(RunMode::Backfill)
                            .with_commit_date(Some(commit_date))
                            .with_note(format!("Failed to backfill commit for {date}: {error}")),
                    ),
                };
                summary.record(event);
            }
        }
        summary
    }

    fn next_message<R: Rng>(&self, rng: &mut R) -> Result<String, EngineError> {
        pick_message(&self.config.commit_messages, self.augmenter.as_ref(), rng)
    }

    /// Push the configured branch when the run created real commits.
    ///
    /// A missing remote or a failing push is logged and reported, never fatal.
    pub fn push_changes(&self, summary: &RunSummary) -> PushStatus {
        if self.config.dry_run {
            tracing::info!("[DRY RUN] would push changes to remote");
            return PushStatus::NotAttempted {
                reason: "dry run".to_string(),
            };
        }
        if summary.created == 0 {
            return PushStatus::NotAttempted {
                reason: "no commits created".to_string(),
            };
        }

        let remote = &self.config.remote;
        let branch = &self.config.branch;
        let failed = |reason: String| {
            self.emit(
                self.event(EventKind::PushFailed)
                    .with_mode(summary.mode)
                    .with_note(reason.clone()),
            );
            PushStatus::Failed { reason }
        };

        match self.repo.remotes() {
            Ok(remotes) if remotes.iter().any(|name| name == remote) => {}
            Ok(_) => return failed("No remote repository configured".to_string()),
            Err(error) => return failed(format!("Failed to list remotes: {error}")),
        }

        if let Err(error) = self.repo.push(remote, branch) {
            return failed(format!("Failed to push changes: {error}"));
        }

        self.emit(
            self.event(EventKind::Push)
                .with_mode(summary.mode)
                .with_note(format!("Changes pushed to {remote}/{branch}")),
        );
        PushStatus::Pushed {
            remote: remote.clone(),
            branch: branch.clone(),
        }
    }
}
