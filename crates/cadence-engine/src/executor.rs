//! The engine and its single-commit executor.

use cadence_config::CadenceConfig;
use cadence_core::enums::{EventKind, RunMode};
use cadence_core::event::CommitEvent;
use cadence_git::{GitRepo, Identity, format_git_date};
use chrono::{DateTime, FixedOffset};
use rand::Rng;

use crate::clock::{Clock, Sleeper};
use crate::event_log::EventLog;
use crate::message::{MessageAugmenter, SuffixAugmenter};
use crate::mutator;

/// Everything a run needs, borrowed for the duration of one invocation.
///
/// Randomness is passed to each operation rather than stored, so callers
/// decide how runs are seeded.
pub struct Engine<'a> {
    pub(crate) config: &'a CadenceConfig,
    pub(crate) repo: GitRepo,
    pub(crate) log: EventLog,
    pub(crate) clock: &'a dyn Clock,
    pub(crate) sleeper: &'a dyn Sleeper,
    pub(crate) augmenter: Box<dyn MessageAugmenter + 'a>,
}

impl<'a> Engine<'a> {
    /// Engine over the configured repository, writing to the configured log
    /// file and augmenting messages with the configured suffixes.
    pub fn new(config: &'a CadenceConfig, clock: &'a dyn Clock, sleeper: &'a dyn Sleeper) -> Self {
        let identity = Identity {
            name: config.author_name.clone(),
            email: config.author_email.clone(),
        };
        Self {
            config,
            repo: GitRepo::new(&config.repository_path).with_identity(identity),
            log: EventLog::new(&config.log_file),
            clock,
            sleeper,
            augmenter: Box::new(SuffixAugmenter::new(config.message_suffixes.iter().cloned())),
        }
    }

    #[must_use]
    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub fn with_augmenter(mut self, augmenter: impl MessageAugmenter + 'a) -> Self {
        self.augmenter = Box::new(augmenter);
        self
    }

    #[must_use]
    pub const fn repo(&self) -> &GitRepo {
        &self.repo
    }

    #[must_use]
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Start an event stamped with the current clock time.
    pub(crate) fn event(&self, kind: EventKind) -> CommitEvent {
        CommitEvent::new(self.clock.now(), kind)
    }

    /// Record `event` in the execution log and hand it back.
    pub(crate) fn emit(&self, event: CommitEvent) -> CommitEvent {
        self.log.record(&event);
        event
    }

    /// Make one commit: mutate a file, stage exactly that file, commit.
    ///
    /// Never fails: mutation and git errors come back as an `error` event.
    /// Under dry-run nothing on disk or in git is touched.
    pub fn execute_commit<R: Rng>(
        &self,
        message: &str,
        override_date: Option<DateTime<FixedOffset>>,
        mode: RunMode,
        rng: &mut R,
    ) -> CommitEvent {
        let base = self
            .event(EventKind::Created)
            .with_mode(mode)
            .with_message(message)
            .with_commit_date(override_date);

        if self.config.dry_run {
            let note = match &override_date {
                Some(date) => format!(
                    "[DRY RUN] Would commit: {message} (dated {})",
                    format_git_date(date)
                ),
                None => format!("[DRY RUN] Would commit: {message}"),
            };
            return self.emit(retag(base, EventKind::DryRun).with_note(note));
        }

        let now = self.clock.now();
        let file = match mutator::mutate(self.repo.root(), &self.config.files_to_modify, now, rng) {
            Ok(file) => file,
            Err(error) => {
                let note = format!("Failed to create commit: {error}");
                return self.emit(retag(base, EventKind::Error).with_note(note));
            }
        };
        let base = base.with_file(file.clone());

        if let Err(error) = self.repo.add(&file) {
            let note = format!("Failed to stage {file}: {error}");
            return self.emit(retag(base, EventKind::Error).with_note(note));
        }

        if let Err(error) = self.repo.commit_only(message, &file, override_date.as_ref()) {
            if let Err(reset) = self.repo.unstage(&file) {
                tracing::warn!(%file, error = %reset, "could not unstage after failed commit");
            }
            let note = format!("Failed to create commit: {error}");
            return self.emit(retag(base, EventKind::Error).with_note(note));
        }

        let note = format!("Created commit: {message}");
        self.emit(base.with_note(note))
    }
}

/// Change an event's kind, resetting its level to the new kind's default.
fn retag(event: CommitEvent, kind: EventKind) -> CommitEvent {
    CommitEvent {
        kind,
        level: kind.default_level(),
        ..event
    }
}
