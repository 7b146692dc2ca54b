//! # cadence-engine
//!
//! The commit scheduling and generation engine:
//!
//! - [`policy`]: the daily gate, per-day commit counts, delays, backfill dates and times
//! - [`message`]: message pool plus pluggable [`MessageAugmenter`]
//! - [`mutator`]: the one-line file change that gives each commit content
//! - [`Engine::execute_commit`]: mutate, stage one path, commit, log
//! - [`Engine::ensure_repository`]: first-run bootstrap
//! - [`Engine::run`]: daily and backfill drivers followed by a push
//!
//! Time, sleep, and randomness are injected so every path runs
//! deterministically under test. Results come back as a
//! [`RunSummary`](cadence_core::summary::RunSummary); nothing is global.

pub mod clock;
pub mod error;
pub mod event_log;
pub mod message;
pub mod mutator;
pub mod policy;

mod bootstrap;
mod executor;
mod runner;

pub use bootstrap::RepositoryState;
pub use clock::{Clock, FixedClock, RecordingSleeper, Sleeper, SystemClock, ThreadSleeper};
pub use error::EngineError;
pub use event_log::EventLog;
pub use executor::Engine;
pub use message::{MessageAugmenter, NoAugmentation, SuffixAugmenter};
