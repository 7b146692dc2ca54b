use std::fmt;

use anyhow::Context;
use cadence_config::CadenceConfig;
use cadence_core::enums::RunMode;
use cadence_core::summary::RunSummary;
use cadence_engine::{Engine, SystemClock, ThreadSleeper};
use serde::Serialize;

use crate::cli::{GlobalFlags, RunArgs};
use crate::output;

/// Text output is the final commit count; JSON is the whole summary.
#[derive(Serialize)]
#[serde(transparent)]
struct RunResult(RunSummary);

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully made {} commits", self.0.successful())
    }
}

pub fn handle(
    args: &RunArgs,
    mut config: CadenceConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.dry_run {
        config.dry_run = true;
    }
    if args.days.is_some() && args.mode == RunMode::Daily {
        tracing::warn!("--days only applies to backfill runs; ignoring it");
    }

    let clock = SystemClock::new(config.utc_offset());
    let sleeper = ThreadSleeper;
    let engine = Engine::new(&config, &clock, &sleeper);
    let mut rng = rand::thread_rng();

    let summary = engine
        .run(args.mode, args.days, &mut rng)
        .with_context(|| format!("{} run aborted", args.mode))?;

    output::output(&RunResult(summary), flags.format)
}
