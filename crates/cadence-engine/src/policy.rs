//! Commit timing policy.
//!
//! Decides whether "now" may receive commits, how many commits an eligible
//! day gets, how long to pause between daily commits, which dates a backfill
//! covers, and at what time of day each backfilled commit is dated.

use std::time::Duration;

use cadence_config::CadenceConfig;
use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike};
use rand::Rng;
use rand::seq::index;

/// Chance that an in-window daily run is suppressed anyway.
pub const SUPPRESSION_PROBABILITY: f64 = 0.3;

const SECONDS_PER_DAY: u32 = 86_400;

/// Why a daily run may or may not commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Randomization is disabled; every run commits.
    Always,
    /// Inside the active window and not suppressed.
    InWindow,
    /// The local hour falls outside `[start, end)`.
    OutsideActiveHours { hour: u32 },
    /// Inside the window but lost the suppression draw.
    Suppressed,
}

impl Eligibility {
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::Always | Self::InWindow)
    }

    /// Text used for the skip event.
    #[must_use]
    pub fn skip_reason(self) -> Option<String> {
        match self {
            Self::Always | Self::InWindow => None,
            Self::OutsideActiveHours { hour } => {
                Some(format!("Skipping commit - hour {hour} is outside active hours"))
            }
            Self::Suppressed => Some("Skipping commit - not appropriate time".to_string()),
        }
    }
}

/// Evaluate the daily gate for `now`, interpreted in the configured offset.
///
/// The suppression draw happens only when the hour is in the window, so an
/// out-of-window call consumes no randomness.
pub fn evaluate_window<R: Rng + ?Sized>(
    config: &CadenceConfig,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Eligibility {
    if !config.enable_randomization {
        return Eligibility::Always;
    }

    let hour = now.with_timezone(&config.utc_offset()).hour();
    if !config.active_hours().contains(&hour) {
        return Eligibility::OutsideActiveHours { hour };
    }

    if rng.gen_range(0.0..1.0) < SUPPRESSION_PROBABILITY {
        Eligibility::Suppressed
    } else {
        Eligibility::InWindow
    }
}

pub fn should_commit_now<R: Rng + ?Sized>(
    config: &CadenceConfig,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> bool {
    evaluate_window(config, now, rng).is_eligible()
}

/// Uniform draw from `daily_commit_range`, inclusive on both ends.
///
/// The range must be ordered, which config validation guarantees.
pub fn choose_daily_commit_count<R: Rng + ?Sized>(config: &CadenceConfig, rng: &mut R) -> u32 {
    rng.gen_range(config.daily_commit_range.as_range())
}

/// Uniform pause from `commit_delay_secs`, inclusive on both ends.
pub fn choose_delay<R: Rng + ?Sized>(config: &CadenceConfig, rng: &mut R) -> Duration {
    let secs = rng.gen_range(config.commit_delay_secs.as_range());
    Duration::from_secs(u64::from(secs))
}

/// The `horizon` calendar dates ending at `today`, oldest first.
#[must_use]
pub fn backfill_dates(today: NaiveDate, horizon: u32) -> Vec<NaiveDate> {
    (0..horizon)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
        .collect()
}

/// Distinct, ascending commit times for `count` commits on `date`.
///
/// Times are sampled inside the active window. For the current date the
/// window is clipped to `now` when it still fits `count` distinct seconds,
/// widened to the part of the day already past otherwise, and only as a last
/// resort allowed to run into the future. At most one commit per second.
pub fn spread_commit_times<R: Rng + ?Sized>(
    config: &CadenceConfig,
    date: NaiveDate,
    count: u32,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Vec<DateTime<FixedOffset>> {
    let offset = config.utc_offset();
    let count = count.min(SECONDS_PER_DAY);
    if count == 0 {
        return Vec::new();
    }

    let start = config.active_hours_start.min(24) * 3600;
    let end = config.active_hours_end.min(24) * 3600;
    let mut window = (start, end.max(start));

    let local_now = now.with_timezone(&offset);
    if date == local_now.date_naive() {
        let limit = local_now.num_seconds_from_midnight() + 1;
        let clipped = (window.0, window.1.min(limit));
        if clipped.1.saturating_sub(clipped.0) >= count {
            window = clipped;
        } else if limit >= count {
            window = (0, limit);
        }
    }
    if window.1.saturating_sub(window.0) < count {
        window = (0, SECONDS_PER_DAY);
    }

    let span = (window.1 - window.0) as usize;
    let mut seconds: Vec<u32> = index::sample(rng, span, count as usize)
        .into_vec()
        .into_iter()
        .filter_map(|i| u32::try_from(i).ok())
        .map(|i| window.0 + i)
        .collect();
    seconds.sort_unstable();

    seconds
        .into_iter()
        .filter_map(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .filter_map(|time| offset.from_local_datetime(&date.and_time(time)).single())
        .collect()
}
