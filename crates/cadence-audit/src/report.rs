use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::stats::{self, ActiveDayStats};
use crate::tally::{Counters, LineCounts, Tally};

/// Longest acceptable run of consecutive active days.
pub const MAX_NATURAL_STREAK: u32 = 30;
/// Flag when distinct daily counts fall below this share of active days.
pub const MIN_DISTINCT_COUNT_RATIO: f64 = 0.3;
/// Flag when more than this share of commits land on weekends.
pub const MAX_WEEKEND_FRACTION: f64 = 0.8;
/// Flag when errors exceed this percentage of attempts.
pub const MAX_ERROR_RATE_PERCENT: f64 = 5.0;

/// Default window for the recent activity listing.
pub const DEFAULT_RECENT_DAYS: u32 = 7;

/// A threshold the log crossed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    LongStreak { days: u32 },
    UniformCounts { distinct: usize, active_days: u32 },
    HighWeekendActivity { fraction: f64 },
    HighErrorRate { percent: f64 },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongStreak { days } => write!(f, "Long streak of {days} consecutive days"),
            Self::UniformCounts {
                distinct,
                active_days,
            } => write!(
                f,
                "Too many days with identical commit counts ({distinct} distinct over {active_days} active days)"
            ),
            Self::HighWeekendActivity { fraction } => {
                write!(f, "High weekend activity ({:.0}%)", fraction * 100.0)
            }
            Self::HighErrorRate { percent } => write!(f, "High error rate ({percent:.1}%)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub commits: u32,
}

/// Everything the auditor reports about one log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub log_file: PathBuf,
    pub log_found: bool,
    pub generated_at: DateTime<FixedOffset>,
    pub counters: Counters,
    pub lines: LineCounts,
    pub active_days: Option<ActiveDayStats>,
    pub longest_streak: u32,
    pub distinct_daily_counts: usize,
    pub weekend_fraction: f64,
    pub error_rate_percent: f64,
    pub findings: Vec<Finding>,
    pub recent_days: u32,
    /// Active days within `recent_days` of `generated_at`, newest first.
    pub recent_activity: Vec<DayActivity>,
}

impl AuditReport {
    /// Derive statistics and findings from a tally.
    #[must_use]
    pub fn build(
        log_file: PathBuf,
        tally: &Tally,
        generated_at: DateTime<FixedOffset>,
        recent_days: u32,
    ) -> Self {
        let active_days = stats::active_day_stats(&tally.daily);
        let longest_streak = stats::longest_streak(&tally.daily);
        let distinct_daily_counts = stats::distinct_counts(&tally.daily);
        let weekend_fraction = stats::weekend_fraction(&tally.daily);
        let error_rate_percent = stats::error_rate_percent(&tally.counters);

        let mut findings = Vec::new();
        if let Some(active) = active_days {
            if longest_streak > MAX_NATURAL_STREAK {
                findings.push(Finding::LongStreak {
                    days: longest_streak,
                });
            }
            #[allow(clippy::cast_precision_loss)]
            let distinct = distinct_daily_counts as f64;
            if distinct < f64::from(active.days) * MIN_DISTINCT_COUNT_RATIO {
                findings.push(Finding::UniformCounts {
                    distinct: distinct_daily_counts,
                    active_days: active.days,
                });
            }
            if weekend_fraction > MAX_WEEKEND_FRACTION {
                findings.push(Finding::HighWeekendActivity {
                    fraction: weekend_fraction,
                });
            }
        }
        if error_rate_percent > MAX_ERROR_RATE_PERCENT {
            findings.push(Finding::HighErrorRate {
                percent: error_rate_percent,
            });
        }

        let today = generated_at.date_naive();
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(recent_days)))
            .unwrap_or(NaiveDate::MIN);
        let recent_activity = tally
            .daily
            .range(cutoff.succ_opt().unwrap_or(cutoff)..)
            .rev()
            .filter(|(date, count)| **date <= today && **count > 0)
            .map(|(&date, &commits)| DayActivity { date, commits })
            .collect();

        Self {
            log_file,
            log_found: true,
            generated_at,
            counters: tally.counters,
            lines: tally.lines,
            active_days,
            longest_streak,
            distinct_daily_counts,
            weekend_fraction,
            error_rate_percent,
            findings,
            recent_days,
            recent_activity,
        }
    }

    /// Report for a log file that does not exist yet.
    #[must_use]
    pub fn missing(
        log_file: PathBuf,
        generated_at: DateTime<FixedOffset>,
        recent_days: u32,
    ) -> Self {
        Self {
            log_found: false,
            ..Self::build(log_file, &Tally::default(), generated_at, recent_days)
        }
    }

    #[must_use]
    pub fn has_finding(&self, predicate: impl Fn(&Finding) -> bool) -> bool {
        self.findings.iter().any(predicate)
    }

    #[must_use]
    pub fn high_weekend_activity(&self) -> bool {
        self.has_finding(|f| matches!(f, Finding::HighWeekendActivity { .. }))
    }

    #[must_use]
    pub fn high_error_rate(&self) -> bool {
        self.has_finding(|f| matches!(f, Finding::HighErrorRate { .. }))
    }

    #[must_use]
    pub fn uniform_counts(&self) -> bool {
        self.has_finding(|f| matches!(f, Finding::UniformCounts { .. }))
    }

    #[must_use]
    pub fn long_streak(&self) -> bool {
        self.has_finding(|f| matches!(f, Finding::LongStreak { .. }))
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cadence Audit Report")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Report generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Log file: {}", self.log_file.display())?;

        if !self.log_found {
            writeln!(f)?;
            return write!(f, "No log file found");
        }

        writeln!(f)?;
        writeln!(f, "Commit Pattern Analysis")?;
        writeln!(f, "{}", "-".repeat(30))?;
        match &self.active_days {
            None => writeln!(f, "No successful commits recorded")?,
            Some(active) => {
                writeln!(f, "Average commits per active day: {:.1}", active.average)?;
                writeln!(f, "Maximum commits in a day: {}", active.max)?;
                writeln!(f, "Minimum commits in a day: {}", active.min)?;
                writeln!(f, "Total active days: {}", active.days)?;
                writeln!(f, "Total commits: {}", active.total)?;
                writeln!(f, "Longest streak: {} days", self.longest_streak)?;
                writeln!(f, "Distinct daily counts: {}", self.distinct_daily_counts)?;
                writeln!(f, "Weekend share: {:.1}%", self.weekend_fraction * 100.0)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Naturalness Assessment")?;
        writeln!(f, "{}", "-".repeat(30))?;
        let pattern_findings: Vec<_> = self
            .findings
            .iter()
            .filter(|finding| !matches!(finding, Finding::HighErrorRate { .. }))
            .collect();
        if self.active_days.is_none() {
            writeln!(f, "Not enough data")?;
        } else if pattern_findings.is_empty() {
            writeln!(f, "Commit patterns appear natural")?;
        } else {
            writeln!(f, "Potential unnatural patterns detected:")?;
            for finding in pattern_findings {
                writeln!(f, "  - {finding}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Safety Metrics")?;
        writeln!(f, "{}", "-".repeat(30))?;
        writeln!(f, "Error rate: {:.1}%", self.error_rate_percent)?;
        writeln!(f, "Errors: {}", self.counters.errors)?;
        writeln!(f, "Dry runs performed: {}", self.counters.dry_runs)?;
        writeln!(f, "Operations skipped: {}", self.counters.skipped)?;
        if self.high_error_rate() {
            writeln!(f, "High error rate detected")?;
        } else {
            writeln!(f, "Good error rate")?;
        }

        writeln!(f)?;
        writeln!(f, "Recent Activity (Last {} Days)", self.recent_days)?;
        writeln!(f, "{}", "-".repeat(30))?;
        if self.recent_activity.is_empty() {
            write!(f, "No recent activity found")
        } else {
            let lines: Vec<String> = self
                .recent_activity
                .iter()
                .map(|day| format!("{}: {} commits", day.date, day.commits))
                .collect();
            write!(f, "{}", lines.join("\n"))
        }
    }
}
