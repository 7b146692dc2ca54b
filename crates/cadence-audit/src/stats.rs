//! Distribution statistics over the per-day commit counts.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::tally::Counters;

/// Summary of days that had at least one commit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveDayStats {
    pub days: u32,
    pub total: u32,
    pub average: f64,
    pub min: u32,
    pub max: u32,
}

/// Average, min, and max over active days. `None` when no day has a commit.
#[must_use]
pub fn active_day_stats(daily: &BTreeMap<NaiveDate, u32>) -> Option<ActiveDayStats> {
    let counts: Vec<u32> = daily.values().copied().filter(|&count| count > 0).collect();
    let min = counts.iter().copied().min()?;
    let max = counts.iter().copied().max()?;
    let total: u32 = counts.iter().sum();
    let days = u32::try_from(counts.len()).unwrap_or(u32::MAX);
    Some(ActiveDayStats {
        days,
        total,
        average: f64::from(total) / f64::from(days),
        min,
        max,
    })
}

/// Longest run of consecutive calendar dates that each have a commit.
#[must_use]
pub fn longest_streak(daily: &BTreeMap<NaiveDate, u32>) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for (&date, _) in daily.iter().filter(|(_, count)| **count > 0) {
        current = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == date => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }
    longest
}

/// Number of distinct per-day commit counts among active days.
#[must_use]
pub fn distinct_counts(daily: &BTreeMap<NaiveDate, u32>) -> usize {
    daily
        .values()
        .filter(|&&count| count > 0)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Share of commits landing on Saturday or Sunday. Zero when there are none.
#[must_use]
pub fn weekend_fraction(daily: &BTreeMap<NaiveDate, u32>) -> f64 {
    let (weekend, total) = daily.iter().fold((0u32, 0u32), |(weekend, total), (date, &count)| {
        let is_weekend = date.weekday().num_days_from_monday() >= 5;
        (weekend + if is_weekend { count } else { 0 }, total + count)
    });
    if total == 0 {
        0.0
    } else {
        f64::from(weekend) / f64::from(total)
    }
}

/// Errors as a percentage of commits, errors, and skips. Zero when all are zero.
#[must_use]
pub fn error_rate_percent(counters: &Counters) -> f64 {
    let attempts = counters.commits + counters.errors + counters.skipped;
    if attempts == 0 {
        0.0
    } else {
        f64::from(counters.errors) / f64::from(attempts) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn daily(entries: &[(&str, u32)]) -> BTreeMap<NaiveDate, u32> {
        entries
            .iter()
            .map(|(raw, count)| (NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap(), *count))
            .collect()
    }

    #[test]
    fn streak_stops_at_empty_day() {
        let counts = daily(&[
            ("2024-01-01", 1),
            ("2024-01-02", 3),
            ("2024-01-03", 2),
            ("2024-01-04", 1),
            ("2024-01-05", 4),
            ("2024-01-06", 0),
            ("2024-01-07", 2),
        ]);
        assert_eq!(longest_streak(&counts), 5);
    }

    #[test]
    fn streak_breaks_on_calendar_gap() {
        let counts = daily(&[
            ("2024-02-27", 1),
            ("2024-02-28", 1),
            ("2024-02-29", 1),
            ("2024-03-02", 1),
        ]);
        assert_eq!(longest_streak(&counts), 3);
        assert_eq!(longest_streak(&BTreeMap::new()), 0);
    }

    #[test]
    fn active_day_stats_skip_empty_days() {
        let counts = daily(&[("2024-01-01", 2), ("2024-01-02", 0), ("2024-01-03", 4)]);
        let stats = active_day_stats(&counts).unwrap();
        assert_eq!(stats.days, 2);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 4);
        assert!((stats.average - 3.0).abs() < f64::EPSILON);
        assert!(active_day_stats(&daily(&[("2024-01-01", 0)])).is_none());
    }

    #[test]
    fn weekend_only_commits_give_fraction_one() {
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday.
        let counts = daily(&[("2024-01-06", 3), ("2024-01-07", 2), ("2024-01-13", 1)]);
        assert!((weekend_fraction(&counts) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weekend_fraction_is_commit_weighted() {
        // Monday with 3, Saturday with 1.
        let counts = daily(&[("2024-01-08", 3), ("2024-01-13", 1)]);
        assert!((weekend_fraction(&counts) - 0.25).abs() < f64::EPSILON);
        assert!(weekend_fraction(&BTreeMap::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn error_rate_counts_skips_in_denominator() {
        let counters = Counters {
            commits: 94,
            errors: 6,
            ..Counters::default()
        };
        assert!((error_rate_percent(&counters) - 6.0).abs() < 1e-9);

        let with_skips = Counters {
            commits: 8,
            errors: 1,
            skipped: 1,
            dry_runs: 50,
        };
        assert!((error_rate_percent(&with_skips) - 10.0).abs() < 1e-9);
        assert!(error_rate_percent(&Counters::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn distinct_counts_ignore_empty_days() {
        let counts = daily(&[
            ("2024-01-01", 2),
            ("2024-01-02", 2),
            ("2024-01-03", 0),
            ("2024-01-04", 5),
        ]);
        assert_eq!(distinct_counts(&counts), 2);
    }
}
