use std::collections::BTreeMap;

use cadence_core::enums::Outcome;
use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;

use crate::parse::{EntrySource, ParsedLine, parse_line};

/// Outcome totals across the whole log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub commits: u32,
    pub dry_runs: u32,
    pub errors: u32,
    pub skipped: u32,
}

/// How the log's lines were read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub structured: u32,
    pub legacy: u32,
    pub other: u32,
    pub ignored: u32,
}

/// Everything the auditor derives from one pass over the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Successful commits per calendar date. Only dates with at least one commit appear.
    pub daily: BTreeMap<NaiveDate, u32>,
    pub counters: Counters,
    pub lines: LineCounts,
}

impl Tally {
    /// Fold every line of `text` into a fresh tally.
    #[must_use]
    pub fn from_text(text: &str, offset: FixedOffset) -> Self {
        let mut tally = Self::default();
        for line in text.lines() {
            tally.push_line(line, offset);
        }
        tally
    }

    pub fn push_line(&mut self, line: &str, offset: FixedOffset) {
        let entry = match parse_line(line, offset) {
            ParsedLine::Entry(entry) => entry,
            ParsedLine::Other => {
                self.lines.other += 1;
                return;
            }
            ParsedLine::Ignored => {
                if !line.trim().is_empty() {
                    self.lines.ignored += 1;
                }
                return;
            }
        };

        match entry.source {
            EntrySource::Structured => self.lines.structured += 1,
            EntrySource::Legacy => self.lines.legacy += 1,
        }
        match entry.outcome {
            Outcome::Created => {
                self.counters.commits += 1;
                *self.daily.entry(entry.date).or_default() += 1;
            }
            Outcome::DryRun => self.counters.dry_runs += 1,
            Outcome::Error => self.counters.errors += 1,
            Outcome::Skipped => self.counters.skipped += 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines == LineCounts::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_outcomes_and_days() {
        let log = "\
2024-01-01 09:00:00 - INFO - Created commit: a
2024-01-01 09:05:00 - INFO - Created commit: b
2024-01-02 09:00:00 - INFO - Skipping commit - not appropriate time
2024-01-03 09:00:00 - ERROR - Failed to create commit: boom
2024-01-03 10:00:00 - INFO - [DRY RUN] Would commit: c
{\"ts\":\"2024-01-04T12:00:00+00:00\",\"level\":\"info\",\"kind\":\"created\",\"note\":\"Created commit: d\"}
{\"ts\":\"2024-01-04T12:00:01+00:00\",\"level\":\"info\",\"kind\":\"run_completed\"}
garbage
";
        let tally = Tally::from_text(log, Utc.fix());

        assert_eq!(
            tally.counters,
            Counters {
                commits: 3,
                dry_runs: 1,
                errors: 1,
                skipped: 1,
            }
        );
        assert_eq!(tally.daily.len(), 2);
        assert_eq!(tally.daily.values().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(
            tally.lines,
            LineCounts {
                structured: 1,
                legacy: 5,
                other: 1,
                ignored: 1,
            }
        );
    }

    #[test]
    fn empty_text_is_empty_tally() {
        let tally = Tally::from_text("\n\n", Utc.fix());
        assert!(tally.is_empty());
        assert!(tally.daily.is_empty());
    }
}
