use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::EngineError;

/// Fixed text written after the timestamp on every activity line.
pub const ACTIVITY_MARKER: &str = "Automated activity entry";

/// Append one activity line to a file picked uniformly from `files`.
///
/// Parent directories are created as needed. Returns the repository-relative
/// path that was touched.
pub fn mutate<R: Rng + ?Sized>(
    root: &Path,
    files: &[String],
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Result<String, EngineError> {
    let file = files
        .choose(rng)
        .ok_or(EngineError::EmptyPool("files to modify"))?
        .clone();

    let fail = |source| EngineError::Mutation {
        file: file.clone(),
        source,
    };

    let target = root.join(&file);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(fail)?;
    }
    let mut handle = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&target)
        .map_err(fail)?;
    writeln!(handle, "[{}] {ACTIVITY_MARKER}", now.format("%Y-%m-%d %H:%M:%S")).map_err(fail)?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-03-04T05:06:07+00:00").unwrap()
    }

    #[test]
    fn appends_one_line_per_call() {
        let dir = TempDir::new().unwrap();
        let files = vec!["activity_log.txt".to_string()];
        let mut rng = StdRng::seed_from_u64(1);

        mutate(dir.path(), &files, now(), &mut rng).unwrap();
        let touched = mutate(dir.path(), &files, now(), &mut rng).unwrap();

        assert_eq!(touched, "activity_log.txt");
        let content = fs::read_to_string(dir.path().join("activity_log.txt")).unwrap();
        assert_eq!(
            content,
            "[2026-03-04 05:06:07] Automated activity entry\n".repeat(2)
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let files = vec!["notes/daily/log.md".to_string()];
        let mut rng = StdRng::seed_from_u64(1);

        mutate(dir.path(), &files, now(), &mut rng).unwrap();
        assert!(dir.path().join("notes/daily/log.md").is_file());
    }

    #[test]
    fn blocked_parent_is_a_mutation_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blocker"), "not a directory").unwrap();
        let files = vec!["blocker/log.txt".to_string()];
        let mut rng = StdRng::seed_from_u64(1);

        let err = mutate(dir.path(), &files, now(), &mut rng).unwrap_err();
        match err {
            EngineError::Mutation { file, .. } => assert_eq!(file, "blocker/log.txt"),
            other => panic!("expected Mutation, got {other:?}"),
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = mutate(dir.path(), &[], now(), &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::EmptyPool(_)));
    }
}
