//! End-to-end checks against a real `git` binary in a scratch directory.

use std::fs;

use cadence_git::{GitError, GitRepo, Identity, is_git_repository};
use chrono::DateTime;
use pretty_assertions::assert_eq;

fn scratch_repo() -> (tempfile::TempDir, GitRepo) {
    let dir = tempfile::TempDir::new().expect("create tempdir");
    let repo = GitRepo::new(dir.path().join("work")).with_identity(Identity {
        name: Some("Cadence Test".into()),
        email: Some("test@cadence.dev".into()),
    });
    (dir, repo)
}

#[test]
fn init_creates_directory_and_names_branch() {
    let (_dir, repo) = scratch_repo();
    assert!(!repo.is_repository());

    repo.init().expect("git init");
    repo.set_head_branch("main").expect("symbolic-ref");

    assert!(repo.is_repository());
    assert!(is_git_repository(repo.root()));
    let context = repo.context().expect("discover");
    assert_eq!(context.head_branch.as_deref(), Some("main"));
    assert!(context.git_dir.ends_with(".git"));
}

#[test]
fn commit_with_date_overrides_author_and_committer() {
    let (_dir, repo) = scratch_repo();
    repo.init().unwrap();
    repo.set_head_branch("main").unwrap();

    fs::write(repo.root().join("activity_log.txt"), "entry\n").unwrap();
    repo.add("activity_log.txt").unwrap();
    let date = DateTime::parse_from_rfc3339("2023-11-05T10:20:30+00:00").unwrap();
    repo.commit("Add unit tests", Some(&date)).unwrap();

    let log = repo
        .run(&["log", "-1", "--format=%aI|%cI|%s"])
        .expect("git log");
    assert_eq!(
        log.trim(),
        "2023-11-05T10:20:30+00:00|2023-11-05T10:20:30+00:00|Add unit tests"
    );
}

#[test]
fn add_stages_only_the_named_path() {
    let (_dir, repo) = scratch_repo();
    repo.init().unwrap();
    repo.set_head_branch("main").unwrap();

    fs::write(repo.root().join("a.txt"), "a\n").unwrap();
    fs::write(repo.root().join("b.txt"), "b\n").unwrap();
    repo.add("a.txt").unwrap();

    let staged = repo.run(&["diff", "--cached", "--name-only"]).unwrap();
    assert_eq!(staged.trim(), "a.txt");
}

#[test]
fn commit_only_leaves_other_staged_paths_out() {
    let (_dir, repo) = scratch_repo();
    repo.init().unwrap();
    repo.set_head_branch("main").unwrap();
    fs::write(repo.root().join("README.md"), "# scratch\n").unwrap();
    repo.add("README.md").unwrap();
    repo.commit("Initial commit", None).unwrap();

    fs::write(repo.root().join("a.txt"), "a\n").unwrap();
    fs::write(repo.root().join("b.txt"), "b\n").unwrap();
    repo.add("a.txt").unwrap();
    repo.add("b.txt").unwrap();
    repo.commit_only("Update b", "b.txt", None).unwrap();

    let committed = repo
        .run(&["show", "--name-only", "--format=", "HEAD"])
        .unwrap();
    assert_eq!(committed.trim(), "b.txt");
    let staged = repo.run(&["diff", "--cached", "--name-only"]).unwrap();
    assert_eq!(staged.trim(), "a.txt");

    repo.unstage("a.txt").unwrap();
    let staged = repo.run(&["diff", "--cached", "--name-only"]).unwrap();
    assert_eq!(staged.trim(), "");
    assert!(repo.root().join("a.txt").is_file());
}

#[test]
fn push_without_remote_fails_recoverably() {
    let (_dir, repo) = scratch_repo();
    repo.init().unwrap();

    assert!(repo.remotes().unwrap().is_empty());
    let err = repo.push("origin", "main").unwrap_err();
    assert!(matches!(err, GitError::CommandFailed { .. }));
}

#[test]
fn remotes_lists_configured_names() {
    let (dir, repo) = scratch_repo();
    repo.init().unwrap();
    let upstream = dir.path().join("upstream.git");
    repo.run(&["remote", "add", "origin", upstream.to_str().unwrap()])
        .unwrap();

    assert_eq!(repo.remotes().unwrap(), vec!["origin".to_string()]);
}
