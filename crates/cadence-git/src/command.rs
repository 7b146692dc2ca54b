use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::{DateTime, FixedOffset};

use crate::error::GitError;
use crate::repo::{RepoContext, discover_repo_context, is_git_repository};

/// Format accepted by `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`.
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Render a timestamp the way git's date parser expects it.
#[must_use]
pub fn format_git_date(date: &DateTime<FixedOffset>) -> String {
    date.format(GIT_DATE_FORMAT).to_string()
}

/// Optional author/committer identity passed as `-c user.*` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    fn config_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(name) = &self.name {
            args.push("-c".to_string());
            args.push(format!("user.name={name}"));
        }
        if let Some(email) = &self.email {
            args.push("-c".to_string());
            args.push(format!("user.email={email}"));
        }
        args
    }
}

/// A working tree driven through the `git` binary.
///
/// Every command runs with the working tree as its current directory. A
/// non-zero exit becomes [`GitError::CommandFailed`] carrying git's stderr.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
    identity: Identity,
}

impl GitRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            identity: Identity::default(),
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn is_repository(&self) -> bool {
        is_git_repository(&self.root)
    }

    pub fn context(&self) -> Result<RepoContext, GitError> {
        discover_repo_context(&self.root)
    }

    pub fn init(&self) -> Result<(), GitError> {
        std::fs::create_dir_all(&self.root)?;
        self.run(&["init"]).map(drop)
    }

    /// Point HEAD at `refs/heads/<branch>`. On a fresh repository this names
    /// the unborn branch the first commit will create.
    pub fn set_head_branch(&self, branch: &str) -> Result<(), GitError> {
        let reference = format!("refs/heads/{branch}");
        self.run(&["symbolic-ref", "HEAD", &reference]).map(drop)
    }

    /// Stage exactly one path.
    pub fn add(&self, path: &str) -> Result<(), GitError> {
        self.run(&["add", "--", path]).map(drop)
    }

    /// Commit the index. With `date`, both author and committer dates are overridden.
    pub fn commit(
        &self,
        message: &str,
        date: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), GitError> {
        self.commit_with(&["commit", "-m", message], date)
    }

    /// Commit `path` alone, leaving any other staged entries out of the commit.
    pub fn commit_only(
        &self,
        message: &str,
        path: &str,
        date: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), GitError> {
        self.commit_with(&["commit", "-m", message, "--only", "--", path], date)
    }

    /// Drop `path` from the index, keeping the working-tree change.
    pub fn unstage(&self, path: &str) -> Result<(), GitError> {
        self.run(&["reset", "-q", "--", path]).map(drop)
    }

    fn commit_with(
        &self,
        args: &[&str],
        date: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), GitError> {
        let mut command = self.command(args);
        if let Some(date) = date {
            let rendered = format_git_date(date);
            command
                .env("GIT_AUTHOR_DATE", &rendered)
                .env("GIT_COMMITTER_DATE", &rendered);
        }
        Self::finish(&format!("git {}", args.join(" ")), command.output()).map(drop)
    }

    /// Names printed by `git remote`.
    pub fn remotes(&self) -> Result<Vec<String>, GitError> {
        let stdout = self.run(&["remote"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    pub fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        let mut command = self.command(&["push", remote, branch]);
        command.env("GIT_TERMINAL_PROMPT", "0");
        Self::finish(&format!("git push {remote} {branch}"), command.output()).map(drop)
    }

    /// Run `git <args>` and return stdout.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.command(args).output();
        Self::finish(&format!("git {}", args.join(" ")), output)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command
            .args(self.identity.config_args())
            .args(args)
            .current_dir(&self.root);
        command
    }

    fn finish(label: &str, output: std::io::Result<Output>) -> Result<String, GitError> {
        let output = output.map_err(|source| GitError::Spawn {
            command: label.to_string(),
            source,
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(command = label, %stderr, "git command failed");
            return Err(GitError::CommandFailed {
                command: label.to_string(),
                code: output.status.code(),
                stderr,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
