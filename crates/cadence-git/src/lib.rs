//! # cadence-git
//!
//! The version-control surface cadence needs, and nothing more:
//! - Repository discovery through `gix` (pure Rust, read-only)
//! - `init`, `symbolic-ref HEAD`, single-path `add`, `commit` with date overrides,
//!   `remote`, and `push` through the `git` binary
//!
//! This crate isolates the `gix` dependency from the rest of the workspace.

mod command;
mod error;
mod repo;

pub use command::{GitRepo, Identity, format_git_date};
pub use error::GitError;
pub use repo::{RepoContext, discover_repo_context, is_git_repository};
