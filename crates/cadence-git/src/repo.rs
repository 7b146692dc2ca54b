use std::path::{Path, PathBuf};

use crate::error::GitError;

/// What `gix` reports about an existing repository.
#[derive(Debug, Clone)]
pub struct RepoContext {
    pub root: PathBuf,
    pub git_dir: PathBuf,
    /// Short name of the branch HEAD points at (also for an unborn branch).
    pub head_branch: Option<String>,
}

/// Find the repository containing `path`, walking up like `git rev-parse`.
pub fn discover_repo_context(path: &Path) -> Result<RepoContext, GitError> {
    let repo = gix::discover(path).map_err(|_| GitError::NotGitRepo(path.to_path_buf()))?;
    let root = repo
        .work_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf());
    let git_dir = repo.git_dir().to_path_buf();
    let head_branch = repo
        .head_name()
        .ok()
        .flatten()
        .map(|name| name.shorten().to_string());

    Ok(RepoContext {
        root,
        git_dir,
        head_branch,
    })
}

/// Whether `path` is inside a git repository.
#[must_use]
pub fn is_git_repository(path: &Path) -> bool {
    path.exists() && gix::discover(path).is_ok()
}
