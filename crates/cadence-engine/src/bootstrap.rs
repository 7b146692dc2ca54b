use std::fs;

use cadence_core::enums::EventKind;

use crate::error::EngineError;
use crate::executor::Engine;

const README_FILE: &str = "README.md";
const README_CONTENT: &str =
    "# Activity Repository\n\nThis repository is maintained by cadence.\n";
const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// What [`Engine::ensure_repository`] found or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryState {
    Existing,
    Initialized,
    /// Dry-run against a missing repository: nothing was created.
    WouldInitialize,
}

impl Engine<'_> {
    /// Make sure the configured path is a repository with at least one commit.
    ///
    /// A no-op when a repository already exists. Otherwise runs `git init`,
    /// points HEAD at the configured branch, writes a README, and commits it.
    ///
    /// # Errors
    ///
    /// Any failure is fatal for the run.
    pub fn ensure_repository(&self) -> Result<RepositoryState, EngineError> {
        if self.repo.is_repository() {
            return Ok(RepositoryState::Existing);
        }

        let root = self.repo.root().to_path_buf();
        if self.config.dry_run {
            tracing::info!(path = %root.display(), "[DRY RUN] would initialize repository");
            return Ok(RepositoryState::WouldInitialize);
        }

        let git = |source| EngineError::Bootstrap {
            path: root.clone(),
            source,
        };

        self.repo.init().map_err(git)?;
        self.repo.set_head_branch(&self.config.branch).map_err(git)?;

        let readme = root.join(README_FILE);
        fs::write(&readme, README_CONTENT).map_err(|source| EngineError::BootstrapIo {
            path: readme.clone(),
            source,
        })?;
        self.repo.add(README_FILE).map_err(git)?;
        self.repo.commit(INITIAL_COMMIT_MESSAGE, None).map_err(git)?;

        self.emit(
            self.event(EventKind::RepositoryInitialized)
                .with_file(README_FILE)
                .with_note(format!(
                    "Initialized new git repository at {} on branch {}",
                    root.display(),
                    self.config.branch
                )),
        );
        Ok(RepositoryState::Initialized)
    }
}
