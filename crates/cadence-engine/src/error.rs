use std::path::PathBuf;

use cadence_git::GitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The repository could not be created. Fatal for the run.
    #[error("repository bootstrap failed at {path}: {source}")]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: GitError,
    },

    #[error("repository bootstrap failed writing {path}: {source}")]
    BootstrapIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content mutator could not touch its target file.
    #[error("failed to modify file {file}: {source}")]
    Mutation {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A pool the policy draws from is empty.
    #[error("no {0} configured")]
    EmptyPool(&'static str),

    #[error("execution log {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
