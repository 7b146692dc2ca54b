//! Cross-cutting error types for cadence.
//!
//! Domain-specific errors (`ConfigError`, `GitError`, `EngineError`,
//! `AuditError`) live in their respective crates. They converge into
//! `anyhow::Error` in `cadence-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known variant.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
