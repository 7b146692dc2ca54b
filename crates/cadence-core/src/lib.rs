//! # cadence-core
//!
//! Core types shared across all cadence crates:
//! - Event kinds, levels, and run modes
//! - The structured `CommitEvent` envelope written to the execution log
//! - `RunSummary`, the explicit aggregate returned by every run mode
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod event;
pub mod summary;
