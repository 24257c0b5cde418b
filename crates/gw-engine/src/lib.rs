//! # gw-engine
//!
//! The Gapwise pipeline as pure functions over `gw-core` types:
//!
//! - [`scorer`]: self-assessment answers to per-skill estimates
//! - [`gap`]: fused AI/self estimates against the skill standard
//! - [`path`]: gaps or skill ratings to milestone-based learning paths
//! - [`grading`]: completion events to pass/fail and XP
//! - [`upstream`]: the tagged boundary for collaborator output
//! - [`content`]: quiz normalization and canned fallback bodies
//! - [`question_bank`]: the self-assessment test
//!
//! Nothing here performs I/O. Timestamps are passed in by the caller.

pub mod content;
pub mod gap;
pub mod grading;
pub mod path;
pub mod question_bank;
pub mod scorer;
pub mod upstream;

/// Round to two decimal places for reporting.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
