//! # gw-core
//!
//! Core types for Gapwise: the proficiency scale, the skill standard matrix,
//! entity structs, status enums, ID generation, the trail envelope, and the
//! cross-cutting `CoreError`.
//!
//! This crate has no I/O. Every other Gapwise crate depends on it.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod standard;
pub mod trail;
