//! JSONL trail operation envelope.
//!
//! Every mutation of a session is appended as a `TrailOperation` to
//! `{data_dir}/trail/{session_id}.jsonl`. Old lines without a `v` field
//! deserialize with `v == 1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, TrailOp};

const fn default_trail_version() -> u32 {
    1
}

/// A single operation recorded in the JSONL trail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    /// Schema version.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// RFC 3339 timestamp of the operation.
    pub ts: String,

    /// Session the mutation belongs to.
    pub ses: String,

    pub op: TrailOp,

    pub entity: EntityType,

    /// ID of the affected entity (session id, content id, report id).
    pub id: String,

    /// Payload; full state for `create`, changed fields for `update`.
    pub data: serde_json::Value,
}

impl TrailOperation {
    /// Build a version-1 operation stamped with the current time.
    #[must_use]
    pub fn now(
        ses: impl Into<String>,
        op: TrailOp,
        entity: EntityType,
        id: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            v: default_trail_version(),
            ts: chrono::Utc::now().to_rfc3339(),
            ses: ses.into(),
            op,
            entity,
            id: id.into(),
            data,
        }
    }
}
