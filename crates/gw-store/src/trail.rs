//! JSONL trail writer.
//!
//! Appends `TrailOperation` records to per-session `{data_dir}/trail/{session_id}.jsonl`
//! files. Uses `serde_jsonlines::append_json_lines` for per-line appends.

use std::path::{Path, PathBuf};

use gw_core::enums::{EntityType, TrailOp};
use gw_core::trail::TrailOperation;
use serde::Serialize;

use crate::error::StoreError;

/// Appends trail operations to per-session JSONL files.
///
/// Every mutation in `GapwiseService` calls `append()` after the store
/// accepted the change.
pub struct TrailWriter {
    trail_dir: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    /// Create a writer pointing at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(trail_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&trail_dir)?;
        Ok(Self {
            trail_dir,
            enabled: true,
        })
    }

    /// A writer that drops every operation (memory backend, tests).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            trail_dir: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a trail operation to the session's JSONL file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file write fails.
    pub fn append(&self, op: &TrailOperation) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.trail_dir.join(format!("{}.jsonl", op.ses));
        serde_jsonlines::append_json_lines(&path, [op])?;
        Ok(())
    }

    /// Serialize `data` and append it as a new operation stamped now.
    ///
    /// # Errors
    ///
    /// `StoreError::Serialization` or `StoreError::Io`.
    pub fn record<T: Serialize>(
        &self,
        session_id: &str,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        data: &T,
    ) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }
        let data = serde_json::to_value(data)?;
        self.append(&TrailOperation::now(session_id, op, entity, id, data))
    }

    /// Every operation recorded for a session, in file order.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` when the file exists but cannot be read or parsed.
    pub fn read_session(&self, session_id: &str) -> Result<Vec<TrailOperation>, StoreError> {
        let path = self.trail_dir.join(format!("{session_id}.jsonl"));
        if !self.enabled || !path.exists() {
            return Ok(Vec::new());
        }
        let ops = serde_jsonlines::json_lines(&path)?.collect::<Result<Vec<_>, _>>()?;
        Ok(ops)
    }

    #[must_use]
    pub fn trail_dir(&self) -> &Path {
        &self.trail_dir
    }
}
