//! Session store configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Volatile, process-local.
    Memory,
    /// One JSON document per session under `data_dir`.
    #[default]
    File,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::File => "file",
        })
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".gapwise")
}

const fn default_trail() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Root directory for sessions, cached content, and trail files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Append a JSONL trail line per mutation (file backend only).
    #[serde(default = "default_trail")]
    pub trail: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: default_data_dir(),
            trail: default_trail(),
        }
    }
}

impl StoreConfig {
    /// Directory holding per-session trail files.
    #[must_use]
    pub fn trail_dir(&self) -> PathBuf {
        self.data_dir.join("trail")
    }

    /// Whether the trail should be written for this backend.
    #[must_use]
    pub fn trail_enabled(&self) -> bool {
        self.trail && self.backend == StoreBackend::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, StoreBackend::File);
        assert_eq!(config.data_dir, PathBuf::from(".gapwise"));
        assert!(config.trail_enabled());
        assert_eq!(config.trail_dir(), PathBuf::from(".gapwise/trail"));
    }

    #[test]
    fn memory_backend_never_writes_trail() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            ..Default::default()
        };
        assert!(!config.trail_enabled());
    }
}
