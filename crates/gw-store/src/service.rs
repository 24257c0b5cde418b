//! Service layer running the pipeline over an injected store.
//!
//! `GapwiseService` wraps a [`SessionStore`], the validated skill standard,
//! and a [`TrailWriter`]. Operations are implemented as `impl GapwiseService`
//! blocks in `repos/`.

use std::path::Path;
use std::sync::Arc;

use gw_config::{GapwiseConfig, StoreBackend};
use gw_core::enums::{AwardPolicy, EntityType, TrailOp};
use gw_core::standard::SkillStandard;
use serde::Serialize;

use crate::error::StoreError;
use crate::file::FileStore;
use crate::memory::MemoryStore;
use crate::record::SessionRecord;
use crate::store::SessionStore;
use crate::trail::TrailWriter;

/// Behaviour knobs taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    pub award_policy: AwardPolicy,
    /// Display label used for learning plans when the caller gives none.
    pub default_role: String,
    pub resource_base_url: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self::from_config(&GapwiseConfig::default())
    }
}

impl ServiceOptions {
    #[must_use]
    pub fn from_config(config: &GapwiseConfig) -> Self {
        Self {
            award_policy: config.ledger.award_policy,
            default_role: config.general.default_role.clone(),
            resource_base_url: config.resources.base().to_string(),
        }
    }
}

/// Orchestrates scoring, gap analysis, path synthesis, and the XP ledger.
///
/// Every mutating method follows the same protocol:
/// 1. Load or atomically update the session record through the store
/// 2. Run the pure engine step
/// 3. Append a JSONL trail operation
pub struct GapwiseService {
    store: Arc<dyn SessionStore>,
    standard: SkillStandard,
    options: ServiceOptions,
    trail: TrailWriter,
}

impl GapwiseService {
    #[must_use]
    pub fn new(
        store: Arc<dyn SessionStore>,
        standard: SkillStandard,
        options: ServiceOptions,
        trail: TrailWriter,
    ) -> Self {
        Self {
            store,
            standard,
            options,
            trail,
        }
    }

    /// Volatile service with the built-in standard and default options.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            SkillStandard::builtin(),
            ServiceOptions::default(),
            TrailWriter::disabled(),
        )
    }

    /// Build a service from loaded configuration.
    ///
    /// A relative `store.data_dir` is resolved against `project_root`.
    ///
    /// # Errors
    ///
    /// `StoreError::Config` when the configuration is invalid (including an
    /// unusable skill standard), `StoreError::Io` when the data directory
    /// cannot be created.
    pub fn from_config(config: &GapwiseConfig, project_root: &Path) -> Result<Self, StoreError> {
        let standard = config.validate()?;
        let data_dir = project_root.join(&config.store.data_dir);

        let store: Arc<dyn SessionStore> = match config.store.backend {
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::File => Arc::new(FileStore::open(&data_dir)?),
        };
        let trail = if config.store.trail_enabled() {
            TrailWriter::new(project_root.join(config.store.trail_dir()))?
        } else {
            TrailWriter::disabled()
        };

        tracing::debug!(
            backend = %config.store.backend,
            skills = standard.len(),
            award_policy = %config.ledger.award_policy,
            "service ready"
        );

        Ok(Self::new(
            store,
            standard,
            ServiceOptions::from_config(config),
            trail,
        ))
    }

    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    #[must_use]
    pub const fn standard(&self) -> &SkillStandard {
        &self.standard
    }

    #[must_use]
    pub const fn options(&self) -> &ServiceOptions {
        &self.options
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    /// Load a session record.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session.
    /// Append a committed mutation to the trail.
    ///
    /// The store already holds the change, so a failed write is logged and
    /// the operation still succeeds. Retrying it would repeat the mutation.
    pub(crate) fn audit<T: Serialize>(
        &self,
        session_id: &str,
        op: TrailOp,
        entity: EntityType,
        id: &str,
        data: &T,
    ) {
        if let Err(error) = self.trail.record(session_id, op, entity, id, data) {
            tracing::warn!(session = %session_id, %op, %entity, %id, %error, "trail write failed");
        }
    }

    pub(crate) fn load(&self, session_id: &str) -> Result<SessionRecord, StoreError> {
        self.store
            .get(session_id)?
            .ok_or_else(|| crate::store::not_found(session_id))
    }
}
