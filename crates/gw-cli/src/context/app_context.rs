use std::path::PathBuf;

use anyhow::Context;
use gw_config::GapwiseConfig;
use gw_store::GapwiseService;

/// Everything a command handler needs.
pub struct AppContext {
    pub config: GapwiseConfig,
    pub service: GapwiseService,
}

impl AppContext {
    /// Validate configuration and open the configured store.
    pub fn init(project_root: PathBuf, config: GapwiseConfig) -> anyhow::Result<Self> {
        let service = GapwiseService::from_config(&config, &project_root)
            .context("failed to open gapwise store")?;
        tracing::debug!(root = %project_root.display(), backend = %config.store.backend, "context ready");
        Ok(Self {
            config,
            service,
        })
    }
}
