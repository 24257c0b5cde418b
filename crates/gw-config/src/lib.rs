//! # gw-config
//!
//! Layered configuration loading for Gapwise using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GAPWISE_*` prefix, `__` as separator)
//! 2. Project-level `.gapwise/config.toml`
//! 3. User-level `~/.config/gapwise/config.toml`
//! 4. Built-in defaults
//!
//! `GAPWISE_LEDGER__AWARD_POLICY=idempotent` maps to `ledger.award_policy`.
//!
//! # Usage
//!
//! ```no_run
//! use gw_config::GapwiseConfig;
//!
//! let config = GapwiseConfig::load_with_dotenv().expect("config");
//! let standard = config.standards.resolve().expect("skill standard");
//! println!("{} skills", standard.len());
//! ```

mod error;
mod general;
mod ledger;
mod resources;
mod standards;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use ledger::LedgerConfig;
pub use resources::ResourcesConfig;
pub use standards::StandardsConfig;
pub use store::{StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gw_core::standard::SkillStandard;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local directory holding `config.toml` and the file store.
pub const PROJECT_DIR: &str = ".gapwise";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GapwiseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub standards: StandardsConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

impl GapwiseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_in(Path::new("."))
    }

    /// Build the figment provider chain with `root` as the project directory.
    pub fn figment_in(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GAPWISE_").split("__"))
    }

    /// Check every section and resolve the skill standard matrix.
    ///
    /// This is the startup gate: an unusable matrix aborts initialization.
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered.
    pub fn validate(&self) -> Result<SkillStandard, ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        self.resources.validate()?;
        self.standards.resolve()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gapwise").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::enums::AwardPolicy;

    #[test]
    fn default_config_validates() {
        let config = GapwiseConfig::default();
        let standard = config.validate().unwrap();
        assert_eq!(standard.len(), 10);
        assert_eq!(config.ledger.award_policy, AwardPolicy::Additive);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: GapwiseConfig = GapwiseConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 20);
            assert_eq!(config.store.backend, StoreBackend::File);
            Ok(())
        });
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = GapwiseConfig::default();
        config.general.default_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
