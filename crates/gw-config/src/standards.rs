//! Skill standard matrix configuration.
//!
//! A non-empty `[standards.skills]` table replaces the built-in matrix:
//!
//! ```toml
//! [standards.skills.Rust]
//! Junior = "Basic"
//! Senior = "Advanced"
//! "Team Lead" = "Expert"
//! ```

use std::collections::BTreeMap;

use gw_core::enums::{ProficiencyLevel, RoleLevel};
use gw_core::standard::SkillStandard;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_builtin() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandardsConfig {
    /// Fall back to the built-in frontend matrix when `skills` is empty.
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Skill -> role level -> required proficiency.
    #[serde(default)]
    pub skills: BTreeMap<String, BTreeMap<RoleLevel, ProficiencyLevel>>,
}

impl Default for StandardsConfig {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
            skills: BTreeMap::new(),
        }
    }
}

impl StandardsConfig {
    /// Whether a custom matrix was supplied.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        !self.skills.is_empty()
    }

    /// Resolve the validated matrix this configuration describes.
    ///
    /// # Errors
    ///
    /// `NotConfigured` when no custom skills are given and the built-in matrix
    /// is disabled; `InvalidValue` when the custom matrix fails validation.
    pub fn resolve(&self) -> Result<SkillStandard, ConfigError> {
        if self.is_custom() {
            return SkillStandard::try_from(self.skills.clone()).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "standards.skills".into(),
                    reason: e.to_string(),
                }
            });
        }
        if self.builtin {
            return Ok(SkillStandard::builtin());
        }
        Err(ConfigError::NotConfigured {
            section: "standards".into(),
        })
    }
}
