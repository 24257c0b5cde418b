//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

fn default_role() -> String {
    "Frontend Engineer".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display label used for learning plans when none is given.
    #[serde(default = "default_role")]
    pub default_role: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_limit: default_limit(),
        }
    }
}
