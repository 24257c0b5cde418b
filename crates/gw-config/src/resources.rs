//! External resource link configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "https://example.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourcesConfig {
    /// Base URL for milestone resource links (`{base_url}/{skill}/docs`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ResourcesConfig {
    /// # Errors
    ///
    /// `InvalidValue` if `base_url` is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.starts_with("https://") || self.base_url.starts_with("http://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "resources.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            })
        }
    }

    /// `base_url` without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
