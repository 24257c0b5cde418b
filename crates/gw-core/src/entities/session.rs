use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RoleLevel, SessionStatus};

/// The person being assessed, as supplied when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_current_level")]
    pub current_level: RoleLevel,
    pub target_level: RoleLevel,
    #[serde(default)]
    pub years_of_experience: Option<f64>,
    #[serde(default)]
    pub primary_technologies: Vec<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

const fn default_current_level() -> RoleLevel {
    RoleLevel::Junior
}

/// An assessment session. Owns every derived entity created for it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
