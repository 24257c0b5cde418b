//! Response types returned as JSON by `gw` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AssessmentQuestion, Session, UserProfile};
use crate::enums::{RoleLevel, SessionStatus};

/// Response from `gw session start`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SessionStartResponse {
    pub session: Session,
    pub profile: UserProfile,
    pub next_step: String,
}

/// One row of `gw session list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub status: SessionStatus,
    pub target_level: RoleLevel,
    pub total_xp: u64,
}

/// Response from `gw session list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionSummary>,
    pub total: usize,
}

/// Response from `gw assess test`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssessmentTestResponse {
    pub session_id: String,
    pub target_level: RoleLevel,
    pub total_questions: usize,
    pub skills_covered: Vec<String>,
    pub questions: Vec<AssessmentQuestion>,
}

/// Response from `gw session delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}
