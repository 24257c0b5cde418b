use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{PartKind, ProficiencyLevel};

/// A caller-supplied `(skill, current level)` pair for path synthesis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkillRating {
    pub skill: String,
    pub current_level: ProficiencyLevel,
}

/// One graded unit inside a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MilestonePart {
    pub kind: PartKind,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub xp: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Documentation,
    Guide,
    Tutorial,
}

/// Reference material attached to a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExternalResource {
    pub title: String,
    pub url: String,
    pub kind: ResourceKind,
}

/// Real-project ticket suggested alongside a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectChallenge {
    pub enabled: bool,
    pub description: String,
    pub ticket_template: String,
    pub xp_bonus: u32,
}

/// Fixed two-week unit of a learning path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    /// 1-based, contiguous within a path.
    pub milestone_number: u32,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// `250 × milestone_number`.
    pub xp: u32,
    pub parts: Vec<MilestonePart>,
    pub mentor_checkpoint: bool,
    pub project_challenge: ProjectChallenge,
    pub resources: Vec<ExternalResource>,
}

/// Progression plan for one skill, one ordinal step up.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningPath {
    pub skill: String,
    pub current_level: ProficiencyLevel,
    pub target_level: ProficiencyLevel,
    pub milestones: Vec<Milestone>,
    pub total_xp: u32,
    pub estimated_weeks: u32,
}

/// All learning paths synthesized for one request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningPlan {
    /// Display label only, e.g. `"Frontend Engineer"`.
    pub role: String,
    pub generated_at: DateTime<Utc>,
    pub learning_paths: Vec<LearningPath>,
    pub total_xp_available: u32,
    pub total_skills: usize,
    pub estimated_total_weeks: u32,
}
