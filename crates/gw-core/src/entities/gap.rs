use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Priority, ProficiencyLevel, ReadinessStatus, RoleLevel};

/// Gap between fused current proficiency and the requirement for one skill.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SkillGap {
    pub skill: String,
    /// Fused level, `level(0.6 × ai + 0.4 × self)`.
    pub current_level: ProficiencyLevel,
    pub required_level: ProficiencyLevel,
    /// Human-readable gap band.
    pub gap: String,
    /// Unrounded weighted score behind `current_level`.
    pub combined_score: f64,
    /// `required − current` on the ordinal scale; negative means exceeding.
    pub gap_score: f64,
    pub ai_assessed_level: ProficiencyLevel,
    pub self_assessed_level: ProficiencyLevel,
    pub priority: Priority,
    pub recommendations: Vec<String>,
}

/// Priority label of a summary learning phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PhasePriority {
    High,
    Medium,
    Essential,
}

impl fmt::Display for PhasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Essential => "Essential",
        })
    }
}

/// One phase of the report's summary learning path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningPhase {
    pub phase: String,
    pub skill: String,
    pub focus: String,
    pub duration: String,
    pub priority: PhasePriority,
}

/// Immutable snapshot produced by one gap-analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GapAnalysisReport {
    pub session_id: String,
    pub user_name: String,
    pub current_level: RoleLevel,
    pub target_level: RoleLevel,
    pub generated_at: DateTime<Utc>,

    pub overall_readiness: f64,
    pub readiness_status: ReadinessStatus,

    pub skill_gaps: Vec<SkillGap>,

    pub skills_on_track: Vec<String>,
    pub skills_need_improvement: Vec<String>,
    pub critical_gaps: Vec<String>,

    pub learning_path: Vec<LearningPhase>,
    pub estimated_time_to_target: String,
    pub priority_areas: Vec<String>,

    pub ai_vs_self_assessment_alignment: f64,
    pub assessment_notes: String,

    /// The AI assessment was unusable and every skill fell back to `Basic`.
    #[serde(default)]
    pub ai_assessment_degraded: bool,
}
