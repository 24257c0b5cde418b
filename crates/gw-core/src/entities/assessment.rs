use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProficiencyLevel;

/// How a self-assessment question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFormat {
    /// Pick one of the five proficiency level names.
    Proficiency,
    /// Yes / Somewhat / No, with a confidence rating.
    BooleanWithConfidence,
}

/// One question of the self-assessment test.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssessmentQuestion {
    pub id: String,
    pub skill: String,
    pub question: String,
    #[serde(rename = "type")]
    pub format: AnswerFormat,
    pub options: Vec<String>,
}

/// A single self-assessment answer. One skill may receive several answers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SelfAssessmentAnswer {
    pub question_id: String,
    pub skill: String,
    pub answer: String,
    /// 1 (unsure) to 5 (certain). Absent values are left out of the mean.
    #[serde(default, alias = "confidence_level")]
    pub confidence: Option<u8>,
}

/// Per-skill estimate derived from self-assessment answers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SkillProficiencyEstimate {
    pub skill: String,
    pub proficiency: ProficiencyLevel,
    /// Mean answer score, 0.0 to 4.0.
    pub score: f64,
    /// Mean confidence, 1.0 to 5.0.
    pub confidence: f64,
}

/// Output of the self-assessment scorer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SelfAssessmentResult {
    pub skills: Vec<SkillProficiencyEstimate>,
    pub overall_score: f64,
    pub assessed_at: DateTime<Utc>,
}

impl SelfAssessmentResult {
    /// Estimate for a skill, matched ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, skill: &str) -> Option<&SkillProficiencyEstimate> {
        let skill = skill.trim();
        self.skills
            .iter()
            .find(|est| est.skill.trim().eq_ignore_ascii_case(skill))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// One skill rated by the conversational collaborator.
///
/// `level` is kept as raw text: the collaborator may send names outside the
/// proficiency scale, which score 0.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssessedSkill {
    pub skill: String,
    pub level: String,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl AssessedSkill {
    /// Parsed level; unrecognized names map to `None` (score 0).
    #[must_use]
    pub fn proficiency(&self) -> ProficiencyLevel {
        ProficiencyLevel::parse_lenient(&self.level).unwrap_or(ProficiencyLevel::None)
    }
}

/// Skill assessment supplied by the conversational collaborator. Untrusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExternalSkillAssessment {
    #[serde(default)]
    pub skills: Vec<AssessedSkill>,
    #[serde(default)]
    pub overall_assessment: Option<String>,
    #[serde(default)]
    pub readiness_for_target: Option<String>,
}

impl ExternalSkillAssessment {
    /// Rating for a skill, matched ignoring ASCII case and surrounding whitespace.
    /// The first entry wins when a skill is listed twice.
    #[must_use]
    pub fn get(&self, skill: &str) -> Option<&AssessedSkill> {
        let skill = skill.trim();
        self.skills
            .iter()
            .find(|s| s.skill.trim().eq_ignore_ascii_case(skill))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
