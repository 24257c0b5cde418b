//! The proficiency scale, status enums, and classification enums for Gapwise.
//!
//! Domain-facing enums (proficiency, role level, priority, readiness) serialize
//! with their human-readable names (`"Team Lead"`, `"Almost Ready"`). Internal
//! enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ProficiencyLevel
// ---------------------------------------------------------------------------

/// Ordinal proficiency tier. The ordinal index is the canonical numeric score.
///
/// ```text
/// None(0) < Basic(1) < Intermediate(2) < Advanced(3) < Expert(4)
/// ```
///
/// Every numeric conversion in the pipeline goes through [`ProficiencyLevel::score`]
/// and [`ProficiencyLevel::from_score`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ProficiencyLevel {
    #[serde(alias = "none")]
    None,
    #[serde(alias = "basic")]
    Basic,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
    #[serde(alias = "expert")]
    Expert,
}

impl ProficiencyLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Basic,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Largest possible single-skill gap (None -> Expert).
    pub const MAX_SCORE: f64 = 4.0;

    /// Level assumed for a skill that an assessment source does not mention.
    pub const ASSUMED: Self = Self::Basic;

    /// Ordinal index, 0 through 4.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Basic => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Expert => 4,
        }
    }

    /// Ordinal index as a float, for weighted arithmetic.
    #[must_use]
    pub fn score_f64(self) -> f64 {
        f64::from(self.score())
    }

    /// Level at the given ordinal index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::None),
            1 => Some(Self::Basic),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            4 => Some(Self::Expert),
            _ => None,
        }
    }

    /// Nearest level for a numeric score.
    ///
    /// Clamps to `[0, 4]` and rounds half up, which yields the half-open bins
    /// `[0,0.5) [0.5,1.5) [1.5,2.5) [2.5,3.5) [3.5,4]`. NaN maps to `None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self::None;
        }
        let index = (score.clamp(0.0, Self::MAX_SCORE) + 0.5).floor() as u8;
        Self::from_index(index).unwrap_or(Self::Expert)
    }

    /// Parse a level name, ignoring surrounding whitespace and ASCII case.
    #[must_use]
    pub fn parse_lenient(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
    }

    /// Ordinal score of a level name; unrecognized names score 0.
    #[must_use]
    pub fn score_of_name(name: &str) -> u8 {
        Self::parse_lenient(name).map_or(0, Self::score)
    }

    /// One ordinal step up, or `None` at `Expert`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.score() + 1)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown proficiency level '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// RoleLevel
// ---------------------------------------------------------------------------

/// Seniority a person is assessed against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RoleLevel {
    #[serde(alias = "junior")]
    Junior,
    #[serde(alias = "senior")]
    Senior,
    #[serde(rename = "Team Lead", alias = "team_lead", alias = "TeamLead")]
    TeamLead,
}

impl RoleLevel {
    pub const ALL: [Self; 3] = [Self::Junior, Self::Senior, Self::TeamLead];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Senior => "Senior",
            Self::TeamLead => "Team Lead",
        }
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "junior" => Ok(Self::Junior),
            "senior" => Ok(Self::Senior),
            "teamlead" => Ok(Self::TeamLead),
            _ => Err(CoreError::InvalidInput(format!("unknown role level '{s}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Urgency of closing a skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// `gap >= 2` is High, `1 <= gap < 2` is Medium, anything smaller is Low.
    #[must_use]
    pub fn from_gap(gap_score: f64) -> Self {
        if gap_score >= 2.0 {
            Self::High
        } else if gap_score >= 1.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReadinessStatus
// ---------------------------------------------------------------------------

/// Banded overall readiness for the target role level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ReadinessStatus {
    Ready,
    #[serde(rename = "Almost Ready")]
    AlmostReady,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl ReadinessStatus {
    /// Ready >= 90, Almost Ready >= 70, Needs Improvement >= 50, else Not Ready.
    #[must_use]
    pub fn from_readiness(readiness: f64) -> Self {
        if readiness >= 90.0 {
            Self::Ready
        } else if readiness >= 70.0 {
            Self::AlmostReady
        } else if readiness >= 50.0 {
            Self::NeedsImprovement
        } else {
            Self::NotReady
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::AlmostReady => "Almost Ready",
            Self::NeedsImprovement => "Needs Improvement",
            Self::NotReady => "Not Ready",
        }
    }
}

impl fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Kind of generated learning content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Lesson,
    Quiz,
    CodingChallenge,
    Flashcards,
    Summary,
}

impl ContentType {
    /// XP awarded for completing content of this type.
    #[must_use]
    pub const fn default_xp(self) -> u32 {
        match self {
            Self::Lesson => 50,
            Self::Quiz => 30,
            Self::CodingChallenge => 100,
            Self::Flashcards => 20,
            Self::Summary => 25,
        }
    }

    #[must_use]
    pub const fn estimated_time(self) -> &'static str {
        match self {
            Self::Lesson => "15 minutes",
            Self::Quiz => "10 minutes",
            Self::CodingChallenge => "30 minutes",
            Self::Flashcards | Self::Summary => "5 minutes",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Quiz => "quiz",
            Self::CodingChallenge => "coding_challenge",
            Self::Flashcards => "flashcards",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PartKind
// ---------------------------------------------------------------------------

/// The four graded parts every milestone contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Lesson,
    Quiz,
    Challenge,
    Practice,
}

impl PartKind {
    pub const ALL: [Self; 4] = [Self::Lesson, Self::Quiz, Self::Challenge, Self::Practice];

    #[must_use]
    pub const fn xp(self) -> u32 {
        match self {
            Self::Lesson => 50,
            Self::Quiz => 30,
            Self::Challenge => 75,
            Self::Practice => 25,
        }
    }

    #[must_use]
    pub const fn duration(self) -> &'static str {
        match self {
            Self::Lesson => "45-60 minutes",
            Self::Quiz => "15-20 minutes",
            Self::Challenge => "1-2 hours",
            Self::Practice => "30-45 minutes",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Quiz => "quiz",
            Self::Challenge => "challenge",
            Self::Practice => "practice",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestionKind
// ---------------------------------------------------------------------------

/// Shape of a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    Scenario,
    TrueFalse,
}

impl QuestionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::Scenario => "scenario",
            Self::TrueFalse => "true_false",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Progress of an assessment session through the pipeline.
///
/// ```text
/// active → ready_for_self_assessment → assessment_complete → complete
///          ↺ (AI assessment re-recorded)                      │
///          ←──────────────────────────────────────────────────┤ (new AI assessment)
///                                     ←───────────────────────┘ (re-submission)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    ReadyForSelfAssessment,
    AssessmentComplete,
    Complete,
}

impl SessionStatus {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::ReadyForSelfAssessment],
            Self::ReadyForSelfAssessment => {
                &[Self::ReadyForSelfAssessment, Self::AssessmentComplete]
            }
            Self::AssessmentComplete => &[Self::Complete],
            Self::Complete => &[Self::AssessmentComplete, Self::ReadyForSelfAssessment],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::ReadyForSelfAssessment => "ready_for_self_assessment",
            Self::AssessmentComplete => "assessment_complete",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AwardPolicy
// ---------------------------------------------------------------------------

/// What happens when the same content id is completed twice.
///
/// `Additive` re-awards XP on every passing submission. `Idempotent` awards
/// XP only the first time a content id is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum AwardPolicy {
    #[default]
    Additive,
    Idempotent,
}

impl AwardPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Idempotent => "idempotent",
        }
    }
}

impl fmt::Display for AwardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Entity kinds recorded in the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Session,
    AiAssessment,
    SelfAssessment,
    GapAnalysis,
    Content,
    Progress,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::AiAssessment => "ai_assessment",
            Self::SelfAssessment => "self_assessment",
            Self::GapAnalysis => "gap_analysis",
            Self::Content => "content",
            Self::Progress => "progress",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrailOp
// ---------------------------------------------------------------------------

/// Mutation kind recorded in the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    Create,
    Update,
    Delete,
    Transition,
    Complete,
}

impl TrailOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Transition => "transition",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for TrailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
