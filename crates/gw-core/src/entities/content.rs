use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ContentType, QuestionKind};
use crate::ids::skill_token;

/// Deterministic cache key for a piece of content within a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub content_type: ContentType,
    pub skill: String,
    pub milestone_number: u32,
}

impl ContentKey {
    /// `"{content_type}-{skill-slug}-{skill-hash}-m{milestone_number}"`.
    ///
    /// Distinct skills never share an ID; skill names differing only in case
    /// or surrounding whitespace do.
    #[must_use]
    pub fn content_id(&self) -> String {
        format!(
            "{}-{}-m{}",
            self.content_type,
            skill_token(&self.skill),
            self.milestone_number
        )
    }

    /// Whether a cached item was built for this key.
    #[must_use]
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.content_type == item.content_type
            && self.milestone_number == item.milestone_number
            && self.skill.trim().to_lowercase() == item.skill.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CoreConcept {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonExample {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonBody {
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub core_concepts: Vec<CoreConcept>,
    #[serde(default)]
    pub examples: Vec<LessonExample>,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub common_pitfalls: Vec<String>,
}

/// A quiz question. Empty `id`/`correct_answer`/`explanation` mean the
/// collaborator left them out; normalization fills them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizQuestion {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

const fn default_passing_score() -> u32 {
    70
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizBody {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    /// Percentage needed to pass.
    #[serde(default = "default_passing_score")]
    pub passing_score: u32,
}

impl Default for QuizBody {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            passing_score: default_passing_score(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChallengeHint {
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub hint: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChallengeBody {
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub hints: Vec<ChallengeHint>,
    #[serde(default)]
    pub expected_output: String,
    #[serde(default)]
    pub starter_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Flashcard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FlashcardsBody {
    #[serde(default)]
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SummaryBody {
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    #[serde(default)]
    pub skills_developed: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Generated content, one variant per content type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBody {
    Lesson(LessonBody),
    Quiz(QuizBody),
    CodingChallenge(ChallengeBody),
    Flashcards(FlashcardsBody),
    Summary(SummaryBody),
}

impl ContentBody {
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self {
            Self::Lesson(_) => ContentType::Lesson,
            Self::Quiz(_) => ContentType::Quiz,
            Self::CodingChallenge(_) => ContentType::CodingChallenge,
            Self::Flashcards(_) => ContentType::Flashcards,
            Self::Summary(_) => ContentType::Summary,
        }
    }
}

/// A cached piece of content. Immutable once cached.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentItem {
    pub content_id: String,
    pub session_id: String,
    pub content_type: ContentType,
    pub skill: String,
    pub milestone_number: u32,
    pub xp: u32,
    pub estimated_time: String,
    /// The collaborator failed and `body` is the canned fallback.
    #[serde(default)]
    pub degraded: bool,
    pub created_at: DateTime<Utc>,
    pub body: ContentBody,
}

impl ContentItem {
    #[must_use]
    pub fn key(&self) -> ContentKey {
        ContentKey {
            content_type: self.content_type,
            skill: self.skill.clone(),
            milestone_number: self.milestone_number,
        }
    }
}
