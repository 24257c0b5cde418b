use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Completion state of one content id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressRecord {
    pub completed: bool,
    pub xp_earned: u32,
    pub completed_at: DateTime<Utc>,
    pub passed: bool,
    pub score: f64,
}

/// Per-session progress: a record per content id and the running XP total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressLedger {
    #[serde(default)]
    pub records: BTreeMap<String, ProgressRecord>,
    #[serde(default)]
    pub total_xp: u64,
}

impl ProgressLedger {
    /// Whether the content id already has a passing completion.
    #[must_use]
    pub fn is_completed(&self, content_id: &str) -> bool {
        self.records
            .get(content_id)
            .is_some_and(|r| r.completed && r.passed)
    }

    /// Store the record (replacing any previous one) and add its XP.
    pub fn record(&mut self, content_id: impl Into<String>, record: ProgressRecord) {
        self.total_xp += u64::from(record.xp_earned);
        self.records.insert(content_id.into(), record);
    }
}

/// A submitted answer to one quiz question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer: String,
}

/// Completion event for a cached content item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletionRequest {
    pub content_id: String,
    /// Required for quizzes. An empty list grades as 0%.
    #[serde(default)]
    pub answers: Option<Vec<QuizAnswer>>,
    /// Lessons only.
    #[serde(default = "default_marked_as_read")]
    pub marked_as_read: bool,
}

const fn default_marked_as_read() -> bool {
    true
}

impl CompletionRequest {
    #[must_use]
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            answers: None,
            marked_as_read: default_marked_as_read(),
        }
    }

    #[must_use]
    pub fn with_answers(mut self, answers: Vec<QuizAnswer>) -> Self {
        self.answers = Some(answers);
        self
    }
}

/// Outcome of a completion event.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompletionResult {
    pub success: bool,
    pub content_id: String,
    pub xp_earned: u32,
    pub passed: bool,
    pub score: f64,
    pub total_xp: u64,
    pub message: String,
}
