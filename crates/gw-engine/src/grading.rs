//! Completion grading for the XP ledger.
//!
//! Quizzes are scored against their stored answers, lessons pass when
//! marked as read, and every other content type passes on submission.
//! Storage of the resulting record is the caller's concern.

use std::collections::HashMap;

use gw_core::entities::{CompletionRequest, ContentBody, ContentItem, QuizBody, QuizAnswer};
use gw_core::enums::AwardPolicy;
use gw_core::errors::CoreError;

use crate::round2;

/// Outcome of grading one completion event.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub passed: bool,
    /// Percentage in `[0, 100]`. Non-quiz content reports 100 when passed.
    pub score: f64,
    pub xp_earned: u32,
    pub message: String,
}

/// Grade a completion event against the cached item.
///
/// `already_completed` is whether the ledger holds a passing record for
/// this content id. Under [`AwardPolicy::Idempotent`] such a resubmission
/// earns no XP; under [`AwardPolicy::Additive`] XP is awarded again.
///
/// # Errors
///
/// `InvalidInput` when the content id does not match the item, or a quiz
/// submission carries no `answers`.
pub fn grade(
    item: &ContentItem,
    request: &CompletionRequest,
    already_completed: bool,
    policy: AwardPolicy,
) -> Result<Grade, CoreError> {
    if request.content_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("content_id is required".into()));
    }
    if request.content_id != item.content_id {
        return Err(CoreError::InvalidInput(format!(
            "completion for {} submitted against {}",
            request.content_id, item.content_id
        )));
    }

    let (passed, score, message) = match &item.body {
        ContentBody::Quiz(quiz) => {
            let answers = request.answers.as_deref().ok_or_else(|| {
                CoreError::InvalidInput("answers are required for quiz completion".into())
            })?;
            let score = quiz_score(quiz, answers);
            let passed = score >= f64::from(quiz.passing_score);
            let message = if passed {
                format!("Quiz passed with {score}%")
            } else {
                format!(
                    "Quiz not passed ({score}%). {}% required",
                    quiz.passing_score
                )
            };
            (passed, score, message)
        }
        ContentBody::Lesson(_) => {
            if request.marked_as_read {
                (true, 100.0, "Lesson completed".to_string())
            } else {
                (false, 0.0, "Lesson not marked as read".to_string())
            }
        }
        ContentBody::CodingChallenge(_) | ContentBody::Flashcards(_) | ContentBody::Summary(_) => (
            true,
            100.0,
            format!("{} completed", item.content_type),
        ),
    };

    let mut xp_earned = if passed { item.xp } else { 0 };
    let mut message = message;
    if passed && already_completed {
        match policy {
            AwardPolicy::Idempotent => {
                xp_earned = 0;
                message.push_str(". XP already awarded for this content");
            }
            AwardPolicy::Additive => {
                tracing::warn!(
                    content_id = %item.content_id,
                    xp = xp_earned,
                    "re-awarding XP for already completed content"
                );
            }
        }
    }

    tracing::debug!(content_id = %item.content_id, passed, score, xp_earned, "graded completion");

    Ok(Grade {
        passed,
        score,
        xp_earned,
        message,
    })
}

/// Percentage of quiz questions answered correctly.
///
/// Every question in the quiz counts toward the total. Questions are keyed by
/// their id, or `q{index+1}` when the id is blank; the first answer submitted
/// for an id is used.
#[must_use]
pub fn quiz_score(quiz: &QuizBody, answers: &[QuizAnswer]) -> f64 {
    if quiz.questions.is_empty() {
        return 0.0;
    }

    let mut submitted: HashMap<&str, &str> = HashMap::new();
    for answer in answers {
        submitted
            .entry(answer.question_id.as_str())
            .or_insert(answer.answer.as_str());
    }

    let correct = quiz
        .questions
        .iter()
        .enumerate()
        .filter(|(i, q)| {
            let id = if q.id.trim().is_empty() {
                format!("q{}", i + 1)
            } else {
                q.id.clone()
            };
            submitted
                .get(id.as_str())
                .is_some_and(|given| answers_match(&q.correct_answer, given))
        })
        .count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = correct as f64 / quiz.questions.len() as f64;
    round2(ratio * 100.0)
}

fn answers_match(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}
