//! Content normalization, canned fallback bodies, and item assembly.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use gw_core::entities::{
    ChallengeBody, ChallengeHint, ContentBody, ContentItem, ContentKey, CoreConcept, Flashcard,
    FlashcardsBody, LessonBody, LessonExample, QuizBody, QuizQuestion, SummaryBody,
};
use gw_core::enums::{ContentType, QuestionKind};
use gw_core::errors::CoreError;

use crate::upstream::Upstream;

/// Quizzes shorter than this are padded with canned questions.
pub const MIN_QUIZ_QUESTIONS: usize = 8;
/// Padding never grows a quiz beyond this.
pub const MAX_QUIZ_QUESTIONS: usize = 10;

const DEFAULT_EXPLANATION: &str = "This is the correct answer.";

fn default_options(kind: QuestionKind) -> Vec<String> {
    let options: &[&str] = match kind {
        QuestionKind::MultipleChoice | QuestionKind::Scenario => {
            &["Option A", "Option B", "Option C", "Option D"]
        }
        QuestionKind::TrueFalse => &["True", "False"],
    };
    options.iter().map(|s| (*s).to_string()).collect()
}

/// Fill in missing question fields and pad short quizzes.
///
/// Missing and repeated ids become `q{index+1}` (suffixed when that is
/// taken too), so every question is graded on its own. Missing options get generic defaults for
/// the question kind, a missing correct answer becomes the first option.
/// Quizzes under [`MIN_QUIZ_QUESTIONS`] are padded with canned questions whose
/// ids are not already taken, up to [`MAX_QUIZ_QUESTIONS`].
pub fn normalize_quiz(quiz: &mut QuizBody) {
    let mut used: HashSet<String> = quiz
        .questions
        .iter()
        .filter(|q| !q.id.trim().is_empty())
        .map(|q| q.id.clone())
        .collect();
    let mut kept: HashSet<String> = HashSet::new();

    for (idx, question) in quiz.questions.iter_mut().enumerate() {
        if question.id.trim().is_empty() || !kept.insert(question.id.clone()) {
            question.id = unused_id(idx, &used);
            used.insert(question.id.clone());
            kept.insert(question.id.clone());
        }
        if question.options.is_empty() {
            question.options = default_options(question.kind);
        }
        if question.correct_answer.trim().is_empty() {
            question.correct_answer = question
                .options
                .first()
                .cloned()
                .unwrap_or_else(|| "Option A".to_string());
        }
        if question.explanation.trim().is_empty() {
            question.explanation = DEFAULT_EXPLANATION.to_string();
        }
    }

    if quiz.questions.len() < MIN_QUIZ_QUESTIONS {
        let mut taken: HashSet<String> = quiz.questions.iter().map(|q| q.id.clone()).collect();
        for canned in fallback_questions() {
            if quiz.questions.len() >= MAX_QUIZ_QUESTIONS {
                break;
            }
            if taken.insert(canned.id.clone()) {
                quiz.questions.push(canned);
            }
        }
    }
}

fn unused_id(idx: usize, used: &HashSet<String>) -> String {
    let base = format!("q{}", idx + 1);
    if !used.contains(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or(base)
}

fn fallback_questions() -> Vec<QuizQuestion> {
    use QuestionKind::{MultipleChoice, Scenario, TrueFalse};

    let rows: [(&str, QuestionKind, &str, [&str; 4], &str, &str); 8] = [
        (
            "q1",
            MultipleChoice,
            "What is a key concept in this skill?",
            ["Option A", "Option B", "Option C", "Option D"],
            "Option A",
            "This is the correct answer because it represents the fundamental concept.",
        ),
        (
            "q2",
            MultipleChoice,
            "Which approach is considered best practice?",
            ["Approach 1", "Approach 2", "Approach 3", "Approach 4"],
            "Approach 2",
            "Approach 2 follows industry best practices and standards.",
        ),
        (
            "q3",
            TrueFalse,
            "This statement is true or false?",
            ["True", "False", "", ""],
            "True",
            "This statement is correct based on the fundamentals.",
        ),
        (
            "q4",
            Scenario,
            "In a scenario where you need to implement X, what would you do?",
            ["Solution A", "Solution B", "Solution C", "Solution D"],
            "Solution C",
            "Solution C is the most appropriate for this scenario.",
        ),
        (
            "q5",
            MultipleChoice,
            "What is the primary purpose of this feature?",
            ["Purpose A", "Purpose B", "Purpose C", "Purpose D"],
            "Purpose B",
            "Purpose B accurately describes the primary function.",
        ),
        (
            "q6",
            MultipleChoice,
            "Which method is most efficient?",
            ["Method 1", "Method 2", "Method 3", "Method 4"],
            "Method 3",
            "Method 3 provides the best performance and efficiency.",
        ),
        (
            "q7",
            TrueFalse,
            "This technique is recommended for production use.",
            ["True", "False", "", ""],
            "True",
            "This technique is widely recommended and tested in production.",
        ),
        (
            "q8",
            Scenario,
            "When facing this challenge, what is the recommended approach?",
            ["Approach A", "Approach B", "Approach C", "Approach D"],
            "Approach B",
            "Approach B is the recommended solution for this challenge.",
        ),
    ];

    rows.into_iter()
        .map(|(id, kind, question, options, correct, explanation)| QuizQuestion {
            id: id.into(),
            kind,
            question: question.into(),
            options: options
                .into_iter()
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            correct_answer: correct.into(),
            explanation: explanation.into(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Canned body used when the content collaborator fails.
#[must_use]
pub fn fallback_body(content_type: ContentType, skill: &str, milestone_number: u32) -> ContentBody {
    match content_type {
        ContentType::Lesson => ContentBody::Lesson(LessonBody {
            introduction: format!(
                "This lesson covers key concepts of {skill} for milestone {milestone_number}."
            ),
            core_concepts: vec![CoreConcept {
                title: "Core Concept".into(),
                description: "Important concept to understand".into(),
            }],
            examples: vec![LessonExample {
                title: "Example".into(),
                code: "# Code example".into(),
                explanation: "Explanation".into(),
            }],
            best_practices: strings(&["Follow best practices", "Write clean code"]),
            common_pitfalls: strings(&["Avoid common mistakes", "Watch out for errors"]),
        }),
        ContentType::Quiz => ContentBody::Quiz(QuizBody {
            questions: fallback_questions(),
            ..QuizBody::default()
        }),
        ContentType::CodingChallenge => ContentBody::CodingChallenge(ChallengeBody {
            problem_statement: "Implement a solution to demonstrate understanding.".into(),
            requirements: strings(&["Requirement 1", "Requirement 2"]),
            constraints: strings(&["Constraint 1"]),
            hints: vec![
                ChallengeHint {
                    level: 1,
                    hint: "First hint".into(),
                },
                ChallengeHint {
                    level: 2,
                    hint: "Second hint".into(),
                },
            ],
            expected_output: "Expected result description".into(),
            starter_code: Some("# Starter code here".into()),
        }),
        ContentType::Flashcards => ContentBody::Flashcards(FlashcardsBody {
            cards: (1..=10)
                .map(|i| Flashcard {
                    id: format!("card{i}"),
                    question: format!("Question {i}?"),
                    answer: format!("Answer {i}"),
                })
                .collect(),
        }),
        ContentType::Summary => ContentBody::Summary(SummaryBody {
            key_takeaways: strings(&["Takeaway 1", "Takeaway 2", "Takeaway 3"]),
            skills_developed: strings(&["Skill 1", "Skill 2"]),
            next_steps: strings(&["Next step 1", "Next step 2"]),
        }),
    }
}

/// Assemble a cacheable item for `key` from collaborator output.
///
/// A fallback is replaced by the canned body and flagged `degraded`.
///
/// # Errors
///
/// `InvalidInput` when the skill is blank, the milestone number is 0, or a
/// parsed body does not match the key's content type.
pub fn build_item(
    session_id: &str,
    key: &ContentKey,
    body: Upstream<ContentBody>,
    created_at: DateTime<Utc>,
) -> Result<ContentItem, CoreError> {
    if key.skill.trim().is_empty() {
        return Err(CoreError::InvalidInput("skill is required".into()));
    }
    if key.milestone_number == 0 {
        return Err(CoreError::InvalidInput(
            "milestone_number must be at least 1".into(),
        ));
    }

    let (body, degraded) = match body {
        Upstream::Parsed(body) => {
            if body.content_type() != key.content_type {
                return Err(CoreError::InvalidInput(format!(
                    "content body is {} but {} was requested",
                    body.content_type(),
                    key.content_type
                )));
            }
            (body, false)
        }
        Upstream::Fallback { reason } => {
            tracing::warn!(content_type = %key.content_type, skill = %key.skill, %reason, "using fallback content");
            (
                fallback_body(key.content_type, &key.skill, key.milestone_number),
                true,
            )
        }
    };

    Ok(ContentItem {
        content_id: key.content_id(),
        session_id: session_id.to_string(),
        content_type: key.content_type,
        skill: key.skill.trim().to_string(),
        milestone_number: key.milestone_number,
        xp: key.content_type.default_xp(),
        estimated_time: key.content_type.estimated_time().to_string(),
        degraded,
        created_at,
        body,
    })
}
