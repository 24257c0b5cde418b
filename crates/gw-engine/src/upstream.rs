//! Tagged boundary for output of the text-generation collaborators.
//!
//! Collaborator output is parsed optimistically. Anything unusable becomes
//! [`Upstream::Fallback`] with a reason, so degraded input stays visible to
//! callers instead of being silently replaced.

use gw_core::entities::{
    AssessedSkill, ChallengeBody, ContentBody, ExternalSkillAssessment, FlashcardsBody,
    LessonBody, QuizBody, SummaryBody,
};
use gw_core::enums::{ContentType, ProficiencyLevel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::normalize_quiz;

/// Either genuinely parsed collaborator output or a recorded fallback.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Upstream<T> {
    Parsed(T),
    Fallback { reason: String },
}

impl<T> Upstream<T> {
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::Fallback {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn into_parsed(self) -> Option<T> {
        match self {
            Self::Parsed(data) => Some(data),
            Self::Fallback { .. } => None,
        }
    }

    pub const fn as_parsed(&self) -> Option<&T> {
        match self {
            Self::Parsed(data) => Some(data),
            Self::Fallback { .. } => None,
        }
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            Self::Parsed(_) => None,
            Self::Fallback { reason } => Some(reason),
        }
    }
}

/// Strip a surrounding Markdown code fence, if any.
fn unfence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.find('\n').map_or("", |nl| &rest[nl + 1..]);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn parse_object(raw: &str) -> Result<serde_json::Map<String, Value>, String> {
    let body = unfence(raw);
    if body.is_empty() {
        return Err("empty response".into());
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("response is not a JSON object".into()),
        Err(e) => Err(format!("malformed JSON: {e}")),
    }
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Parse the conversational collaborator's skill assessment.
///
/// Expected shape:
/// `{"skills": [{"skill", "level", "reasoning"}], "overall_assessment", "readiness_for_target"}`.
/// Skill entries without a name are dropped; entries without a level are
/// taken as `Basic`. A missing `skills` list parses as an empty assessment.
pub fn parse_assessment(raw: &str) -> Upstream<ExternalSkillAssessment> {
    let map = match parse_object(raw) {
        Ok(map) => map,
        Err(reason) => {
            tracing::warn!(%reason, "AI assessment unusable, falling back to defaults");
            return Upstream::fallback(format!("AI assessment unusable: {reason}"));
        }
    };

    let skills = map
        .get("skills")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|entry| {
                    let skill = string_field(entry, "skill")?;
                    let level = string_field(entry, "level")
                        .unwrap_or_else(|| ProficiencyLevel::ASSUMED.as_str().to_string());
                    Some(AssessedSkill {
                        skill,
                        level,
                        reasoning: string_field(entry, "reasoning"),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Upstream::Parsed(ExternalSkillAssessment {
        skills,
        overall_assessment: string_field(&map, "overall_assessment"),
        readiness_for_target: string_field(&map, "readiness_for_target"),
    })
}

/// Parse content collaborator output for a content type.
///
/// Quizzes must carry a `questions` list and are normalized on the way in.
pub fn parse_content(content_type: ContentType, raw: &str) -> Upstream<ContentBody> {
    let map = match parse_object(raw) {
        Ok(map) => map,
        Err(reason) => {
            tracing::warn!(%content_type, %reason, "content unusable, falling back to canned body");
            return Upstream::fallback(format!("{content_type} content unusable: {reason}"));
        }
    };

    let value = Value::Object(map);
    let parsed = match content_type {
        ContentType::Lesson => serde_json::from_value::<LessonBody>(value).map(ContentBody::Lesson),
        ContentType::Quiz => {
            if !value.get("questions").is_some_and(Value::is_array) {
                return Upstream::fallback("quiz content has no questions list");
            }
            serde_json::from_value::<QuizBody>(value).map(|mut quiz| {
                normalize_quiz(&mut quiz);
                ContentBody::Quiz(quiz)
            })
        }
        ContentType::CodingChallenge => {
            serde_json::from_value::<ChallengeBody>(value).map(ContentBody::CodingChallenge)
        }
        ContentType::Flashcards => {
            serde_json::from_value::<FlashcardsBody>(value).map(ContentBody::Flashcards)
        }
        ContentType::Summary => {
            serde_json::from_value::<SummaryBody>(value).map(ContentBody::Summary)
        }
    };

    match parsed {
        Ok(body) => Upstream::Parsed(body),
        Err(e) => {
            tracing::warn!(%content_type, error = %e, "content has unexpected shape");
            Upstream::fallback(format!("{content_type} content has unexpected shape: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_well_formed_assessment() {
        let raw = r#"{
            "skills": [
                {"skill": "HTML", "level": "Advanced", "reasoning": "semantic markup"},
                {"skill": "CSS", "level": "Basic"}
            ],
            "overall_assessment": "Strong markup, weak styling",
            "readiness_for_target": "Not yet"
        }"#;
        let parsed = parse_assessment(raw).into_parsed().unwrap();
        assert_eq!(parsed.skills.len(), 2);
        assert_eq!(parsed.skills[0].proficiency(), ProficiencyLevel::Advanced);
        assert_eq!(parsed.skills[1].reasoning, None);
        assert_eq!(
            parsed.overall_assessment.as_deref(),
            Some("Strong markup, weak styling")
        );
    }

    #[test]
    fn code_fenced_assessment_parses() {
        let raw = "```json\n{\"skills\": [{\"skill\": \"React\", \"level\": \"Expert\"}]}\n```";
        let parsed = parse_assessment(raw).into_parsed().unwrap();
        assert_eq!(parsed.skills[0].skill, "React");
    }

    #[test]
    fn malformed_assessment_is_fallback() {
        let result = parse_assessment("I think they are pretty good at React.");
        assert!(result.is_degraded());
        assert!(result.fallback_reason().unwrap().contains("malformed JSON"));
    }

    #[test]
    fn empty_assessment_is_fallback() {
        assert!(parse_assessment("   ").is_degraded());
        assert!(parse_assessment("[1, 2]").is_degraded());
    }

    #[test]
    fn entries_without_level_default_to_basic() {
        let raw = r#"{"skills": [{"skill": "Git Basics"}, {"level": "Expert"}, 42]}"#;
        let parsed = parse_assessment(raw).into_parsed().unwrap();
        assert_eq!(parsed.skills.len(), 1);
        assert_eq!(parsed.skills[0].level, "Basic");
    }

    #[test]
    fn invalid_level_names_are_kept_raw() {
        let raw = r#"{"skills": [{"skill": "CSS", "level": "Ninja"}]}"#;
        let parsed = parse_assessment(raw).into_parsed().unwrap();
        assert_eq!(parsed.skills[0].level, "Ninja");
        assert_eq!(parsed.skills[0].proficiency(), ProficiencyLevel::None);
    }

    #[test]
    fn upstream_serializes_with_status_tag() {
        let degraded: Upstream<ExternalSkillAssessment> = Upstream::fallback("timeout");
        let json = serde_json::to_value(&degraded).unwrap();
        assert_eq!(json["status"], "fallback");
        assert_eq!(json["data"]["reason"], "timeout");
        let back: Upstream<ExternalSkillAssessment> = serde_json::from_value(json).unwrap();
        assert_eq!(back, degraded);
    }

    #[test]
    fn quiz_without_questions_is_fallback() {
        let result = parse_content(ContentType::Quiz, r#"{"passing_score": 80}"#);
        assert!(result.is_degraded());
    }

    #[test]
    fn quiz_content_is_normalized() {
        let raw = r#"{"questions": [{"question": "What does JSX compile to?"}]}"#;
        let Upstream::Parsed(ContentBody::Quiz(quiz)) = parse_content(ContentType::Quiz, raw)
        else {
            panic!("expected parsed quiz");
        };
        assert_eq!(quiz.questions[0].id, "q1");
        assert_eq!(quiz.questions[0].correct_answer, "Option A");
        assert_eq!(quiz.questions.len(), 8);
        assert_eq!(quiz.passing_score, 70);
    }

    #[test]
    fn summary_content_parses() {
        let raw = r#"{"key_takeaways": ["Hooks"], "next_steps": ["Context"]}"#;
        let body = parse_content(ContentType::Summary, raw).into_parsed().unwrap();
        assert_eq!(body.content_type(), ContentType::Summary);
    }

    #[test]
    fn wrongly_typed_content_is_fallback() {
        let raw = r#"{"cards": "not a list"}"#;
        assert!(parse_content(ContentType::Flashcards, raw).is_degraded());
    }
}
