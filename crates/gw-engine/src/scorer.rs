//! Self-assessment scorer: free-text answers to per-skill proficiency estimates.

use chrono::{DateTime, Utc};
use gw_core::entities::{SelfAssessmentAnswer, SelfAssessmentResult, SkillProficiencyEstimate};
use gw_core::enums::ProficiencyLevel;
use gw_core::errors::CoreError;

use crate::round2;

/// Score given to answers outside the lexical table.
pub const UNRECOGNIZED_ANSWER_SCORE: f64 = 2.0;

/// Confidence assumed for a skill when no answer supplied one.
pub const DEFAULT_CONFIDENCE: f64 = 3.0;

/// Numeric score of a single answer.
///
/// ```text
/// none | no          -> 0
/// basic | somewhat   -> 1
/// intermediate       -> 2
/// advanced           -> 3
/// expert | yes       -> 4
/// anything else      -> 2
/// ```
#[must_use]
pub fn answer_score(answer: &str) -> f64 {
    match answer.trim().to_lowercase().as_str() {
        "none" | "no" => 0.0,
        "basic" | "somewhat" => 1.0,
        "intermediate" => 2.0,
        "advanced" => 3.0,
        "expert" | "yes" => 4.0,
        _ => UNRECOGNIZED_ANSWER_SCORE,
    }
}

#[derive(Default)]
struct SkillTally {
    total: f64,
    count: u32,
    confidence_total: f64,
    confidence_count: u32,
}

fn validate(answer: &SelfAssessmentAnswer) -> Result<(), CoreError> {
    if answer.skill.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!(
            "answer to question '{}' has no skill",
            answer.question_id
        )));
    }
    if let Some(confidence) = answer.confidence {
        if !(1..=5).contains(&confidence) {
            return Err(CoreError::InvalidInput(format!(
                "confidence for question '{}' must be between 1 and 5, got {confidence}",
                answer.question_id
            )));
        }
    }
    Ok(())
}

/// Score a batch of answers.
///
/// Answers for the same skill (compared ignoring ASCII case) are averaged.
/// Estimates come back in order of each skill's first appearance. Skills with
/// no answers are absent.
///
/// # Errors
///
/// `InvalidInput` for an answer with a blank skill or a confidence outside 1-5.
pub fn score_answers(
    answers: &[SelfAssessmentAnswer],
    assessed_at: DateTime<Utc>,
) -> Result<SelfAssessmentResult, CoreError> {
    let mut tallies: Vec<(String, SkillTally)> = Vec::new();

    for answer in answers {
        validate(answer)?;
        let skill = answer.skill.trim();
        let idx = match tallies
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(skill))
        {
            Some(idx) => idx,
            None => {
                tallies.push((skill.to_string(), SkillTally::default()));
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[idx].1;
        tally.total += answer_score(&answer.answer);
        tally.count += 1;
        if let Some(confidence) = answer.confidence {
            tally.confidence_total += f64::from(confidence);
            tally.confidence_count += 1;
        }
    }

    let skills: Vec<SkillProficiencyEstimate> = tallies
        .into_iter()
        .map(|(skill, tally)| {
            let mean = tally.total / f64::from(tally.count);
            let confidence = if tally.confidence_count == 0 {
                DEFAULT_CONFIDENCE
            } else {
                tally.confidence_total / f64::from(tally.confidence_count)
            };
            SkillProficiencyEstimate {
                skill,
                proficiency: ProficiencyLevel::from_score(mean),
                score: round2(mean),
                confidence: round2(confidence),
            }
        })
        .collect();

    let overall_score = if skills.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let n = skills.len() as f64;
        round2(skills.iter().map(|s| s.score).sum::<f64>() / n)
    };

    tracing::debug!(skills = skills.len(), overall_score, "scored self-assessment");

    Ok(SelfAssessmentResult {
        skills,
        overall_score,
        assessed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn answer(skill: &str, text: &str, confidence: Option<u8>) -> SelfAssessmentAnswer {
        SelfAssessmentAnswer {
            question_id: format!("{skill}-q"),
            skill: skill.into(),
            answer: text.into(),
            confidence,
        }
    }

    #[rstest]
    #[case("None", 0.0)]
    #[case("no", 0.0)]
    #[case("Basic", 1.0)]
    #[case("SOMEWHAT", 1.0)]
    #[case("Intermediate", 2.0)]
    #[case("Advanced", 3.0)]
    #[case("Expert", 4.0)]
    #[case(" yes ", 4.0)]
    #[case("I dabble", 2.0)]
    #[case("", 2.0)]
    fn lexical_table(#[case] text: &str, #[case] expected: f64) {
        assert!((answer_score(text) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn averages_answers_per_skill() {
        let answers = vec![
            answer("React", "Expert", Some(5)),
            answer("React", "Basic", None),
            answer("CSS", "No", Some(2)),
        ];
        let result = score_answers(&answers, Utc::now()).unwrap();

        assert_eq!(result.skills.len(), 2);
        let react = &result.skills[0];
        assert_eq!(react.skill, "React");
        assert!((react.score - 2.5).abs() < f64::EPSILON);
        assert_eq!(react.proficiency, ProficiencyLevel::Advanced);
        assert!((react.confidence - 5.0).abs() < f64::EPSILON);

        let css = &result.skills[1];
        assert_eq!(css.proficiency, ProficiencyLevel::None);
        assert!((css.confidence - 2.0).abs() < f64::EPSILON);
        assert!((result.overall_score - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn answer_order_does_not_change_estimates() {
        let forward = vec![
            answer("Git Basics", "Advanced", Some(4)),
            answer("Git Basics", "Somewhat", Some(2)),
            answer("Git Basics", "Yes", None),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = score_answers(&forward, Utc::now()).unwrap();
        let b = score_answers(&reversed, Utc::now()).unwrap();
        assert_eq!(a.skills, b.skills);
    }

    #[test]
    fn confidence_defaults_to_three() {
        let result = score_answers(&[answer("HTML", "Basic", None)], Utc::now()).unwrap();
        assert!((result.skills[0].confidence - DEFAULT_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn skill_names_group_case_insensitively() {
        let answers = vec![answer("React", "Expert", None), answer("react", "None", None)];
        let result = score_answers(&answers, Utc::now()).unwrap();
        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].proficiency, ProficiencyLevel::Intermediate);
    }

    #[test]
    fn no_answers_yields_empty_result() {
        let result = score_answers(&[], Utc::now()).unwrap();
        assert!(result.is_empty());
        assert!(result.overall_score.abs() < f64::EPSILON);
    }

    #[test]
    fn blank_skill_is_rejected() {
        let err = score_answers(&[answer("  ", "Basic", None)], Utc::now()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let err = score_answers(&[answer("CSS", "Basic", Some(9))], Utc::now()).unwrap_err();
        assert!(err.to_string().contains("between 1 and 5"));
    }

    #[test]
    fn scores_are_rounded_for_output() {
        let answers = vec![
            answer("JavaScript", "Expert", Some(4)),
            answer("JavaScript", "Basic", Some(5)),
            answer("JavaScript", "Basic", Some(5)),
        ];
        let result = score_answers(&answers, Utc::now()).unwrap();
        assert!((result.skills[0].score - 2.0).abs() < f64::EPSILON);
        assert!((result.skills[0].confidence - 4.67).abs() < 1e-9);
    }
}
