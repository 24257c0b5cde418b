//! The self-assessment test.
//!
//! Two questions per skill of the standard. Built-in skills carry curated
//! wording; any other skill gets generic questions.

use gw_core::entities::{AnswerFormat, AssessmentQuestion};
use gw_core::enums::ProficiencyLevel;
use gw_core::ids::slugify;
use gw_core::standard::SkillStandard;

const CONFIDENCE_OPTIONS: [&str; 3] = ["Yes", "Somewhat", "No"];

/// Curated `(question, format)` pairs keyed by skill name.
const CURATED: &[(&str, [(&str, AnswerFormat); 2])] = &[
    (
        "HTML",
        [
            (
                "How comfortable are you with semantic HTML5 elements and accessibility features?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you explain and implement complex HTML structures like forms with validation?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "CSS",
        [
            (
                "Rate your proficiency with modern CSS (Flexbox, Grid, Animations, Custom Properties)?",
                AnswerFormat::Proficiency,
            ),
            (
                "How comfortable are you with CSS preprocessors (SASS/LESS) and CSS-in-JS solutions?",
                AnswerFormat::Proficiency,
            ),
        ],
    ),
    (
        "JavaScript",
        [
            (
                "Rate your understanding of modern JavaScript (ES6+, async/await, closures, etc.)?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you effectively debug complex JavaScript issues and optimize code performance?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "React",
        [
            (
                "How proficient are you with React hooks, context API, and component lifecycle?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you architect and build complex React applications from scratch?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "Next.js",
        [
            (
                "Rate your experience with Next.js features (SSR, SSG, API routes, routing)?",
                AnswerFormat::Proficiency,
            ),
            (
                "Have you deployed and optimized Next.js applications in production?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "Git Basics",
        [
            (
                "How comfortable are you with Git workflows (branching, merging, rebasing, PR reviews)?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you resolve complex merge conflicts and manage collaborative Git workflows?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "Debugging Skills",
        [
            (
                "Rate your debugging skills using browser DevTools and debugging techniques?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you efficiently track down and fix bugs in complex codebases?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "API Integration",
        [
            (
                "How proficient are you with REST APIs, fetch/axios, and handling API responses?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you implement authentication, error handling, and API rate limiting?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "State Management (Redux/Zustand)",
        [
            (
                "Rate your experience with state management libraries (Redux, Zustand, etc.)?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you architect and implement complex state management solutions?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
    (
        "Performance Optimization",
        [
            (
                "How familiar are you with performance optimization techniques (lazy loading, code splitting, memoization)?",
                AnswerFormat::Proficiency,
            ),
            (
                "Can you identify performance bottlenecks and implement optimization strategies?",
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    ),
];

/// Questions for every skill of the standard, in matrix order.
#[must_use]
pub fn assessment_test(standard: &SkillStandard) -> Vec<AssessmentQuestion> {
    standard.skills().flat_map(skill_questions).collect()
}

/// The two questions for one skill, with ids `{slug}-1` and `{slug}-2`.
#[must_use]
pub fn skill_questions(skill: &str) -> Vec<AssessmentQuestion> {
    let slug = slugify(skill);
    let curated = CURATED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(skill.trim()))
        .map(|(_, pair)| *pair);

    let pair: [(String, AnswerFormat); 2] = match curated {
        Some([(a, fa), (b, fb)]) => [(a.to_string(), fa), (b.to_string(), fb)],
        None => [
            (
                format!("How would you rate your overall proficiency in {skill}?"),
                AnswerFormat::Proficiency,
            ),
            (
                format!("Have you applied {skill} independently in a production project?"),
                AnswerFormat::BooleanWithConfidence,
            ),
        ],
    };

    pair.into_iter()
        .enumerate()
        .map(|(i, (question, format))| AssessmentQuestion {
            id: format!("{slug}-{}", i + 1),
            skill: skill.to_string(),
            question,
            format,
            options: options_for(format),
        })
        .collect()
}

fn options_for(format: AnswerFormat) -> Vec<String> {
    match format {
        AnswerFormat::Proficiency => ProficiencyLevel::ALL
            .iter()
            .map(|level| level.as_str().to_string())
            .collect(),
        AnswerFormat::BooleanWithConfidence => {
            CONFIDENCE_OPTIONS.iter().map(ToString::to_string).collect()
        }
    }
}
