//! Serde roundtrip and JsonSchema validation tests for boundary types.

use std::collections::BTreeMap;

use chrono::Utc;
use schemars::schema_for;
use gw_core::entities::*;
use gw_core::enums::*;
use gw_core::responses::*;
use gw_core::standard::SkillStandard;
use gw_core::trail::TrailOperation;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn profile() -> UserProfile {
    UserProfile {
        name: "Ada".into(),
        email: Some("ada@example.com".into()),
        current_level: RoleLevel::Junior,
        target_level: RoleLevel::Senior,
        years_of_experience: Some(2.5),
        primary_technologies: vec!["React".into(), "TypeScript".into()],
        additional_info: None,
    }
}

roundtrip_and_validate!(
    session_roundtrip,
    Session,
    Session {
        id: "ses-a3f8b2c1".into(),
        status: SessionStatus::ReadyForSelfAssessment,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(profile_roundtrip, UserProfile, profile());

roundtrip_and_validate!(
    answer_roundtrip,
    SelfAssessmentAnswer,
    SelfAssessmentAnswer {
        question_id: "react-1".into(),
        skill: "React".into(),
        answer: "Advanced".into(),
        confidence: Some(4),
    }
);

roundtrip_and_validate!(
    external_assessment_roundtrip,
    ExternalSkillAssessment,
    ExternalSkillAssessment {
        skills: vec![AssessedSkill {
            skill: "CSS".into(),
            level: "Guru".into(),
            reasoning: Some("claims mastery".into()),
        }],
        overall_assessment: Some("Solid fundamentals".into()),
        readiness_for_target: None,
    }
);

roundtrip_and_validate!(
    self_result_roundtrip,
    SelfAssessmentResult,
    SelfAssessmentResult {
        skills: vec![SkillProficiencyEstimate {
            skill: "HTML".into(),
            proficiency: ProficiencyLevel::Intermediate,
            score: 2.5,
            confidence: 3.0,
        }],
        overall_score: 2.5,
        assessed_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    gap_report_roundtrip,
    GapAnalysisReport,
    GapAnalysisReport {
        session_id: "ses-a3f8b2c1".into(),
        user_name: "Ada".into(),
        current_level: RoleLevel::Junior,
        target_level: RoleLevel::Senior,
        generated_at: Utc::now(),
        overall_readiness: 75.0,
        readiness_status: ReadinessStatus::AlmostReady,
        skill_gaps: vec![SkillGap {
            skill: "React".into(),
            current_level: ProficiencyLevel::Basic,
            required_level: ProficiencyLevel::Expert,
            gap: "Significant gap - requires dedicated learning".into(),
            combined_score: 1.0,
            gap_score: 3.0,
            ai_assessed_level: ProficiencyLevel::Basic,
            self_assessed_level: ProficiencyLevel::Basic,
            priority: Priority::High,
            recommendations: vec!["Master React Hooks".into()],
        }],
        skills_on_track: vec![],
        skills_need_improvement: vec![],
        critical_gaps: vec!["React".into()],
        learning_path: vec![LearningPhase {
            phase: "Integration & Practice".into(),
            skill: "All Skills".into(),
            focus: "Build comprehensive projects combining all skills".into(),
            duration: "4-6 weeks".into(),
            priority: PhasePriority::Essential,
        }],
        estimated_time_to_target: "1-2 months with focused effort".into(),
        priority_areas: vec!["React".into()],
        ai_vs_self_assessment_alignment: 100.0,
        assessment_notes: "Notes.".into(),
        ai_assessment_degraded: false,
    }
);

roundtrip_and_validate!(
    quiz_item_roundtrip,
    ContentItem,
    ContentItem {
        content_id: "quiz-react-m1".into(),
        session_id: "ses-a3f8b2c1".into(),
        content_type: ContentType::Quiz,
        skill: "React".into(),
        milestone_number: 1,
        xp: 30,
        estimated_time: "10 minutes".into(),
        degraded: false,
        created_at: Utc::now(),
        body: ContentBody::Quiz(QuizBody {
            questions: vec![QuizQuestion {
                id: "q1".into(),
                kind: QuestionKind::TrueFalse,
                question: "Hooks run in order?".into(),
                options: vec!["True".into(), "False".into()],
                correct_answer: "True".into(),
                explanation: "Rules of hooks.".into(),
            }],
            passing_score: 70,
        }),
    }
);

roundtrip_and_validate!(
    ledger_roundtrip,
    ProgressLedger,
    {
        let mut ledger = ProgressLedger::default();
        ledger.record(
            "lesson-react-m1",
            ProgressRecord {
                completed: true,
                xp_earned: 50,
                completed_at: Utc::now(),
                passed: true,
                score: 100.0,
            },
        );
        ledger
    }
);

roundtrip_and_validate!(
    completion_result_roundtrip,
    CompletionResult,
    CompletionResult {
        success: true,
        content_id: "quiz-react-m1".into(),
        xp_earned: 0,
        passed: false,
        score: 50.0,
        total_xp: 120,
        message: "Score 50% is below the passing score of 70%".into(),
    }
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse {
        id: "ses-a3f8b2c1".into(),
        deleted: true,
    }
);

roundtrip_and_validate!(
    trail_roundtrip,
    TrailOperation,
    TrailOperation::now(
        "ses-a3f8b2c1",
        TrailOp::Transition,
        EntityType::Session,
        "ses-a3f8b2c1",
        serde_json::json!({"from": "active", "to": "ready_for_self_assessment"}),
    )
);

#[test]
fn content_body_is_tagged_by_kind() {
    let body = ContentBody::Summary(SummaryBody::default());
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["kind"], "summary");
    assert_eq!(body.content_type(), ContentType::Summary);
}

#[test]
fn completion_request_defaults() {
    let req: CompletionRequest =
        serde_json::from_str(r#"{"content_id":"lesson-css-m2"}"#).unwrap();
    assert!(req.marked_as_read);
    assert!(req.answers.is_none());
}

#[test]
fn answer_accepts_confidence_level_alias() {
    let answer: SelfAssessmentAnswer = serde_json::from_str(
        r#"{"question_id":"css-1","skill":"CSS","answer":"Basic","confidence_level":2}"#,
    )
    .unwrap();
    assert_eq!(answer.confidence, Some(2));
}

#[test]
fn content_key_is_deterministic() {
    let key = ContentKey {
        content_type: ContentType::CodingChallenge,
        skill: "State Management (Redux/Zustand)".into(),
        milestone_number: 3,
    };
    let id = key.content_id();
    assert!(id.starts_with("coding_challenge-state-management-redux-zustand-"), "{id}");
    assert!(id.ends_with("-m3"), "{id}");
    assert_eq!(id, key.clone().content_id());
}

#[test]
fn content_ids_differ_for_skills_sharing_a_slug() {
    let key = |skill: &str| ContentKey {
        content_type: ContentType::Summary,
        skill: skill.into(),
        milestone_number: 1,
    };
    let cpp = key("C++").content_id();
    let csharp = key("C#").content_id();
    assert_ne!(cpp, csharp);
    assert_ne!(key("日本語").content_id(), key("中文").content_id());
    assert_eq!(key("React").content_id(), key(" react").content_id());
}

#[test]
fn invalid_external_level_scores_zero() {
    let skill = AssessedSkill {
        skill: "CSS".into(),
        level: "Wizard".into(),
        reasoning: None,
    };
    assert_eq!(skill.proficiency(), ProficiencyLevel::None);
}

#[test]
fn standard_schema_accepts_builtin() {
    let schema = serde_json::to_value(schema_for!(SkillStandard)).unwrap();
    let instance = serde_json::to_value(SkillStandard::builtin()).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn standard_from_map_orders_alphabetically() {
    let mut map = BTreeMap::new();
    map.insert("Rust".to_string(), BTreeMap::new());
    map.insert("Go".to_string(), BTreeMap::new());
    let standard = SkillStandard::try_from(map).unwrap();
    let skills: Vec<&str> = standard.skills().collect();
    assert_eq!(skills, vec!["Go", "Rust"]);
}
