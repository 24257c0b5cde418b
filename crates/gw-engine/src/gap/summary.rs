//! Aggregate metrics and narrative for a gap report.

use gw_core::entities::{ExternalSkillAssessment, LearningPhase, PhasePriority, SelfAssessmentResult, SkillGap};
use gw_core::enums::{Priority, ProficiencyLevel};

use crate::round2;

/// Alignment reported when the two assessments share no skills.
pub const NEUTRAL_ALIGNMENT: f64 = 50.0;

/// Phases taken from each priority tier of the summary path.
const PHASES_PER_TIER: usize = 3;

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}

/// `100 × (1 − Σ max(0, gap) / (4 × skills))`, clamped to `[0, 100]`.
#[must_use]
pub fn overall_readiness(gaps: &[SkillGap]) -> f64 {
    if gaps.is_empty() {
        return 100.0;
    }
    let positive: f64 = gaps.iter().map(|g| g.gap_score.max(0.0)).sum();
    let max_gap = ProficiencyLevel::MAX_SCORE * as_f64(gaps.len());
    round2((100.0 * (1.0 - positive / max_gap)).clamp(0.0, 100.0))
}

/// Agreement between the AI and self assessments over the skills both rated.
///
/// `100 × (1 − mean |ai − self| / 4)`, or [`NEUTRAL_ALIGNMENT`] when either
/// side is empty or they share no skill.
#[must_use]
pub fn alignment(ai: &ExternalSkillAssessment, self_result: &SelfAssessmentResult) -> f64 {
    if ai.is_empty() || self_result.is_empty() {
        return NEUTRAL_ALIGNMENT;
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut total_diff = 0.0;
    let mut count = 0usize;
    for rated in &ai.skills {
        let name = rated.skill.trim();
        if seen.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            continue;
        }
        seen.push(name);
        if let Some(estimate) = self_result.get(name) {
            total_diff += (rated.proficiency().score_f64() - estimate.proficiency.score_f64()).abs();
            count += 1;
        }
    }

    if count == 0 {
        return NEUTRAL_ALIGNMENT;
    }
    let mean_diff = total_diff / as_f64(count);
    round2((100.0 * (1.0 - mean_diff / ProficiencyLevel::MAX_SCORE)).clamp(0.0, 100.0))
}

/// Banded time estimate from the signed total gap at 2.5 weeks per point.
#[must_use]
pub fn estimated_time_to_target(signed_total_gap: f64) -> &'static str {
    let weeks = signed_total_gap * 2.5;
    if weeks < 4.0 {
        "1-2 months with focused effort"
    } else if weeks < 12.0 {
        "3-6 months with consistent practice"
    } else if weeks < 24.0 {
        "6-12 months with dedicated learning"
    } else {
        "12-18 months with structured learning path"
    }
}

/// All High-priority skills, or the first three Medium ones when there are none.
#[must_use]
pub fn priority_areas(gaps: &[SkillGap]) -> Vec<String> {
    let high: Vec<String> = gaps
        .iter()
        .filter(|g| g.priority == Priority::High)
        .map(|g| g.skill.clone())
        .collect();
    if !high.is_empty() {
        return high;
    }
    gaps.iter()
        .filter(|g| g.priority == Priority::Medium)
        .take(PHASES_PER_TIER)
        .map(|g| g.skill.clone())
        .collect()
}

/// Up to three High phases, up to three Medium phases, then integration.
#[must_use]
pub fn summary_path(gaps: &[SkillGap]) -> Vec<LearningPhase> {
    let tier = |priority: Priority| {
        gaps.iter()
            .filter(move |g| g.priority == priority)
            .take(PHASES_PER_TIER)
    };

    let mut phases = Vec::new();
    for gap in tier(Priority::High) {
        phases.push(LearningPhase {
            phase: format!("Phase {}", phases.len() + 1),
            skill: gap.skill.clone(),
            focus: gap
                .recommendations
                .first()
                .cloned()
                .unwrap_or_else(|| format!("Learn {}", gap.skill)),
            duration: "2-4 weeks".into(),
            priority: PhasePriority::High,
        });
    }
    for gap in tier(Priority::Medium) {
        phases.push(LearningPhase {
            phase: format!("Phase {}", phases.len() + 1),
            skill: gap.skill.clone(),
            focus: gap
                .recommendations
                .first()
                .cloned()
                .unwrap_or_else(|| format!("Improve {}", gap.skill)),
            duration: "1-2 weeks".into(),
            priority: PhasePriority::Medium,
        });
    }
    phases.push(LearningPhase {
        phase: format!("Phase {}", phases.len() + 1),
        skill: "Integration & Practice".into(),
        focus: "Build comprehensive projects combining all skills".into(),
        duration: "4-6 weeks".into(),
        priority: PhasePriority::Essential,
    });
    phases
}

/// Four independently banded sentences joined by spaces.
#[must_use]
pub fn assessment_notes(
    readiness: f64,
    alignment: f64,
    critical_gaps: &[String],
    narrative: Option<&str>,
) -> String {
    let mut notes: Vec<String> = Vec::with_capacity(4);

    notes.push(
        if readiness >= 90.0 {
            "Excellent! You're ready for the target level."
        } else if readiness >= 70.0 {
            "You're close to the target level. Focus on the identified gaps."
        } else if readiness >= 50.0 {
            "You have a solid foundation but need significant improvement in several areas."
        } else {
            "Consider focusing on foundational skills before targeting this level."
        }
        .to_string(),
    );

    notes.push(
        if alignment >= 80.0 {
            "Your self-assessment aligns well with the AI assessment, showing good self-awareness."
        } else if alignment >= 60.0 {
            "There's moderate alignment between assessments. Review the detailed gaps carefully."
        } else {
            "Significant discrepancy between self and AI assessment. Consider seeking mentor feedback."
        }
        .to_string(),
    );

    if critical_gaps.is_empty() {
        notes.push("No critical gaps identified. Focus on continuous improvement.".into());
    } else {
        let first: Vec<&str> = critical_gaps
            .iter()
            .take(PHASES_PER_TIER)
            .map(String::as_str)
            .collect();
        notes.push(format!(
            "Critical areas needing attention: {}.",
            first.join(", ")
        ));
    }

    if let Some(narrative) = narrative.map(str::trim).filter(|n| !n.is_empty()) {
        notes.push(format!("AI Insights: {narrative}"));
    }

    notes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gw_core::entities::{AssessedSkill, SkillProficiencyEstimate};
    use rstest::rstest;

    fn gap(skill: &str, gap_score: f64) -> SkillGap {
        SkillGap {
            skill: skill.into(),
            current_level: ProficiencyLevel::Basic,
            required_level: ProficiencyLevel::Expert,
            gap: String::new(),
            combined_score: 1.0,
            gap_score,
            ai_assessed_level: ProficiencyLevel::Basic,
            self_assessed_level: ProficiencyLevel::Basic,
            priority: Priority::from_gap(gap_score),
            recommendations: vec![format!("Study {skill}")],
        }
    }

    fn ai(pairs: &[(&str, &str)]) -> ExternalSkillAssessment {
        ExternalSkillAssessment {
            skills: pairs
                .iter()
                .map(|(skill, level)| AssessedSkill {
                    skill: (*skill).into(),
                    level: (*level).into(),
                    reasoning: None,
                })
                .collect(),
            ..ExternalSkillAssessment::default()
        }
    }

    fn self_result(pairs: &[(&str, ProficiencyLevel)]) -> SelfAssessmentResult {
        SelfAssessmentResult {
            skills: pairs
                .iter()
                .map(|(skill, level)| SkillProficiencyEstimate {
                    skill: (*skill).into(),
                    proficiency: *level,
                    score: level.score_f64(),
                    confidence: 3.0,
                })
                .collect(),
            overall_score: 0.0,
            assessed_at: Utc::now(),
        }
    }

    #[test]
    fn negative_gaps_do_not_inflate_readiness() {
        let gaps = vec![gap("A", -3.0), gap("B", 2.0)];
        assert!((overall_readiness(&gaps) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn readiness_is_bounded() {
        let worst = vec![gap("A", 4.0), gap("B", 4.0)];
        assert!(overall_readiness(&worst).abs() < f64::EPSILON);
        let best = vec![gap("A", -4.0)];
        assert!((overall_readiness(&best) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn identical_assessments_align_fully() {
        let a = ai(&[("HTML", "Advanced"), ("CSS", "Basic")]);
        let s = self_result(&[
            ("HTML", ProficiencyLevel::Advanced),
            ("CSS", ProficiencyLevel::Basic),
        ]);
        assert!((alignment(&a, &s) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_overlap_is_neutral() {
        let a = ai(&[("HTML", "Advanced")]);
        let s = self_result(&[("CSS", ProficiencyLevel::Basic)]);
        assert!((alignment(&a, &s) - NEUTRAL_ALIGNMENT).abs() < f64::EPSILON);
        assert!(
            (alignment(&ExternalSkillAssessment::default(), &s) - NEUTRAL_ALIGNMENT).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn alignment_uses_only_shared_skills() {
        let a = ai(&[("HTML", "Expert"), ("React", "None")]);
        let s = self_result(&[("HTML", ProficiencyLevel::Intermediate)]);
        assert!((alignment(&a, &s) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_ai_level_counts_as_zero() {
        let a = ai(&[("HTML", "Wizard")]);
        let s = self_result(&[("HTML", ProficiencyLevel::Expert)]);
        assert!(alignment(&a, &s).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(-10.0, "1-2 months with focused effort")]
    #[case(1.5, "1-2 months with focused effort")]
    #[case(2.0, "3-6 months with consistent practice")]
    #[case(5.0, "6-12 months with dedicated learning")]
    #[case(10.0, "12-18 months with structured learning path")]
    fn time_bands(#[case] total: f64, #[case] expected: &str) {
        assert_eq!(estimated_time_to_target(total), expected);
    }

    #[test]
    fn priority_areas_fall_back_to_three_medium() {
        let gaps = vec![
            gap("A", 1.0),
            gap("B", 1.0),
            gap("C", 0.0),
            gap("D", 1.0),
            gap("E", 1.0),
        ];
        assert_eq!(priority_areas(&gaps), vec!["A", "B", "D"]);
    }

    #[test]
    fn summary_path_orders_tiers_and_appends_integration() {
        let gaps = vec![
            gap("M1", 1.0),
            gap("H1", 3.0),
            gap("H2", 2.0),
            gap("H3", 4.0),
            gap("H4", 2.0),
            gap("L1", 0.0),
        ];
        let phases = summary_path(&gaps);
        let skills: Vec<&str> = phases.iter().map(|p| p.skill.as_str()).collect();
        assert_eq!(skills, vec!["H1", "H2", "H3", "M1", "Integration & Practice"]);
        assert_eq!(phases[0].phase, "Phase 1");
        assert_eq!(phases[0].duration, "2-4 weeks");
        assert_eq!(phases[3].duration, "1-2 weeks");
        assert_eq!(phases[4].phase, "Phase 5");
        assert_eq!(phases[4].priority, PhasePriority::Essential);
    }

    #[test]
    fn notes_join_four_sentences() {
        let notes = assessment_notes(
            95.0,
            85.0,
            &["React".into(), "CSS".into(), "HTML".into(), "Git".into()],
            Some("Strong candidate"),
        );
        assert_eq!(
            notes,
            "Excellent! You're ready for the target level. \
             Your self-assessment aligns well with the AI assessment, showing good self-awareness. \
             Critical areas needing attention: React, CSS, HTML. \
             AI Insights: Strong candidate"
        );
    }

    #[test]
    fn notes_without_narrative_or_critical_gaps() {
        let notes = assessment_notes(40.0, 10.0, &[], None);
        assert!(notes.starts_with("Consider focusing on foundational skills"));
        assert!(notes.ends_with("No critical gaps identified. Focus on continuous improvement."));
    }
}
