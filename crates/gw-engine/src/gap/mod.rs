//! Gap analysis: fuse AI and self estimates against the skill standard.
//!
//! Every skill in the standard is analysed, whether or not either assessment
//! mentions it. Missing lookups default to `Basic`; the only failure is an
//! empty standard.

mod recommendations;
mod summary;

pub use recommendations::{describe_gap, recommendations, skill_resources};
pub use summary::{
    NEUTRAL_ALIGNMENT, alignment, assessment_notes, estimated_time_to_target, overall_readiness,
    priority_areas, summary_path,
};

use chrono::{DateTime, Utc};
use gw_core::entities::{
    ExternalSkillAssessment, GapAnalysisReport, SelfAssessmentResult, SkillGap, UserProfile,
};
use gw_core::enums::{Priority, ProficiencyLevel, ReadinessStatus, RoleLevel};
use gw_core::errors::CoreError;
use gw_core::standard::SkillStandard;

use crate::round2;
use crate::upstream::Upstream;

/// Weight of the AI assessment in the fused score.
pub const AI_WEIGHT: f64 = 0.6;
/// Weight of the self-assessment in the fused score.
pub const SELF_WEIGHT: f64 = 0.4;

/// Everything one gap-analysis run reads.
#[derive(Debug, Clone, Copy)]
pub struct GapInputs<'a> {
    pub session_id: &'a str,
    pub profile: &'a UserProfile,
    pub ai_assessment: &'a Upstream<ExternalSkillAssessment>,
    pub self_assessment: &'a SelfAssessmentResult,
    pub generated_at: DateTime<Utc>,
}

/// Runs gap analysis against a fixed skill standard.
#[derive(Debug, Clone, Copy)]
pub struct GapAnalyzer<'a> {
    standard: &'a SkillStandard,
}

impl<'a> GapAnalyzer<'a> {
    #[must_use]
    pub const fn new(standard: &'a SkillStandard) -> Self {
        Self { standard }
    }

    /// Gap for one skill at the target level.
    #[must_use]
    pub fn skill_gap(
        &self,
        skill: &str,
        target: RoleLevel,
        ai: &ExternalSkillAssessment,
        self_result: &SelfAssessmentResult,
    ) -> SkillGap {
        let ai_level = ai
            .get(skill)
            .map_or(ProficiencyLevel::ASSUMED, |rated| rated.proficiency());
        let self_level = self_result
            .get(skill)
            .map_or(ProficiencyLevel::ASSUMED, |estimate| estimate.proficiency);

        let combined_score = AI_WEIGHT.mul_add(ai_level.score_f64(), SELF_WEIGHT * self_level.score_f64());
        let current_level = ProficiencyLevel::from_score(combined_score);
        let required_level = self.standard.required(skill, target);
        // Measured against the fused level's ordinal, so gap_score is always a
        // whole number here and the fractional bands in describe_gap and the
        // recommendation cut points are only reachable by direct callers.
        let gap_score = required_level.score_f64() - current_level.score_f64();

        SkillGap {
            skill: skill.to_string(),
            current_level,
            required_level,
            gap: describe_gap(gap_score).to_string(),
            combined_score: round2(combined_score),
            gap_score,
            ai_assessed_level: ai_level,
            self_assessed_level: self_level,
            priority: Priority::from_gap(gap_score),
            recommendations: recommendations(skill, gap_score),
        }
    }

    /// Produce a fresh report.
    ///
    /// A fallback AI assessment is analysed as empty (every skill `Basic`) and
    /// its reason becomes the report narrative.
    ///
    /// # Errors
    ///
    /// `CoreError::Configuration` if the standard has no skills.
    pub fn analyze(&self, inputs: &GapInputs<'_>) -> Result<GapAnalysisReport, CoreError> {
        if self.standard.is_empty() {
            return Err(CoreError::Configuration(
                "skill standard matrix is empty".into(),
            ));
        }

        let empty = ExternalSkillAssessment::default();
        let (ai, narrative) = match inputs.ai_assessment {
            Upstream::Parsed(assessment) => (assessment, assessment.overall_assessment.as_deref()),
            Upstream::Fallback { reason } => (&empty, Some(reason.as_str())),
        };
        let target = inputs.profile.target_level;

        let skill_gaps: Vec<SkillGap> = self
            .standard
            .skills()
            .map(|skill| self.skill_gap(skill, target, ai, inputs.self_assessment))
            .collect();

        let mut skills_on_track = Vec::new();
        let mut skills_need_improvement = Vec::new();
        let mut critical_gaps = Vec::new();
        for gap in &skill_gaps {
            match gap.priority {
                Priority::High => critical_gaps.push(gap.skill.clone()),
                Priority::Medium => skills_need_improvement.push(gap.skill.clone()),
                Priority::Low if gap.gap_score <= 0.0 => skills_on_track.push(gap.skill.clone()),
                Priority::Low => {}
            }
        }

        let overall_readiness = overall_readiness(&skill_gaps);
        let alignment = alignment(ai, inputs.self_assessment);
        let signed_total: f64 = skill_gaps.iter().map(|g| g.gap_score).sum();

        tracing::debug!(
            session = inputs.session_id,
            %target,
            overall_readiness,
            alignment,
            critical = critical_gaps.len(),
            "gap analysis complete"
        );

        Ok(GapAnalysisReport {
            session_id: inputs.session_id.to_string(),
            user_name: inputs.profile.name.clone(),
            current_level: inputs.profile.current_level,
            target_level: target,
            generated_at: inputs.generated_at,
            overall_readiness,
            readiness_status: ReadinessStatus::from_readiness(overall_readiness),
            learning_path: summary_path(&skill_gaps),
            estimated_time_to_target: estimated_time_to_target(signed_total).to_string(),
            priority_areas: priority_areas(&skill_gaps),
            ai_vs_self_assessment_alignment: alignment,
            assessment_notes: assessment_notes(
                overall_readiness,
                alignment,
                &critical_gaps,
                narrative,
            ),
            ai_assessment_degraded: inputs.ai_assessment.is_degraded(),
            skill_gaps,
            skills_on_track,
            skills_need_improvement,
            critical_gaps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::entities::{AssessedSkill, SkillProficiencyEstimate};
    use gw_core::standard::SkillRequirement;
    use pretty_assertions::assert_eq;

    fn profile(target: RoleLevel) -> UserProfile {
        UserProfile {
            name: "Ada".into(),
            email: None,
            current_level: RoleLevel::Junior,
            target_level: target,
            years_of_experience: None,
            primary_technologies: vec![],
            additional_info: None,
        }
    }

    fn single_skill_standard(skill: &str, level: ProficiencyLevel) -> SkillStandard {
        SkillStandard::new(vec![SkillRequirement {
            skill: skill.into(),
            levels: [(RoleLevel::Senior, level)].into_iter().collect(),
        }])
        .unwrap()
    }

    fn ai_says(skill: &str, level: &str) -> Upstream<ExternalSkillAssessment> {
        Upstream::Parsed(ExternalSkillAssessment {
            skills: vec![AssessedSkill {
                skill: skill.into(),
                level: level.into(),
                reasoning: None,
            }],
            overall_assessment: None,
            readiness_for_target: None,
        })
    }

    fn self_says(skill: &str, level: ProficiencyLevel) -> SelfAssessmentResult {
        SelfAssessmentResult {
            skills: vec![SkillProficiencyEstimate {
                skill: skill.into(),
                proficiency: level,
                score: level.score_f64(),
                confidence: 3.0,
            }],
            overall_score: level.score_f64(),
            assessed_at: Utc::now(),
        }
    }

    #[test]
    fn fused_level_rounds_into_advanced_bin() {
        let standard = single_skill_standard("React", ProficiencyLevel::Advanced);
        let gap = GapAnalyzer::new(&standard).skill_gap(
            "React",
            RoleLevel::Senior,
            ai_says("React", "Expert").as_parsed().unwrap(),
            &self_says("React", ProficiencyLevel::Basic),
        );
        assert!((gap.combined_score - 2.8).abs() < f64::EPSILON);
        assert_eq!(gap.current_level, ProficiencyLevel::Advanced);
        assert!(gap.gap_score.abs() < f64::EPSILON);
        assert_eq!(gap.priority, Priority::Low);
    }

    #[test]
    fn absent_skills_default_to_basic() {
        let standard = single_skill_standard("CSS", ProficiencyLevel::Expert);
        let gap = GapAnalyzer::new(&standard).skill_gap(
            "CSS",
            RoleLevel::Senior,
            &ExternalSkillAssessment::default(),
            &self_says("HTML", ProficiencyLevel::Expert),
        );
        assert_eq!(gap.ai_assessed_level, ProficiencyLevel::Basic);
        assert_eq!(gap.self_assessed_level, ProficiencyLevel::Basic);
        assert_eq!(gap.current_level, ProficiencyLevel::Basic);
        assert!((gap.gap_score - 3.0).abs() < f64::EPSILON);
        assert_eq!(gap.priority, Priority::High);
        assert_eq!(gap.recommendations.len(), 4);
    }

    #[test]
    fn fallback_assessment_flags_report_and_uses_reason() {
        let standard = SkillStandard::builtin();
        let profile = profile(RoleLevel::Junior);
        let ai = Upstream::fallback("collaborator timed out");
        let self_result = self_says("HTML", ProficiencyLevel::Basic);
        let report = GapAnalyzer::new(&standard)
            .analyze(&GapInputs {
                session_id: "ses-1",
                profile: &profile,
                ai_assessment: &ai,
                self_assessment: &self_result,
                generated_at: Utc::now(),
            })
            .unwrap();

        assert!(report.ai_assessment_degraded);
        assert_eq!(report.skill_gaps.len(), 10);
        assert_eq!(report.skills_on_track.len(), 10);
        assert!((report.overall_readiness - 100.0).abs() < f64::EPSILON);
        assert!((report.ai_vs_self_assessment_alignment - NEUTRAL_ALIGNMENT).abs() < f64::EPSILON);
        assert!(report.assessment_notes.ends_with("AI Insights: collaborator timed out"));
    }
}
