//! Assessments: the self-assessment test, the AI assessment, scoring, and
//! gap analysis.

use chrono::Utc;
use gw_core::entities::{
    ExternalSkillAssessment, GapAnalysisReport, SelfAssessmentAnswer, Session,
};
use gw_core::enums::{EntityType, SessionStatus, TrailOp};
use gw_core::errors::CoreError;
use gw_core::responses::AssessmentTestResponse;
use gw_engine::gap::{GapAnalyzer, GapInputs};
use gw_engine::question_bank;
use gw_engine::scorer::score_answers;
use gw_engine::upstream::Upstream;

use crate::error::StoreError;
use crate::record::SessionRecord;
use crate::service::GapwiseService;

fn missing_step(record: &SessionRecord, to: SessionStatus) -> StoreError {
    CoreError::InvalidTransition {
        entity_type: "session".into(),
        id: record.session.id.clone(),
        from: record.session.status.to_string(),
        to: to.to_string(),
    }
    .into()
}

impl GapwiseService {
    /// The self-assessment test for a session.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session.
    pub fn assessment_test(&self, session_id: &str) -> Result<AssessmentTestResponse, StoreError> {
        let record = self.load(session_id)?;
        let questions = question_bank::assessment_test(self.standard());
        Ok(AssessmentTestResponse {
            session_id: record.session.id,
            target_level: record.profile.target_level,
            total_questions: questions.len(),
            skills_covered: self.standard().skills().map(str::to_string).collect(),
            questions,
        })
    }

    /// Record the conversational collaborator's assessment.
    ///
    /// A fallback is stored as-is; gap analysis treats it as empty.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, `InvalidTransition` while a
    /// self-assessment is being processed.
    pub fn record_ai_assessment(
        &self,
        session_id: &str,
        assessment: Upstream<ExternalSkillAssessment>,
    ) -> Result<Session, StoreError> {
        if let Some(reason) = assessment.fallback_reason() {
            tracing::warn!(session = %session_id, %reason, "recording degraded AI assessment");
        }
        let record = self.store().update(session_id, &mut |rec| {
            rec.transition(SessionStatus::ReadyForSelfAssessment, Utc::now())?;
            rec.ai_assessment = Some(assessment.clone());
            Ok(())
        })?;
        self.audit(
            session_id,
            TrailOp::Update,
            EntityType::AiAssessment,
            session_id,
            &assessment,
        );
        tracing::info!(session = %session_id, degraded = assessment.is_degraded(), "AI assessment recorded");
        Ok(record.session)
    }

    /// Score self-assessment answers and produce a gap report.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, `InvalidTransition` when no AI
    /// assessment was recorded, `InvalidInput` for malformed answers.
    pub fn submit_self_assessment(
        &self,
        session_id: &str,
        answers: &[SelfAssessmentAnswer],
    ) -> Result<GapAnalysisReport, StoreError> {
        if answers.is_empty() {
            return Err(CoreError::InvalidInput("answers are required".into()).into());
        }

        let analyzer = GapAnalyzer::new(self.standard());
        let mut report = None;
        let record = self.store().update(session_id, &mut |rec| {
            let now = Utc::now();
            let Some(ai) = rec.ai_assessment.clone() else {
                return Err(missing_step(rec, SessionStatus::AssessmentComplete));
            };
            rec.transition(SessionStatus::AssessmentComplete, now)?;
            let scored = score_answers(answers, now)?;
            let analysed = analyzer.analyze(&GapInputs {
                session_id,
                profile: &rec.profile,
                ai_assessment: &ai,
                self_assessment: &scored,
                generated_at: now,
            })?;
            rec.self_assessment = Some(scored);
            rec.gap_analysis = Some(analysed.clone());
            rec.transition(SessionStatus::Complete, now)?;
            report = Some(analysed);
            Ok(())
        })?;

        let report = report.ok_or_else(|| missing_step(&record, SessionStatus::Complete))?;
        self.audit(
            session_id,
            TrailOp::Create,
            EntityType::SelfAssessment,
            session_id,
            &record.self_assessment,
        );
        self.audit(
            session_id,
            TrailOp::Create,
            EntityType::GapAnalysis,
            session_id,
            &report,
        );
        tracing::info!(
            session = %session_id,
            readiness = report.overall_readiness,
            status = %report.readiness_status,
            "self-assessment scored"
        );
        Ok(report)
    }

    /// Recompute a fresh gap report from the stored inputs and store it.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, `InvalidTransition` when either
    /// assessment is missing.
    pub fn gap_analysis(&self, session_id: &str) -> Result<GapAnalysisReport, StoreError> {
        let analyzer = GapAnalyzer::new(self.standard());
        let mut report = None;
        self.store().update(session_id, &mut |rec| {
            let (Some(ai), Some(scored)) = (&rec.ai_assessment, &rec.self_assessment) else {
                return Err(missing_step(rec, SessionStatus::Complete));
            };
            let analysed = analyzer.analyze(&GapInputs {
                session_id,
                profile: &rec.profile,
                ai_assessment: ai,
                self_assessment: scored,
                generated_at: Utc::now(),
            })?;
            rec.gap_analysis = Some(analysed.clone());
            report = Some(analysed);
            Ok(())
        })?;

        let report = report.ok_or_else(|| CoreError::not_found("gap_analysis", session_id))?;
        self.audit(
            session_id,
            TrailOp::Update,
            EntityType::GapAnalysis,
            session_id,
            &report,
        );
        tracing::debug!(session = %session_id, readiness = report.overall_readiness, "gap analysis refreshed");
        Ok(report)
    }
}
