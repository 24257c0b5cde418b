//! Learning plans, from a session's gap report or from caller-supplied ratings.

use chrono::Utc;
use gw_core::entities::{LearningPlan, SkillRating};
use gw_core::enums::SessionStatus;
use gw_core::errors::CoreError;
use gw_engine::path::{PathSynthesizer, ratings_from_gaps};

use crate::error::StoreError;
use crate::service::GapwiseService;

impl GapwiseService {
    fn synthesizer(&self) -> PathSynthesizer {
        PathSynthesizer::new(self.options().resource_base_url.clone(), Utc::now())
    }

    fn role_label<'a>(&'a self, role: Option<&'a str>) -> &'a str {
        role.map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.options().default_role)
    }

    /// Plan built from the session's stored gap report.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, `InvalidTransition` before the
    /// self-assessment was submitted.
    pub fn learning_plan_for_session(
        &self,
        session_id: &str,
        role: Option<&str>,
    ) -> Result<LearningPlan, StoreError> {
        let record = self.load(session_id)?;
        let Some(report) = &record.gap_analysis else {
            return Err(CoreError::InvalidTransition {
                entity_type: "session".into(),
                id: session_id.to_string(),
                from: record.session.status.to_string(),
                to: SessionStatus::Complete.to_string(),
            }
            .into());
        };
        let plan = self
            .synthesizer()
            .plan(self.role_label(role), &ratings_from_gaps(&report.skill_gaps));
        tracing::info!(session = %session_id, paths = plan.total_skills, xp = plan.total_xp_available, "learning plan generated");
        Ok(plan)
    }

    /// Plan for arbitrary skill ratings, outside any session.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when a rating has a blank skill name.
    pub fn learning_plan(
        &self,
        role: Option<&str>,
        ratings: &[SkillRating],
    ) -> Result<LearningPlan, StoreError> {
        if let Some(blank) = ratings.iter().position(|r| r.skill.trim().is_empty()) {
            return Err(
                CoreError::InvalidInput(format!("rating {} has no skill", blank + 1)).into(),
            );
        }
        Ok(self.synthesizer().plan(self.role_label(role), ratings))
    }
}
