use chrono::{DateTime, Utc};
use gw_core::entities::{
    ExternalSkillAssessment, GapAnalysisReport, ProgressLedger, SelfAssessmentResult, Session,
    UserProfile,
};
use gw_core::enums::SessionStatus;
use gw_core::errors::CoreError;
use gw_core::responses::SessionSummary;
use gw_engine::upstream::Upstream;
use serde::{Deserialize, Serialize};

/// Everything stored for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub session: Session,
    pub profile: UserProfile,
    #[serde(default)]
    pub ai_assessment: Option<Upstream<ExternalSkillAssessment>>,
    #[serde(default)]
    pub self_assessment: Option<SelfAssessmentResult>,
    #[serde(default)]
    pub gap_analysis: Option<GapAnalysisReport>,
    #[serde(default)]
    pub ledger: ProgressLedger,
}

impl SessionRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, profile: UserProfile, now: DateTime<Utc>) -> Self {
        Self {
            session: Session {
                id: id.into(),
                status: SessionStatus::Active,
                created_at: now,
                updated_at: now,
            },
            profile,
            ai_assessment: None,
            self_assessment: None,
            gap_analysis: None,
            ledger: ProgressLedger::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.session.id
    }

    /// Move the session to `next`, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidTransition` when the state machine forbids the move.
    pub fn transition(&mut self, next: SessionStatus, now: DateTime<Utc>) -> Result<(), CoreError> {
        let current = self.session.status;
        if !current.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "session".into(),
                id: self.session.id.clone(),
                from: current.to_string(),
                to: next.to_string(),
            });
        }
        self.session.status = next;
        self.session.updated_at = now;
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.session.id.clone(),
            name: self.profile.name.clone(),
            status: self.session.status,
            target_level: self.profile.target_level,
            total_xp: self.ledger.total_xp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::enums::RoleLevel;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Ari".into(),
            email: None,
            current_level: RoleLevel::Junior,
            target_level: RoleLevel::Senior,
            years_of_experience: None,
            primary_technologies: vec![],
            additional_info: None,
        }
    }

    #[test]
    fn new_record_is_active_and_empty() {
        let record = SessionRecord::new("ses-00000001", profile(), Utc::now());
        assert_eq!(record.session.status, SessionStatus::Active);
        assert!(record.ai_assessment.is_none());
        assert_eq!(record.ledger.total_xp, 0);
    }

    #[test]
    fn skipping_the_ai_assessment_is_rejected() {
        let mut record = SessionRecord::new("ses-00000001", profile(), Utc::now());
        let err = record
            .transition(SessionStatus::AssessmentComplete, Utc::now())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert_eq!(record.session.status, SessionStatus::Active);
    }

    #[test]
    fn summary_reports_xp() {
        let mut record = SessionRecord::new("ses-00000001", profile(), Utc::now());
        record.ledger.total_xp = 80;
        let summary = record.summary();
        assert_eq!(summary.name, "Ari");
        assert_eq!(summary.total_xp, 80);
    }
}
