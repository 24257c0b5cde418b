//! Completion and XP ledger.

use chrono::Utc;
use gw_core::entities::{CompletionRequest, CompletionResult, ProgressLedger, ProgressRecord};
use gw_core::enums::{EntityType, TrailOp};
use gw_core::errors::CoreError;
use gw_engine::grading::grade;

use crate::error::StoreError;
use crate::service::GapwiseService;

impl GapwiseService {
    /// Grade a completion event and add its XP to the session total.
    ///
    /// The progress record for the content id is overwritten. Whether a
    /// repeated completion earns XP again follows the configured award policy.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a missing content id or quiz answers, `NotFound`
    /// for an unknown session or content that was never cached.
    pub fn complete_content(
        &self,
        session_id: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, StoreError> {
        if request.content_id.trim().is_empty() {
            return Err(CoreError::InvalidInput("content_id is required".into()).into());
        }
        let item = self.get_content(session_id, &request.content_id)?;
        let policy = self.options().award_policy;

        let mut outcome = None;
        let record = self.store().update(session_id, &mut |rec| {
            let already_completed = rec.ledger.is_completed(&item.content_id);
            let graded = grade(&item, request, already_completed, policy)?;
            let progress = ProgressRecord {
                completed: true,
                xp_earned: graded.xp_earned,
                completed_at: Utc::now(),
                passed: graded.passed,
                score: graded.score,
            };
            rec.ledger.record(item.content_id.clone(), progress.clone());
            outcome = Some((graded, progress));
            Ok(())
        })?;

        let (graded, progress) =
            outcome.ok_or_else(|| CoreError::not_found("progress", &item.content_id))?;
        self.audit(
            session_id,
            TrailOp::Complete,
            EntityType::Progress,
            &item.content_id,
            &progress,
        );
        tracing::info!(
            session = %session_id,
            content = %item.content_id,
            xp = graded.xp_earned,
            total_xp = record.ledger.total_xp,
            "content completed"
        );

        Ok(CompletionResult {
            success: true,
            content_id: item.content_id,
            xp_earned: graded.xp_earned,
            passed: graded.passed,
            score: graded.score,
            total_xp: record.ledger.total_xp,
            message: graded.message,
        })
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown session.
    pub fn progress(&self, session_id: &str) -> Result<ProgressLedger, StoreError> {
        Ok(self.load(session_id)?.ledger)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown session or a content id with no record.
    pub fn progress_record(
        &self,
        session_id: &str,
        content_id: &str,
    ) -> Result<ProgressRecord, StoreError> {
        self.load(session_id)?
            .ledger
            .records
            .remove(content_id)
            .ok_or_else(|| CoreError::not_found("progress", content_id).into())
    }
}
