//! Session lifecycle: start, get, list, delete.

use chrono::Utc;
use gw_core::entities::UserProfile;
use gw_core::enums::{EntityType, TrailOp};
use gw_core::errors::CoreError;
use gw_core::ids::{PREFIX_SESSION, generate_id};
use gw_core::responses::{DeleteResponse, SessionListResponse, SessionStartResponse};

use crate::error::StoreError;
use crate::record::SessionRecord;
use crate::service::GapwiseService;

impl GapwiseService {
    /// Start a session for a profile.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the name is blank; store failures.
    pub fn start_session(&self, profile: UserProfile) -> Result<SessionStartResponse, StoreError> {
        if profile.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("name is required".into()).into());
        }
        if profile.years_of_experience.is_some_and(|y| !(0.0..=80.0).contains(&y)) {
            return Err(CoreError::InvalidInput(
                "years_of_experience must be between 0 and 80".into(),
            )
            .into());
        }

        let id = generate_id(PREFIX_SESSION)?;
        let record = SessionRecord::new(id.clone(), profile, Utc::now());
        self.store().put(record.clone())?;
        self.audit(&id, TrailOp::Create, EntityType::Session, &id, &record.session);

        tracing::info!(session = %id, target = %record.profile.target_level, "session started");

        Ok(SessionStartResponse {
            session: record.session,
            profile: record.profile,
            next_step: "Record the AI assessment, then take the self-assessment test".into(),
        })
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown session.
    pub fn get_session(&self, session_id: &str) -> Result<SessionRecord, StoreError> {
        self.load(session_id)
    }

    /// Most recently created sessions first, at most `limit`.
    ///
    /// # Errors
    ///
    /// Store failures.
    pub fn list_sessions(&self, limit: usize) -> Result<SessionListResponse, StoreError> {
        let mut records = self.store().list()?;
        let total = records.len();
        records.reverse();
        let sessions = records
            .iter()
            .take(limit)
            .map(SessionRecord::summary)
            .collect();
        Ok(SessionListResponse { sessions, total })
    }

    /// Delete a session with its cached content and progress.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session.
    pub fn delete_session(&self, session_id: &str) -> Result<DeleteResponse, StoreError> {
        if !self.store().delete(session_id)? {
            return Err(crate::store::not_found(session_id));
        }
        self.audit(
            session_id,
            TrailOp::Delete,
            EntityType::Session,
            session_id,
            &serde_json::Value::Null,
        );
        tracing::info!(session = %session_id, "session deleted");
        Ok(DeleteResponse {
            id: session_id.to_string(),
            deleted: true,
        })
    }
}
