//! Content cache. Items are immutable once cached.

use chrono::Utc;
use gw_core::entities::{ContentBody, ContentItem, ContentKey};
use gw_core::enums::{EntityType, TrailOp};
use gw_core::errors::CoreError;
use gw_engine::content::build_item;
use gw_engine::upstream::Upstream;

use crate::error::StoreError;
use crate::service::GapwiseService;

impl GapwiseService {
    /// Cache collaborator output for a session.
    ///
    /// When the key is already cached the earlier item is returned unchanged
    /// and `body` is discarded.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, `InvalidInput` for a bad key, a
    /// body of the wrong content type, or a cached item under the same id
    /// that belongs to a different key.
    pub fn cache_content(
        &self,
        session_id: &str,
        key: &ContentKey,
        body: Upstream<ContentBody>,
    ) -> Result<ContentItem, StoreError> {
        self.load(session_id)?;
        if let Some(existing) = self.store().get_content(session_id, &key.content_id())? {
            tracing::debug!(session = %session_id, content = %existing.content_id, "content already cached");
            return ensure_key(key, existing);
        }

        let item = build_item(session_id, key, body, Utc::now())?;
        let cached = ensure_key(key, self.store().put_content(item.clone())?)?;
        if cached == item {
            self.audit(
                session_id,
                TrailOp::Create,
                EntityType::Content,
                &cached.content_id,
                &cached,
            );
            tracing::info!(
                session = %session_id,
                content = %cached.content_id,
                degraded = cached.degraded,
                "content cached"
            );
        }
        Ok(cached)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown session or uncached content id.
    pub fn get_content(&self, session_id: &str, content_id: &str) -> Result<ContentItem, StoreError> {
        self.load(session_id)?;
        self.store()
            .get_content(session_id, content_id)?
            .ok_or_else(|| CoreError::not_found("content", content_id).into())
    }
}

fn ensure_key(key: &ContentKey, item: ContentItem) -> Result<ContentItem, StoreError> {
    if key.matches(&item) {
        Ok(item)
    } else {
        Err(CoreError::InvalidInput(format!(
            "content id {} is already used by skill '{}'",
            item.content_id, item.skill
        ))
        .into())
    }
}
