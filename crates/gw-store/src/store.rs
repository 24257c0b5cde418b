//! The injected key-value store the service runs against.

use gw_core::entities::ContentItem;

use crate::error::StoreError;
use crate::record::SessionRecord;

/// Read-modify-write callback applied under the session's lock.
pub type RecordUpdate<'a> = dyn FnMut(&mut SessionRecord) -> Result<(), StoreError> + 'a;

/// Session and content storage.
///
/// Implementations serialize [`SessionStore::update`] calls per session id,
/// so concurrent ledger writes to one session are never lost. Sessions are
/// otherwise independent.
pub trait SessionStore: Send + Sync {
    /// # Errors
    ///
    /// Backend failures only; an absent session is `Ok(None)`.
    fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Insert or replace a session record.
    ///
    /// # Errors
    ///
    /// Backend failures.
    fn put(&self, record: SessionRecord) -> Result<(), StoreError>;

    /// Remove a session and its cached content. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Backend failures.
    fn delete(&self, session_id: &str) -> Result<bool, StoreError>;

    /// All sessions, oldest first.
    ///
    /// # Errors
    ///
    /// Backend failures.
    fn list(&self) -> Result<Vec<SessionRecord>, StoreError>;

    /// Atomically apply `f` to a session and return the stored result.
    ///
    /// `f` works on a copy; nothing is written when it returns an error.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown session, or whatever `f` returns.
    fn update(&self, session_id: &str, f: &mut RecordUpdate<'_>)
    -> Result<SessionRecord, StoreError>;

    /// # Errors
    ///
    /// Backend failures; an absent item is `Ok(None)`.
    fn get_content(
        &self,
        session_id: &str,
        content_id: &str,
    ) -> Result<Option<ContentItem>, StoreError>;

    /// Cache an item unless its key is already cached.
    ///
    /// Returns the cached item, which is the earlier one when the key existed.
    ///
    /// # Errors
    ///
    /// Backend failures.
    fn put_content(&self, item: ContentItem) -> Result<ContentItem, StoreError>;
}

pub(crate) fn not_found(session_id: &str) -> StoreError {
    gw_core::errors::CoreError::not_found("session", session_id).into()
}
