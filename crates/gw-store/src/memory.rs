//! In-process session store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use gw_core::entities::ContentItem;

use crate::error::StoreError;
use crate::record::SessionRecord;
use crate::store::{RecordUpdate, SessionStore, not_found};

type ContentMap = HashMap<(String, String), ContentItem>;

/// Volatile store. Each session sits behind its own mutex so writes to one
/// session serialize while other sessions proceed.
#[derive(Default)]
pub struct MemoryStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionRecord>>>>,
    content: RwLock<ContentMap>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, session_id: &str) -> Result<Option<Arc<Mutex<SessionRecord>>>, StoreError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| StoreError::Poisoned("sessions"))?;
        Ok(sessions.get(session_id).cloned())
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let Some(slot) = self.slot(session_id)? else {
            return Ok(None);
        };
        let record = slot.lock().map_err(|_| StoreError::Poisoned("session"))?;
        Ok(Some(record.clone()))
    }

    fn put(&self, record: SessionRecord) -> Result<(), StoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| StoreError::Poisoned("sessions"))?;
        if let Some(slot) = sessions.get(record.id()) {
            let mut current = slot.lock().map_err(|_| StoreError::Poisoned("session"))?;
            *current = record;
        } else {
            sessions.insert(record.id().to_string(), Arc::new(Mutex::new(record)));
        }
        Ok(())
    }

    fn delete(&self, session_id: &str) -> Result<bool, StoreError> {
        let removed = self
            .sessions
            .write()
            .map_err(|_| StoreError::Poisoned("sessions"))?
            .remove(session_id)
            .is_some();
        if removed {
            self.content
                .write()
                .map_err(|_| StoreError::Poisoned("content"))?
                .retain(|(session, _), _| session != session_id);
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let slots: Vec<Arc<Mutex<SessionRecord>>> = self
            .sessions
            .read()
            .map_err(|_| StoreError::Poisoned("sessions"))?
            .values()
            .cloned()
            .collect();
        let mut records = slots
            .iter()
            .map(|slot| {
                slot.lock()
                    .map(|record| record.clone())
                    .map_err(|_| StoreError::Poisoned("session"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by(|a, b| a.session.created_at.cmp(&b.session.created_at));
        Ok(records)
    }

    fn update(
        &self,
        session_id: &str,
        f: &mut RecordUpdate<'_>,
    ) -> Result<SessionRecord, StoreError> {
        let slot = self.slot(session_id)?.ok_or_else(|| not_found(session_id))?;
        let mut record = slot.lock().map_err(|_| StoreError::Poisoned("session"))?;
        let mut draft = record.clone();
        f(&mut draft)?;
        *record = draft.clone();
        Ok(draft)
    }

    fn get_content(
        &self,
        session_id: &str,
        content_id: &str,
    ) -> Result<Option<ContentItem>, StoreError> {
        let content = self
            .content
            .read()
            .map_err(|_| StoreError::Poisoned("content"))?;
        Ok(content
            .get(&(session_id.to_string(), content_id.to_string()))
            .cloned())
    }

    fn put_content(&self, item: ContentItem) -> Result<ContentItem, StoreError> {
        let mut content = self
            .content
            .write()
            .map_err(|_| StoreError::Poisoned("content"))?;
        let cached = content
            .entry((item.session_id.clone(), item.content_id.clone()))
            .or_insert(item);
        Ok(cached.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gw_core::entities::{ContentBody, SummaryBody, UserProfile};
    use gw_core::enums::{ContentType, RoleLevel};
    use gw_core::errors::CoreError;

    fn record(id: &str) -> SessionRecord {
        SessionRecord::new(
            id,
            UserProfile {
                name: "Ari".into(),
                email: None,
                current_level: RoleLevel::Junior,
                target_level: RoleLevel::Senior,
                years_of_experience: None,
                primary_technologies: vec![],
                additional_info: None,
            },
            Utc::now(),
        )
    }

    fn item(session: &str, skill: &str) -> ContentItem {
        ContentItem {
            content_id: format!("summary-{skill}-m1"),
            session_id: session.into(),
            content_type: ContentType::Summary,
            skill: skill.into(),
            milestone_number: 1,
            xp: 25,
            estimated_time: "5 minutes".into(),
            degraded: false,
            created_at: Utc::now(),
            body: ContentBody::Summary(SummaryBody::default()),
        }
    }

    #[test]
    fn failed_update_leaves_record_untouched() {
        let store = MemoryStore::new();
        store.put(record("ses-a")).unwrap();
        let err = store
            .update("ses-a", &mut |rec| {
                rec.ledger.total_xp = 999;
                Err(CoreError::InvalidInput("nope".into()).into())
            })
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(store.get("ses-a").unwrap().unwrap().ledger.total_xp, 0);
    }

    #[test]
    fn update_unknown_session_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update("ses-missing", &mut |_| Ok(())).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn put_content_keeps_first_item() {
        let store = MemoryStore::new();
        let first = item("ses-a", "css");
        let mut second = item("ses-a", "css");
        second.xp = 1;
        store.put_content(first.clone()).unwrap();
        assert_eq!(store.put_content(second).unwrap(), first);
    }

    #[test]
    fn delete_drops_session_content() {
        let store = MemoryStore::new();
        store.put(record("ses-a")).unwrap();
        store.put_content(item("ses-a", "css")).unwrap();
        assert!(store.delete("ses-a").unwrap());
        assert!(!store.delete("ses-a").unwrap());
        assert!(store.get_content("ses-a", "summary-css-m1").unwrap().is_none());
    }
}
