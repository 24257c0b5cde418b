//! JSON-file session store.
//!
//! Layout under the data directory:
//!
//! ```text
//! sessions/{session_id}.json
//! content/{session_id}/{content_id}.json
//! ```
//!
//! Documents are written to a temporary sibling and renamed into place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gw_core::entities::ContentItem;
use gw_core::errors::CoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::record::SessionRecord;
use crate::store::{RecordUpdate, SessionStore, not_found};

/// Store rooted at a data directory. Mutations are serialized by a
/// process-local lock.
pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating if needed) a store under `root`.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the directories cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(root.join("sessions"))?;
        fs::create_dir_all(root.join("content"))?;
        tracing::debug!(root = %root.display(), "opened file store");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_path(&self, session_id: &str) -> Result<PathBuf, StoreError> {
        check_segment(session_id)?;
        Ok(self.root.join("sessions").join(format!("{session_id}.json")))
    }

    fn content_dir(&self, session_id: &str) -> Result<PathBuf, StoreError> {
        check_segment(session_id)?;
        Ok(self.root.join("content").join(session_id))
    }

    fn content_path(&self, session_id: &str, content_id: &str) -> Result<PathBuf, StoreError> {
        check_segment(content_id)?;
        Ok(self.content_dir(session_id)?.join(format!("{content_id}.json")))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, StoreError> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::Poisoned("file store"))
    }
}

/// Ids become file names; reject anything that could escape the directory.
fn check_segment(id: &str) -> Result<(), StoreError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!("'{id}' is not a valid id")).into())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl SessionStore for FileStore {
    fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        read_json(&self.session_path(session_id)?)
    }

    fn put(&self, record: SessionRecord) -> Result<(), StoreError> {
        let path = self.session_path(record.id())?;
        let _guard = self.lock()?;
        write_json(&path, &record)
    }

    fn delete(&self, session_id: &str) -> Result<bool, StoreError> {
        let path = self.session_path(session_id)?;
        let content_dir = self.content_dir(session_id)?;
        let _guard = self.lock()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        if content_dir.exists() {
            fs::remove_dir_all(&content_dir)?;
        }
        Ok(true)
    }

    fn list(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let mut records = Vec::new();
        for entry in fs::read_dir(self.root.join("sessions"))? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(record) = read_json::<SessionRecord>(&path)? {
                records.push(record);
            }
        }
        records.sort_by(|a, b| a.session.created_at.cmp(&b.session.created_at));
        Ok(records)
    }

    fn update(
        &self,
        session_id: &str,
        f: &mut RecordUpdate<'_>,
    ) -> Result<SessionRecord, StoreError> {
        let path = self.session_path(session_id)?;
        let _guard = self.lock()?;
        let mut record: SessionRecord = read_json(&path)?.ok_or_else(|| not_found(session_id))?;
        f(&mut record)?;
        write_json(&path, &record)?;
        Ok(record)
    }

    fn get_content(
        &self,
        session_id: &str,
        content_id: &str,
    ) -> Result<Option<ContentItem>, StoreError> {
        read_json(&self.content_path(session_id, content_id)?)
    }

    fn put_content(&self, item: ContentItem) -> Result<ContentItem, StoreError> {
        let path = self.content_path(&item.session_id, &item.content_id)?;
        let _guard = self.lock()?;
        if let Some(existing) = read_json::<ContentItem>(&path)? {
            return Ok(existing);
        }
        write_json(&path, &item)?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gw_core::entities::UserProfile;
    use gw_core::enums::RoleLevel;
    use pretty_assertions::assert_eq;

    fn record(id: &str) -> SessionRecord {
        SessionRecord::new(
            id,
            UserProfile {
                name: "Ari".into(),
                email: Some("ari@example.com".into()),
                current_level: RoleLevel::Junior,
                target_level: RoleLevel::TeamLead,
                years_of_experience: Some(4.5),
                primary_technologies: vec!["CSS".into()],
                additional_info: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let original = record("ses-0000abcd");
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.put(original.clone()).unwrap();
        }
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("ses-0000abcd").unwrap(), Some(original));
        assert_eq!(reopened.list().unwrap().len(), 1);
    }

    #[test]
    fn path_like_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let err = store.get("../escape").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn missing_session_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("ses-00000000").unwrap().is_none());
        assert!(!store.delete("ses-00000000").unwrap());
    }

    #[test]
    fn update_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.put(record("ses-00000001")).unwrap();
        store
            .update("ses-00000001", &mut |rec| {
                rec.ledger.total_xp += 30;
                Ok(())
            })
            .unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("ses-00000001").unwrap().unwrap().ledger.total_xp,
            30
        );
    }
}
