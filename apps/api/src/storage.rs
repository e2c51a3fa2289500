//! JSON-file-per-record storage.
//!
//! Extraction results and parsed job descriptions are handed between
//! pipeline stages by id: each record lives in its own `<uuid>.json` under
//! the data directory. No database; the filesystem is the source of truth.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

const RESUME_DIR: &str = "resumes";
const JOB_DIR: &str = "jobs";

#[derive(Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the storage layout. Run once at startup.
    pub fn init(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(self.root.join(RESUME_DIR))?;
        std::fs::create_dir_all(self.root.join(JOB_DIR))?;
        Ok(())
    }

    pub fn save_resume<T: Serialize>(&self, id: Uuid, value: &T) -> Result<(), StorageError> {
        self.save(RESUME_DIR, id, value)
    }

    pub fn load_resume<T: DeserializeOwned>(&self, id: Uuid) -> Result<T, StorageError> {
        self.load(RESUME_DIR, id)
    }

    pub fn save_job<T: Serialize>(&self, id: Uuid, value: &T) -> Result<(), StorageError> {
        self.save(JOB_DIR, id, value)
    }

    pub fn load_job<T: DeserializeOwned>(&self, id: Uuid) -> Result<T, StorageError> {
        self.load(JOB_DIR, id)
    }

    fn path_for(&self, kind: &str, id: Uuid) -> PathBuf {
        self.root.join(kind).join(format!("{id}.json"))
    }

    fn save<T: Serialize>(&self, kind: &str, id: Uuid, value: &T) -> Result<(), StorageError> {
        let path = self.path_for(kind, id);
        let bytes = serde_json::to_vec_pretty(value)?;
        std::fs::write(&path, bytes)?;
        debug!(path = %path.display(), "record persisted");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, kind: &str, id: Uuid) -> Result<T, StorageError> {
        let path = self.path_for(kind, id);
        if !path.exists() {
            return Err(StorageError::NotFound(id));
        }
        let bytes = std::fs::read(&path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeRecord;

    fn temp_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        store.init().unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, store) = temp_store();
        let id = Uuid::new_v4();
        let record = ResumeRecord {
            about: "Storage engineer.".to_string(),
            tags: vec!["Backend Developer".to_string()],
            ..Default::default()
        };

        store.save_resume(id, &record).unwrap();
        let loaded: ResumeRecord = store.load_resume(id).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_missing_record_is_not_found() {
        let (_dir, store) = temp_store();
        let id = Uuid::new_v4();
        let err = store.load_resume::<ResumeRecord>(id).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(missing) if missing == id));
    }

    #[test]
    fn test_resume_and_job_namespaces_are_separate() {
        let (_dir, store) = temp_store();
        let id = Uuid::new_v4();
        store.save_resume(id, &ResumeRecord::default()).unwrap();
        assert!(store
            .load_job::<ResumeRecord>(id)
            .is_err_and(|e| matches!(e, StorageError::NotFound(_))));
    }
}
