//! Session store: the on-disk source of truth for the Idle/Active state
//! machine. The record exists iff a session is active.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(cfg: &Config) -> Self {
        SessionStore {
            path: cfg.session_file(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Atomically create the record: write a sibling temp file, then rename
    /// into place, so a concurrent `exists()` never observes a torn record.
    pub fn write(&self, record: &SessionRecord) -> AppResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Parse the record. Strict JSON first; on failure fall back to the
    /// permissive line scanner so a hand-edited file still loads.
    pub fn read(&self) -> AppResult<SessionRecord> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::Session(format!("no session record at {}", self.path.display()))
            } else {
                AppError::Io(e)
            }
        })?;

        if let Ok(record) = serde_json::from_str::<SessionRecord>(&text) {
            return Ok(record);
        }

        SessionRecord::from_loose_text(&text).ok_or_else(|| {
            AppError::Session(format!("could not parse {}", self.path.display()))
        })
    }

    pub fn remove(&self) -> AppResult<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
