//! Activity logger for the append-only activity log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::error::{EdubudgetError, EdubudgetResult};

use super::entry::{Action, ActivityEntry};

/// Handles writing activity entries to the log file (JSONL)
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    fn open_for_append(&self) -> EdubudgetResult<File> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EdubudgetError::Io(format!("Failed to create log directory: {}", e))
            })?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| EdubudgetError::Io(format!("Failed to open activity log: {}", e)))
    }

    /// Append one entry
    pub fn log(&self, entry: &ActivityEntry) -> EdubudgetResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries and flush once
    pub fn log_batch(&self, entries: &[ActivityEntry]) -> EdubudgetResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                EdubudgetError::Json(format!("Failed to serialize activity entry: {}", e))
            })?;

            writeln!(file, "{}", json)
                .map_err(|e| EdubudgetError::Io(format!("Failed to write activity entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| EdubudgetError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read every entry, oldest first
    pub fn read_all(&self) -> EdubudgetResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| EdubudgetError::Io(format!("Failed to open activity log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                EdubudgetError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                EdubudgetError::Json(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> EdubudgetResult<Vec<ActivityEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> EdubudgetResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| EdubudgetError::Io(format!("Failed to open activity log: {}", e)))?;

        Ok(BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

/// Activity recorder for one session
///
/// Stamps every entry with the session id. When disabled, nothing is written.
/// Write failures are returned to the caller, who decides whether they matter.
pub struct ActivityLog {
    logger: Option<AuditLogger>,
    session_id: Uuid,
}

impl ActivityLog {
    /// Start a new session writing to `log_path`
    pub fn new(log_path: PathBuf, enabled: bool) -> Self {
        Self {
            logger: enabled.then(|| AuditLogger::new(log_path)),
            session_id: Uuid::new_v4(),
        }
    }

    /// A recorder that never writes
    pub fn disabled() -> Self {
        Self {
            logger: None,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_enabled(&self) -> bool {
        self.logger.is_some()
    }

    /// Record an action and the size of the resulting view
    pub fn record<T: Serialize>(
        &self,
        action: Action,
        detail: &T,
        result_count: Option<usize>,
    ) -> EdubudgetResult<()> {
        let Some(logger) = &self.logger else {
            return Ok(());
        };
        let mut entry = ActivityEntry::new(self.session_id, action, detail);
        entry.result_count = result_count;
        logger.log(&entry)
    }
}
