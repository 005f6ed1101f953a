//! File-backed accept log.
//!
//! Layout: a single UTF-8 file holding a pretty-printed JSON array of
//! accept records in arrival order. Every append rewrites the whole file.
//!
//! Reads never fail: an absent or unreadable file, or one that is not a JSON
//! array, is an empty log. Elements are not validated; whatever the array
//! holds is kept verbatim across appends.
//! Appends are serialized by an in-process writer lock; separate processes
//! writing the same file can still lose entries (last writer wins).

use crate::entry::{AcceptEntry, LoggedEntry};
use crate::error::Result;
use crate::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
pub struct LogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry, oldest first.
    pub fn load(&self) -> Vec<LoggedEntry> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "accept log unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<LoggedEntry>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "accept log corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append `entry` and rewrite the file. Write failures propagate.
    pub fn append(&self, entry: &AcceptEntry) -> Result<()> {
        let logged = LoggedEntry::from_entry(entry)?;
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load();
        entries.push(logged);
        self.save_all(&entries)
    }

    /// Create the file as an empty array if it does not exist yet.
    /// Returns true if the file was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        io::write_if_missing(&self.path, b"[]")
    }

    fn save_all(&self, entries: &[LoggedEntry]) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        io::atomic_write(&self.path, content.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
