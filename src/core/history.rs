// src/core/history.rs

use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::models::ScanHistoryEntry;

/// Completed scans of this session, oldest first. Nothing survives a restart
/// except what is explicitly exported.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<ScanHistoryEntry>,
}

impl HistoryStore {
    pub fn append(&mut self, entry: ScanHistoryEntry) {
        info!(domain = %entry.domain, address = %entry.address, "Scan added to history.");
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        info!(removed = self.entries.len(), "History cleared.");
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ScanHistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole list as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Writes the JSON export to `path`, replacing any previous export.
    pub fn export_to(&self, path: &Path) -> io::Result<PathBuf> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        info!(path = %path.display(), entries = self.entries.len(), "History exported.");
        Ok(path.to_path_buf())
    }
}
