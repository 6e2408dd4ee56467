//! In-memory document repository.
//!
//! Versions are only ever prepended; nothing is edited or removed once saved,
//! and the list lives as long as the workspace does.

use log::debug;

use crate::model::document_version::{DocumentVersion, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionStore {
    /// Newest first.
    versions: Vec<DocumentVersion>,
}

impl VersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a snapshot of `content`.
    ///
    /// The id is the save time in epoch milliseconds, bumped past the newest id
    /// when two saves share a millisecond so ids stay unique.
    pub fn save(&mut self, label: impl Into<String>, content: &str, at: Timestamp) {
        let id = match self.versions.first() {
            Some(newest) if newest.id >= at.epoch_millis => newest.id + 1,
            _ => at.epoch_millis,
        };

        let version = DocumentVersion {
            id,
            content: content.to_string(),
            timestamp: at.display,
            label: label.into(),
        };
        debug!("saved version {} ({})", version.id, version.label);
        self.versions.insert(0, version);
    }

    pub fn list(&self) -> &[DocumentVersion] {
        &self.versions
    }

    pub fn get(&self, id: u64) -> Option<&DocumentVersion> {
        self.versions.iter().find(|version| version.id == id)
    }

    pub fn newest(&self) -> Option<&DocumentVersion> {
        self.versions.first()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
