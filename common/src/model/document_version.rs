use serde::{Deserialize, Serialize};

/// A client clock reading, captured by the caller at save time.
///
/// `display` is the locale formatted string shown in the documents list;
/// `epoch_millis` seeds the version id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamp {
    pub epoch_millis: u64,
    pub display: String,
}

impl Timestamp {
    pub fn new(epoch_millis: u64, display: impl Into<String>) -> Self {
        Self {
            epoch_millis,
            display: display.into(),
        }
    }
}

/// An immutable snapshot of the document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVersion {
    pub id: u64,
    pub content: String,
    pub timestamp: String,
    pub label: String,
}
