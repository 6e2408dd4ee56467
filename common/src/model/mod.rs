pub mod document_version;
pub mod event_draft;
pub mod validation_result;
