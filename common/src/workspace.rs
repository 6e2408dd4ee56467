//! State machine behind the Create Event page.
//!
//! The frontend component owns one [`EventWorkspace`] and forwards user
//! actions to it; timers, DOM access and toasts stay in the component. Every
//! field here is local to one workspace instance and is dropped with it.

use log::{debug, warn};

use crate::error::WorkspaceError;
use crate::generation::{
    append_block, GenerationKind, GenerationRequest, GenerationState, QUICK_PROMPTS,
};
use crate::model::document_version::{DocumentVersion, Timestamp};
use crate::model::event_draft::{DraftField, EventDraft};
use crate::validation::{self, ValidationReport};
use crate::versions::VersionStore;

/// Label given to the version saved by a successful submit.
pub const SUBMITTED_LABEL: &str = "Submitted";
pub const DRAFT_LABEL: &str = "Draft";
pub const AUTO_SAVE_LABEL: &str = "Auto Save";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Poster,
    Letter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Labels of the rules that failed, in rule order.
    Blocked(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventWorkspace {
    pub draft: EventDraft,
    pub versions: VersionStore,
    pub prompt: String,
    pub generation: GenerationState,
    pub preview_mode: PreviewMode,
    pub show_validation: bool,
    pub show_submit_options: bool,
    pub show_versions: bool,
    pub assistant_open: bool,
    pub auto_save: bool,
}

impl Default for EventWorkspace {
    fn default() -> Self {
        Self {
            draft: EventDraft::default(),
            versions: VersionStore::new(),
            prompt: String::new(),
            generation: GenerationState::Idle,
            preview_mode: PreviewMode::Poster,
            show_validation: false,
            show_submit_options: false,
            show_versions: false,
            assistant_open: true,
            auto_save: true,
        }
    }
}

impl EventWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.draft.set_public(is_public);
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Copies a canned prompt into the prompt box. Out-of-range indexes are ignored.
    pub fn use_quick_prompt(&mut self, index: usize) {
        if let Some(prompt) = QUICK_PROMPTS.get(index) {
            self.prompt = (*prompt).to_string();
        }
    }

    pub fn validation(&self) -> ValidationReport {
        validation::evaluate(&self.draft)
    }

    pub fn toggle_validation(&mut self) {
        self.show_validation = !self.show_validation;
    }

    pub fn save_version(&mut self, label: &str, at: Timestamp) {
        self.versions.save(label, &self.draft.document_content, at);
    }

    /// Replaces the document content with the stored snapshot. Other draft
    /// fields and the version list are left untouched.
    pub fn restore_version(&mut self, id: u64) -> Result<&DocumentVersion, WorkspaceError> {
        let version = self
            .versions
            .get(id)
            .ok_or(WorkspaceError::VersionNotFound(id))?;
        self.draft.document_content = version.content.clone();
        debug!("restored version {} ({})", version.id, version.label);
        Ok(version)
    }

    /// Whether generation of `kind` could start right now.
    pub fn can_generate(&self, kind: GenerationKind) -> bool {
        if self.generation.is_generating() {
            return false;
        }
        match kind {
            GenerationKind::Announcement => !self.prompt.trim().is_empty(),
            GenerationKind::ApprovalLetter => true,
        }
    }

    /// Moves Idle -> Generating and returns the request to hand to a
    /// generator, or `None` when generation cannot start.
    pub fn begin_generation(&mut self, kind: GenerationKind) -> Option<GenerationRequest> {
        if !self.can_generate(kind) {
            return None;
        }
        self.generation = GenerationState::Generating(kind);
        debug!("generation started: {:?}", kind);
        Some(GenerationRequest {
            kind,
            prompt: self.prompt.clone(),
            draft: self.draft.clone(),
        })
    }

    /// Applies generated text and returns to Idle.
    ///
    /// Announcements are appended to whatever the document holds now; approval
    /// letters replace the previous letter. Returns `false` when no generation
    /// of `kind` was in flight.
    pub fn finish_generation(&mut self, kind: GenerationKind, text: &str) -> bool {
        match self.generation {
            GenerationState::Generating(running) if running == kind => {}
            GenerationState::Generating(running) => {
                warn!("ignoring {:?} completion while {:?} is running", kind, running);
                return false;
            }
            GenerationState::Idle => {
                warn!("ignoring {:?} completion while idle", kind);
                return false;
            }
        }
        match kind {
            GenerationKind::Announcement => {
                self.draft.document_content = append_block(&self.draft.document_content, text);
            }
            GenerationKind::ApprovalLetter => {
                self.draft.approval_letter_content = text.to_string();
            }
        }
        self.generation = GenerationState::Idle;
        debug!("generation finished: {:?}", kind);
        true
    }

    pub fn submit(&mut self, at: Timestamp) -> SubmitOutcome {
        let report = self.validation();
        if !report.all_pass() {
            self.show_validation = true;
            let failing = report.failing_labels();
            debug!("submit blocked by {} failing rule(s)", failing.len());
            return SubmitOutcome::Blocked(failing);
        }
        self.save_version(SUBMITTED_LABEL, at);
        self.show_submit_options = true;
        SubmitOutcome::Submitted
    }

    pub fn dismiss_submit_options(&mut self) {
        self.show_submit_options = false;
    }

    /// Content of the newest saved version, used as the baseline for the
    /// unsaved-changes indicator and auto save.
    pub fn saved_content(&self) -> Option<&str> {
        self.versions.newest().map(|version| version.content.as_str())
    }

    /// True when the document differs from the newest saved version, or when
    /// nothing was saved yet and the document is not empty.
    pub fn has_unsaved_changes(&self) -> bool {
        match self.saved_content() {
            Some(saved) => saved != self.draft.document_content,
            None => !self.draft.document_content.is_empty(),
        }
    }
}
