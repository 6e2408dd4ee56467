//! Content generation port and the built-in template generator.
//!
//! The workspace never talks to a generation service directly: it hands a
//! [`GenerationRequest`] to a [`ContentGenerator`] and applies whatever text
//! comes back. [`TemplateGenerator`] fills fixed prose templates from the
//! draft snapshot carried by the request; a remote implementation can replace
//! it without touching the workspace or the view.

use futures_util::future::{self, FutureExt};
pub use futures_util::future::LocalBoxFuture;
use serde::Serialize;

use crate::model::event_draft::EventDraft;

/// Canned prompts offered by the assistant panel.
pub const QUICK_PROMPTS: [&str; 4] = [
    "Write a formal invitation email for the event",
    "Generate an official notice for the department",
    "Create a compelling event description",
    "Draft a sponsorship request letter",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationKind {
    /// Appended to the document content.
    Announcement,
    /// Replaces the approval letter.
    ApprovalLetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating(GenerationKind),
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationState::Generating(_))
    }
}

/// What a generator is asked to produce, with the draft as it was when the
/// user invoked generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub prompt: String,
    pub draft: EventDraft,
}

/// Produces text for a [`GenerationRequest`].
///
/// Implementations always resolve to text; the workspace has no failure
/// state for generation.
pub trait ContentGenerator {
    fn generate(&self, request: GenerationRequest) -> LocalBoxFuture<'static, String>;
}

/// Resolves immediately with the filled-in template for the request kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl ContentGenerator for TemplateGenerator {
    fn generate(&self, request: GenerationRequest) -> LocalBoxFuture<'static, String> {
        future::ready(render(&request)).boxed_local()
    }
}

pub fn render(request: &GenerationRequest) -> String {
    match request.kind {
        GenerationKind::Announcement => render_announcement(&request.draft),
        GenerationKind::ApprovalLetter => render_approval_letter(&request.draft),
    }
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

pub fn render_announcement(draft: &EventDraft) -> String {
    format!(
        "Dear Students and Faculty,\n\n\
         We are pleased to announce \"{title}\" organized by {club}.\n\n\
         This event will be held at {venue} from {start} to {end}.\n\n\
         We cordially invite all interested participants to register and join us \
         for what promises to be an enriching experience.\n\n\
         Please find the detailed schedule and registration information below.\n\n\
         Warm regards,\n\
         The Organizing Committee",
        title = or(&draft.title, "Untitled Event"),
        club = or(&draft.club, "the organizing committee"),
        venue = or(&draft.venue, "the campus venue"),
        start = or(&draft.start_date, "TBD"),
        end = or(&draft.end_date, "TBD"),
    )
}

pub fn render_approval_letter(draft: &EventDraft) -> String {
    let title = or(&draft.title, "Untitled Event");
    let club_line = if draft.club.is_empty() {
        String::new()
    } else {
        format!("{}\n", draft.club)
    };
    let category_clause = if draft.category.is_empty() {
        String::new()
    } else {
        format!(" under the {} category", draft.category)
    };
    let scope = if draft.is_public {
        "Public (All Departments)"
    } else {
        "Department Only"
    };

    format!(
        "To,\n\
         The Dean / Head of Department\n\
         {club_line}University Campus\n\n\
         Subject: Request for Approval \u{2014} {title}\n\n\
         Respected Sir/Madam,\n\n\
         I am writing to formally request approval to organize \"{title}\"{category_clause}.\n\n\
         Event Details:\n\
         \u{2022} Venue: {venue}\n\
         \u{2022} Date: {start} to {end}\n\
         \u{2022} Mode: {mode}\n\
         \u{2022} Time: {time}\n\
         \u{2022} Expected Participants: {participants}\n\
         \u{2022} Scope: {scope}\n\n\
         We assure you that all necessary arrangements will be made and the event \
         will be conducted in adherence to university guidelines.\n\n\
         Kindly grant your approval at the earliest.\n\n\
         Thank you.\n\n\
         Yours sincerely,\n\
         Event Organizer",
        venue = or(&draft.venue, "TBD"),
        start = or(&draft.start_date, "TBD"),
        end = or(&draft.end_date, "TBD"),
        mode = or(&draft.mode, "TBD"),
        time = or(&draft.time, "TBD"),
        participants = or(&draft.team_size, "Open"),
    )
}

/// Adds `block` after `existing`, separated by a blank line.
pub fn append_block(existing: &str, block: &str) -> String {
    if existing.is_empty() {
        block.to_string()
    } else {
        format!("{existing}\n\n{block}")
    }
}
