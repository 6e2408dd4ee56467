//! Update function for the Create Event workspace.
//!
//! Domain transitions are delegated to `EventWorkspace`; this layer adds the
//! asynchronous parts (generation, auto save timer) and user feedback.

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::event_draft::DraftField;
use common::workspace::{SubmitOutcome, AUTO_SAVE_LABEL, DRAFT_LABEL};

use crate::config::AUTO_SAVE_DELAY_MS;

use super::helpers::{now, show_toast};
use super::messages::Msg;
use super::state::CreateEventComponent;

pub fn update(
    component: &mut CreateEventComponent,
    ctx: &Context<CreateEventComponent>,
    msg: Msg,
) -> bool {
    let workspace = &mut component.workspace;
    match msg {
        Msg::SetField(field, value) => {
            workspace.set_field(field, value);
            true
        }
        Msg::SetPublic(is_public) => {
            workspace.set_public(is_public);
            true
        }
        Msg::DocumentEdited(text) => {
            if workspace.draft.document_content == text {
                return false;
            }
            workspace.set_field(DraftField::DocumentContent, text);
            schedule_auto_save(component, ctx);
            true
        }
        Msg::SetPrompt(prompt) => {
            workspace.set_prompt(prompt);
            true
        }
        Msg::UseQuickPrompt(index) => {
            workspace.use_quick_prompt(index);
            true
        }
        Msg::Generate(kind) => {
            let Some(request) = workspace.begin_generation(kind) else {
                return false;
            };
            match serde_json::to_string(&request) {
                Ok(json) => debug!("generation request: {json}"),
                Err(err) => warn!("could not serialize generation request: {err}"),
            }

            let pending = component.generator.generate(request);
            let link = ctx.link().clone();
            spawn_local(async move {
                let text = pending.await;
                link.send_message(Msg::GenerationFinished(kind, text));
            });
            true
        }
        Msg::GenerationFinished(kind, text) => {
            if !workspace.finish_generation(kind, &text) {
                return false;
            }
            schedule_auto_save(component, ctx);
            true
        }
        Msg::SetPreviewMode(mode) => {
            workspace.preview_mode = mode;
            true
        }
        Msg::ToggleVersions => {
            workspace.show_versions = !workspace.show_versions;
            true
        }
        Msg::ToggleAssistant => {
            workspace.assistant_open = !workspace.assistant_open;
            true
        }
        Msg::SetAutoSave(enabled) => {
            workspace.auto_save = enabled;
            if enabled {
                schedule_auto_save(component, ctx);
            } else {
                component.auto_save_timer = None;
            }
            true
        }
        Msg::AutoSaveDue => {
            component.auto_save_timer = None;
            if !workspace.auto_save || !workspace.has_unsaved_changes() {
                return false;
            }
            workspace.save_version(AUTO_SAVE_LABEL, now());
            true
        }
        Msg::SaveDraft => {
            workspace.save_version(DRAFT_LABEL, now());
            component.auto_save_timer = None;
            show_toast("Draft saved.");
            true
        }
        Msg::RestoreVersion(id) => match workspace.restore_version(id) {
            Ok(version) => {
                show_toast(&format!("Restored \"{}\" from {}.", version.label, version.timestamp));
                true
            }
            Err(err) => {
                warn!("restore failed: {err}");
                show_toast("That version is no longer available.");
                false
            }
        },
        Msg::ToggleValidation => {
            workspace.toggle_validation();
            true
        }
        Msg::Submit => {
            match workspace.submit(now()) {
                SubmitOutcome::Submitted => {
                    info!("event \"{}\" submitted for approval", workspace.draft.title);
                    component.auto_save_timer = None;
                }
                SubmitOutcome::Blocked(failing) => {
                    show_toast(&format!(
                        "Complete {} required field{} before submitting.",
                        failing.len(),
                        if failing.len() == 1 { "" } else { "s" }
                    ));
                }
            }
            true
        }
        Msg::DismissSubmitOptions => {
            workspace.dismiss_submit_options();
            true
        }
    }
}

/// Restarts the auto save countdown. Any pending timer is dropped, which
/// cancels it.
fn schedule_auto_save(component: &mut CreateEventComponent, ctx: &Context<CreateEventComponent>) {
    component.auto_save_timer = None;
    if !component.workspace.auto_save {
        return;
    }
    let link = ctx.link().clone();
    component.auto_save_timer = Some(Timeout::new(AUTO_SAVE_DELAY_MS, move || {
        link.send_message(Msg::AutoSaveDue);
    }));
}
