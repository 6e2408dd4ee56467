//! View rendering for the Create Event workspace.
//!
//! Layout: a two-row info bar with the event fields, a three-column grid
//! (preview, editor with documents repository, assistant with validation)
//! and a footer with the Validate / Save / Submit actions.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::generation::{GenerationKind, GenerationState, QUICK_PROMPTS};
use common::model::event_draft::{option_label, DraftField, EventDraft, CATEGORIES, EVENT_MODES};
use common::workspace::{EventWorkspace, PreviewMode};

use super::dialogs::submit_options::submit_options_dialog;
use super::messages::Msg;
use super::state::CreateEventComponent;
use crate::components::editor::DocumentEditor;
use crate::workspace_grid::WorkspaceGrid;

pub fn view(component: &CreateEventComponent, ctx: &Context<CreateEventComponent>) -> Html {
    let link = ctx.link();
    let workspace = &component.workspace;

    html! {
        <div class="create-event">
            { build_info_bar(&workspace.draft, link) }
            <WorkspaceGrid columns="3fr 5fr 4fr">
                { build_preview_panel(workspace, link) }
                <div class="column">
                    { build_editor_panel(workspace, link) }
                    { build_versions_panel(workspace, link) }
                </div>
                <div class="panel column">
                    { build_assistant_panel(workspace, link) }
                    { build_validation_panel(workspace) }
                </div>
            </WorkspaceGrid>
            { build_footer(link) }
            { submit_options_dialog(workspace, link) }
        </div>
    }
}

fn build_info_bar(draft: &EventDraft, link: &Scope<CreateEventComponent>) -> Html {
    html! {
        <div class="info-bar">
            <div class="info-row four">
                { text_input(link, draft, DraftField::Title, "Event Title *", "text") }
                { text_input(link, draft, DraftField::Club, "Club Name (optional)", "text") }
                { select_input(link, draft, DraftField::Category, "Category *", &CATEGORIES) }
                { text_input(link, draft, DraftField::Venue, "Venue *", "text") }
            </div>
            <div class="info-row six">
                { text_input(link, draft, DraftField::StartDate, "Start Date", "date") }
                { text_input(link, draft, DraftField::EndDate, "End Date", "date") }
                { select_input(link, draft, DraftField::Mode, "Event Mode", &EVENT_MODES) }
                { text_input(link, draft, DraftField::TeamSize, "Team Size (optional)", "number") }
                { text_input(link, draft, DraftField::Time, "Event Time *", "time") }
                <label class="switch-field">
                    <input
                        type="checkbox"
                        checked={draft.is_public}
                        onchange={link.callback(|e: Event| {
                            Msg::SetPublic(e.target_unchecked_into::<HtmlInputElement>().checked())
                        })}
                    />
                    <span>{ if draft.is_public { "Public" } else { "Dept Only" } }</span>
                </label>
            </div>
            { text_input(link, draft, DraftField::GuestList, "Guest List \u{2014} comma separated (optional)", "text") }
        </div>
    }
}

fn text_input(
    link: &Scope<CreateEventComponent>,
    draft: &EventDraft,
    field: DraftField,
    placeholder: &'static str,
    input_type: &'static str,
) -> Html {
    html! {
        <input
            class="field"
            type={input_type}
            {placeholder}
            aria-label={placeholder}
            value={draft.get(field).to_string()}
            oninput={link.callback(move |e: InputEvent| {
                Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })}
        />
    }
}

fn select_input(
    link: &Scope<CreateEventComponent>,
    draft: &EventDraft,
    field: DraftField,
    placeholder: &'static str,
    options: &[(&'static str, &'static str)],
) -> Html {
    let current = draft.get(field);
    html! {
        <select
            class="field"
            aria-label={placeholder}
            onchange={link.callback(move |e: Event| {
                Msg::SetField(field, e.target_unchecked_into::<HtmlSelectElement>().value())
            })}
        >
            <option value="" disabled={true} selected={current.is_empty()}>{ placeholder }</option>
            {
                for options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={current == *value}>{ *label }</option>
                })
            }
        </select>
    }
}

fn build_preview_panel(workspace: &EventWorkspace, link: &Scope<CreateEventComponent>) -> Html {
    let mode_button = |mode: PreviewMode, label: &'static str| {
        html! {
            <button
                type="button"
                class={classes!("chip-btn", (workspace.preview_mode == mode).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetPreviewMode(mode))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="panel preview-panel">
            <div class="panel-header">
                <span class="section-label">
                    <i class="material-icons">{"visibility"}</i>{ "Preview" }
                </span>
                <div class="chip-group">
                    { mode_button(PreviewMode::Poster, "Poster") }
                    { mode_button(PreviewMode::Letter, "Letter") }
                </div>
            </div>
            {
                match workspace.preview_mode {
                    PreviewMode::Poster => poster_preview(&workspace.draft),
                    PreviewMode::Letter => letter_preview(&workspace.draft),
                }
            }
        </div>
    }
}

fn poster_preview(draft: &EventDraft) -> Html {
    let title = if draft.title.is_empty() { "Event Title" } else { draft.title.as_str() };
    let category = option_label(&CATEGORIES, &draft.category).unwrap_or(&draft.category);
    let mode = option_label(&EVENT_MODES, &draft.mode).unwrap_or(&draft.mode);
    let guests = draft.guests();

    html! {
        <div class="poster">
            <h2>{ title.to_string() }</h2>
            if !draft.club.is_empty() {
                <p class="muted">{ format!("By {}", draft.club) }</p>
            }
            if !category.is_empty() {
                <span class="badge">{ category.to_string() }</span>
            }
            <div class="poster-meta">
                if !draft.venue.is_empty() {
                    <span><i class="material-icons">{"place"}</i>{ draft.venue.clone() }</span>
                }
                if !draft.start_date.is_empty() {
                    <span><i class="material-icons">{"event"}</i>{ draft.start_date.clone() }</span>
                }
                if !mode.is_empty() {
                    <span><i class="material-icons">{"link"}</i>{ mode.to_string() }</span>
                }
            </div>
            if !guests.is_empty() {
                <p class="muted">{ format!("Guests: {}", guests.join(", ")) }</p>
            }
            <hr />
            <div class="pre-wrap">
                if draft.document_content.is_empty() {
                    <span class="muted italic">{ "Start writing to see preview..." }</span>
                } else {
                    { draft.document_content.clone() }
                }
            </div>
        </div>
    }
}

fn letter_preview(draft: &EventDraft) -> Html {
    html! {
        <div class="letter">
            <h2 class="small">{ "Official Approval Letter" }</h2>
            <hr />
            <div class="pre-wrap mono">
                if draft.approval_letter_content.is_empty() {
                    <span class="muted italic">
                        { "Generate an approval letter from the AI panel \u{2192}" }
                    </span>
                } else {
                    { draft.approval_letter_content.clone() }
                }
            </div>
        </div>
    }
}

fn build_editor_panel(workspace: &EventWorkspace, link: &Scope<CreateEventComponent>) -> Html {
    html! {
        <div class="panel editor-panel">
            <div class="panel-header">
                <span class="section-label">
                    { "Document Editor" }
                    if workspace.has_unsaved_changes() {
                        <span class="dirty-dot" title="Unsaved changes" />
                    }
                </span>
                <label class="switch-field small">
                    <span>{ "Auto Save" }</span>
                    <input
                        type="checkbox"
                        checked={workspace.auto_save}
                        onchange={link.callback(|e: Event| {
                            Msg::SetAutoSave(e.target_unchecked_into::<HtmlInputElement>().checked())
                        })}
                    />
                </label>
            </div>
            <DocumentEditor
                content={workspace.draft.document_content.clone()}
                on_update={link.callback(Msg::DocumentEdited)}
                placeholder="Start writing your event description, notice, or invitation here..."
            />
        </div>
    }
}

fn build_versions_panel(workspace: &EventWorkspace, link: &Scope<CreateEventComponent>) -> Html {
    let versions = workspace.versions.list();
    html! {
        <div class="panel">
            <button type="button" class="collapsible-trigger" onclick={link.callback(|_| Msg::ToggleVersions)}>
                <span class="section-label">{ format!("Documents Repository ({})", versions.len()) }</span>
                <i class="material-icons">
                    { if workspace.show_versions { "expand_less" } else { "expand_more" } }
                </i>
            </button>
            if workspace.show_versions {
                <div class="version-list">
                    if versions.is_empty() {
                        <p class="muted italic small">
                            { "No saved versions yet. Click \"Save as Draft\" to create one." }
                        </p>
                    } else {
                        { for versions.iter().map(|version| {
                            let id = version.id;
                            html! {
                                <div class="version-row" key={version.id.to_string()}>
                                    <div>
                                        <p class="version-label">{ version.label.clone() }</p>
                                        <p class="muted tiny">{ version.timestamp.clone() }</p>
                                    </div>
                                    <button
                                        type="button"
                                        class="ghost-btn"
                                        onclick={link.callback(move |_| Msg::RestoreVersion(id))}
                                    >
                                        <i class="material-icons">{"restore"}</i>{ "Restore" }
                                    </button>
                                </div>
                            }
                        }) }
                    }
                </div>
            }
        </div>
    }
}

fn build_assistant_panel(workspace: &EventWorkspace, link: &Scope<CreateEventComponent>) -> Html {
    let busy_with = |kind: GenerationKind| workspace.generation == GenerationState::Generating(kind);

    html! {
        <div class="assistant">
            <button type="button" class="collapsible-trigger" onclick={link.callback(|_| Msg::ToggleAssistant)}>
                <span class="section-label">
                    <i class="material-icons accent">{"auto_awesome"}</i>{ "AI Assistant" }
                </span>
                <i class="material-icons">
                    { if workspace.assistant_open { "expand_less" } else { "expand_more" } }
                </i>
            </button>
            if workspace.assistant_open {
                <div class="assistant-body">
                    <p class="muted small">{ "Quick prompts:" }</p>
                    { for QUICK_PROMPTS.iter().enumerate().map(|(index, prompt)| html! {
                        <button
                            type="button"
                            class="prompt-btn"
                            onclick={link.callback(move |_| Msg::UseQuickPrompt(index))}
                        >
                            { *prompt }
                        </button>
                    }) }
                    <textarea
                        class="prompt-input"
                        value={workspace.prompt.clone()}
                        placeholder="Describe what you want the AI to generate..."
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPrompt(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                    <div class="button-row">
                        <button
                            type="button"
                            class="primary-btn"
                            disabled={!workspace.can_generate(GenerationKind::Announcement)}
                            onclick={link.callback(|_| Msg::Generate(GenerationKind::Announcement))}
                        >
                            { generate_label(busy_with(GenerationKind::Announcement), "Generate") }
                        </button>
                        <button
                            type="button"
                            class="outline-btn"
                            disabled={!workspace.can_generate(GenerationKind::ApprovalLetter)}
                            onclick={link.callback(|_| Msg::Generate(GenerationKind::ApprovalLetter))}
                        >
                            { generate_label(busy_with(GenerationKind::ApprovalLetter), "Approval Letter") }
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

fn generate_label(busy: bool, idle_label: &'static str) -> Html {
    if busy {
        html! { <span class="with-icon"><span class="spinner" />{ "Generating..." }</span> }
    } else {
        html! { <span class="with-icon"><i class="material-icons">{"auto_awesome"}</i>{ idle_label }</span> }
    }
}

fn build_validation_panel(workspace: &EventWorkspace) -> Html {
    if !workspace.show_validation {
        return html! {};
    }
    let report = workspace.validation();
    html! {
        <div class="validation-panel">
            <span class="section-label">
                <i class="material-icons warning">{"warning"}</i>{ "Validation" }
            </span>
            { for report.results().iter().map(|result| html! {
                <div class={classes!("validation-row", (!result.pass).then_some("failing"))} key={result.key}>
                    <i class="material-icons">
                        { if result.pass { "check_circle" } else { "error" } }
                    </i>
                    <span>{ result.label }</span>
                </div>
            }) }
        </div>
    }
}

fn build_footer(link: &Scope<CreateEventComponent>) -> Html {
    html! {
        <div class="footer">
            <button type="button" class="outline-btn" onclick={link.callback(|_| Msg::ToggleValidation)}>
                <i class="material-icons">{"fact_check"}</i>{ "Validate" }
            </button>
            <div class="button-row">
                <button type="button" class="outline-btn" onclick={link.callback(|_| Msg::SaveDraft)}>
                    { "Save as Draft" }
                </button>
                <button type="button" class="primary-btn" onclick={link.callback(|_| Msg::Submit)}>
                    <i class="material-icons">{"send"}</i>{ "Submit Event" }
                </button>
            </div>
        </div>
    }
}
