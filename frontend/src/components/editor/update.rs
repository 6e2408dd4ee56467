//! Elm-style update for the document editor. Every path that changes the text
//! records it in the history and reports it to the parent.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::helpers::{apply_style, byte_to_utf16_idx, edit_table, Insertion};
use super::messages::Msg;
use super::state::DocumentEditor;

pub fn update(editor: &mut DocumentEditor, ctx: &Context<DocumentEditor>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            editor.active_tab = tab;
            true
        }
        Msg::UpdateText(new_text) => {
            if editor.text != new_text {
                editor.history.record(&new_text);
                commit(editor, ctx, new_text);
            }
            true
        }
        Msg::Undo => {
            if let Some(snapshot) = editor.history.undo() {
                let snapshot = snapshot.to_string();
                commit(editor, ctx, snapshot);
            }
            true
        }
        Msg::Redo => {
            if let Some(snapshot) = editor.history.redo() {
                let snapshot = snapshot.to_string();
                commit(editor, ctx, snapshot);
            }
            true
        }
        Msg::ApplyStyle(style) => {
            let Some((start, end)) = editor.selection() else {
                return false;
            };
            let insertion = apply_style(&editor.text, start, end, style);
            apply_insertion(editor, ctx, insertion);
            true
        }
        Msg::EditTable(edit) => {
            let Some((start, _)) = editor.selection() else {
                return false;
            };
            match edit_table(&editor.text, start, edit) {
                Some(insertion) => {
                    apply_insertion(editor, ctx, insertion);
                    true
                }
                None => false,
            }
        }
        Msg::CaretMoved => match editor.selection() {
            Some((start, _)) if start != editor.cursor => {
                editor.cursor = start;
                true
            }
            _ => false,
        },
    }
}

fn apply_insertion(editor: &mut DocumentEditor, ctx: &Context<DocumentEditor>, insertion: Insertion) {
    let select_start = byte_to_utf16_idx(&insertion.text, insertion.select.0);
    let select_end = byte_to_utf16_idx(&insertion.text, insertion.select.1);

    editor.history.record(&insertion.text);
    editor.cursor = insertion.select.0;
    commit(editor, ctx, insertion.text);

    // Selection is restored once the re-render has written the new value.
    let textarea_ref = editor.textarea_ref.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(10).await;
        if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
            textarea.set_selection_range(select_start, select_end).ok();
            textarea.focus().ok();
        }
    });
}

fn commit(editor: &mut DocumentEditor, ctx: &Context<DocumentEditor>, text: String) {
    editor.text = text.clone();
    ctx.props().on_update.emit(text);
}
