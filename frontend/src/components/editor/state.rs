use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::history::EditHistory;

use super::helpers::utf16_to_byte_idx;
use super::messages::EditorTab;

pub struct DocumentEditor {
    /// Mirror of the parent's content, updated before `on_update` fires.
    pub text: String,

    pub history: EditHistory,

    pub active_tab: EditorTab,

    /// Byte offset of the caret in `text`, for toolbar active states.
    pub cursor: usize,

    pub textarea_ref: NodeRef,
}

impl DocumentEditor {
    pub fn new(text: String) -> Self {
        Self {
            history: EditHistory::new(text.clone()),
            text,
            active_tab: EditorTab::Write,
            cursor: 0,
            textarea_ref: NodeRef::default(),
        }
    }

    /// Current selection as byte offsets into `text`, or `None` when the
    /// textarea is not mounted.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let textarea = self.textarea_ref.cast::<HtmlTextAreaElement>()?;
        let start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;
        Some((
            utf16_to_byte_idx(&self.text, start),
            utf16_to_byte_idx(&self.text, end),
        ))
    }

    /// Grows the textarea to its `scrollHeight` so it never shows an inner scrollbar.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(html_elem) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = html_elem.style();
                let _ = style.set_property("height", "auto");
                let scroll_height = textarea.scroll_height();
                let _ = style.set_property("height", &format!("{}px", scroll_height));
            }
        }
    }
}
