//! Browser-side helpers for the workspace: clock readings and toasts.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::document_version::Timestamp;

use crate::config::TOAST_DURATION_MS;

/// Reads the client clock, formatted with the browser's default locale.
pub fn now() -> Timestamp {
    let date = js_sys::Date::new_0();
    let display: String = date
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into();
    Timestamp::new(date.get_time() as u64, display)
}

/// Shows a short-lived notification at the bottom of the page.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&html_toast).is_ok() {
        Timeout::new(TOAST_DURATION_MS, move || {
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        })
        .forget();
    }
}
