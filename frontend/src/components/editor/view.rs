//! View for the document editor: toolbar (with active states and the table
//! tools shown while the caret is in a table), Write/Preview tabs and status line.

use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::helpers::{is_style_active, word_count_label};
use super::messages::{EditorTab, Msg, Style, TableEdit};
use super::preview::render_preview_html;
use super::state::DocumentEditor;

pub fn view(editor: &DocumentEditor, ctx: &Context<DocumentEditor>) -> Html {
    let link = ctx.link();

    html! {
        <div class="document-editor">
            { build_toolbar(editor, link) }
            { build_tab_bar(editor, link) }
            {
                match editor.active_tab {
                    EditorTab::Write => build_write_tab(editor, ctx),
                    EditorTab::Preview => build_preview_tab(&editor.text),
                }
            }
            <div class="editor-status">{ word_count_label(&editor.text) }</div>
        </div>
    }
}

fn build_toolbar(editor: &DocumentEditor, link: &Scope<DocumentEditor>) -> Html {
    let disabled = editor.active_tab == EditorTab::Preview;
    let style_button = |icon: &'static str, label: &'static str, style: Style| {
        let active = !disabled && is_style_active(&editor.text, editor.cursor, style);
        icon_button(
            icon,
            label,
            link.callback(move |_| Msg::ApplyStyle(style)),
            disabled,
            active,
        )
    };
    let table_button = |icon: &'static str, label: &'static str, edit: TableEdit| {
        icon_button(icon, label, link.callback(move |_| Msg::EditTable(edit)), disabled, false)
    };
    let in_table = !disabled && is_style_active(&editor.text, editor.cursor, Style::Table);

    html! {
        <div class="icon-toolbar">
            { style_button("format_bold", "Bold", Style::Bold) }
            { style_button("format_italic", "Italic", Style::Italic) }
            { style_button("format_underlined", "Underline", Style::Underline) }
            { style_button("strikethrough_s", "Strikethrough", Style::Strikethrough) }
            <span class="toolbar-separator" />
            { style_button("looks_one", "Heading 1", Style::Heading(1)) }
            { style_button("looks_two", "Heading 2", Style::Heading(2)) }
            { style_button("looks_3", "Heading 3", Style::Heading(3)) }
            <span class="toolbar-separator" />
            { style_button("format_list_bulleted", "Bullet list", Style::BulletList) }
            { style_button("format_list_numbered", "Numbered list", Style::OrderedList) }
            { style_button("format_quote", "Quote", Style::Quote) }
            { style_button("horizontal_rule", "Divider", Style::HorizontalRule) }
            <span class="toolbar-separator" />
            { style_button("table_chart", "Table", Style::Table) }
            if in_table {
                <>
                    { table_button("view_column", "Add column after", TableEdit::AddColumnAfter) }
                    { table_button("table_rows", "Add row after", TableEdit::AddRowAfter) }
                    { table_button("delete", "Delete table", TableEdit::DeleteTable) }
                </>
            }
            <span class="toolbar-separator" />
            { icon_button("undo", "Undo", link.callback(|_| Msg::Undo), !editor.history.can_undo(), false) }
            { icon_button("redo", "Redo", link.callback(|_| Msg::Redo), !editor.history.can_redo(), false) }
        </div>
    }
}

fn icon_button(
    icon_name: &str,
    label: &str,
    on_click: Callback<MouseEvent>,
    disabled: bool,
    active: bool,
) -> Html {
    html! {
        <button
            type="button"
            class={classes!("icon-btn", active.then_some("active"))}
            title={label.to_string()}
            aria-pressed={active.to_string()}
            onclick={on_click}
            {disabled}
        >
            <i class="material-icons">{icon_name.to_string()}</i>
        </button>
    }
}

fn build_tab_bar(editor: &DocumentEditor, link: &Scope<DocumentEditor>) -> Html {
    let tab = |target: EditorTab, label: &str| {
        html! {
            <button
                type="button"
                class={classes!("tab-btn", (editor.active_tab == target).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(target))}
            >
                { label.to_string() }
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { tab(EditorTab::Write, "Write") }
            { tab(EditorTab::Preview, "Preview") }
        </div>
    }
}

fn build_write_tab(editor: &DocumentEditor, ctx: &Context<DocumentEditor>) -> Html {
    let link = ctx.link();
    html! {
        <textarea
            class="editor-textarea"
            ref={editor.textarea_ref.clone()}
            value={editor.text.clone()}
            placeholder={ctx.props().placeholder.clone()}
            spellcheck="true"
            oninput={link.callback(|e: InputEvent| {
                Msg::UpdateText(e.target_unchecked_into::<HtmlTextAreaElement>().value())
            })}
            onkeyup={link.callback(|_: KeyboardEvent| Msg::CaretMoved)}
            onclick={link.callback(|_: MouseEvent| Msg::CaretMoved)}
            onkeydown={link.batch_callback(|e: KeyboardEvent| {
                if !(e.ctrl_key() || e.meta_key()) {
                    return vec![];
                }
                match e.key().as_str() {
                    "z" => {
                        e.prevent_default();
                        vec![Msg::Undo]
                    }
                    "y" => {
                        e.prevent_default();
                        vec![Msg::Redo]
                    }
                    "b" => {
                        e.prevent_default();
                        vec![Msg::ApplyStyle(Style::Bold)]
                    }
                    "i" => {
                        e.prevent_default();
                        vec![Msg::ApplyStyle(Style::Italic)]
                    }
                    _ => vec![],
                }
            })}
            rows={12}
        />
    }
}

fn build_preview_tab(text: &str) -> Html {
    if text.trim().is_empty() {
        return html! {
            <div class="markdown-preview empty">{ "Nothing to preview yet." }</div>
        };
    }
    html! {
        <div class="markdown-preview">
            { Html::from_html_unchecked(AttrValue::from(render_preview_html(text))) }
        </div>
    }
}
