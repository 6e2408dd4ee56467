use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DocumentEditorProps {
    /// Current document text, owned by the parent.
    pub content: AttrValue,

    /// Receives the full text after every local edit, undo or redo.
    pub on_update: Callback<String>,

    #[prop_or(AttrValue::Static("Start writing..."))]
    pub placeholder: AttrValue,
}
