//! Document editor: a markdown textarea with a formatting toolbar, undo/redo
//! history and a rendered preview tab.
//!
//! The editor is controlled: the parent owns the document text and passes it
//! in through `content`; every local edit is reported through `on_update`.
//! Text that changes from outside (generation, version restore) is recorded in
//! the undo history so it can be reverted like a typed edit.

use yew::prelude::*;

mod helpers;
mod messages;
mod preview;
mod props;
mod state;
mod update;
mod view;

use messages::{EditorTab, Msg};
use props::DocumentEditorProps;
pub use state::DocumentEditor;

impl Component for DocumentEditor {
    type Message = Msg;
    type Properties = DocumentEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        DocumentEditor::new(ctx.props().content.to_string())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let content = ctx.props().content.as_str();
        if content != self.text {
            self.text = content.to_string();
            self.history.record(content);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.active_tab == EditorTab::Write {
            self.resize_textarea();
        }
    }
}
