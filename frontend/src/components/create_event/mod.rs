//! Create Event workspace: the event form, document editor, documents
//! repository, assistant panel and validation/submit flow.
//!
//! State transitions live in `common::workspace::EventWorkspace`; this module
//! wires them to Yew messages, timers and the DOM.

use yew::prelude::*;

mod dialogs;
mod generator;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CreateEventComponent;

impl Component for CreateEventComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CreateEventComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
