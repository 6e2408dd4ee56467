use crate::components::create_event::CreateEventComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <header class="brand-bar">
                    <i class="material-icons accent">{"auto_awesome"}</i>
                    <span class="brand">{"Aurora Hub"}</span>
                </header>
                <main class="page">
                    <div class="page-header">
                        <div>
                            <h1>{"Create Event"}</h1>
                            <p class="muted small">
                                {"AI-powered workspace to create and format your event."}
                            </p>
                        </div>
                        <span class="badge warning">
                            <i class="material-icons">{"schedule"}</i>{"Approval: Pending"}
                        </span>
                    </div>
                    <CreateEventComponent />
                </main>
            </div>
        }
    }
}
