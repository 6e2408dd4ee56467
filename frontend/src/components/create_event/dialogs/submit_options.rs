use yew::html::Scope;
use yew::prelude::*;

use common::workspace::EventWorkspace;

use crate::components::create_event::{CreateEventComponent, Msg};
use crate::tops_sheet::top_sheet::TopSheet;

/// Share & notify sheet shown after a successful submit. The channel buttons
/// have no backing service.
pub fn submit_options_dialog(
    workspace: &EventWorkspace,
    link: &Scope<CreateEventComponent>,
) -> Html {
    html! {
        <TopSheet
            open={workspace.show_submit_options}
            title="Event Submitted \u{2014} Share & Notify"
            on_close={link.callback(|_: ()| Msg::DismissSubmitOptions)}
        >
            <div class="submit-options">
                <span class="badge success">{ "Pending Approval" }</span>
                <div class="submit-grid">
                    <div>
                        <p class="section-label">{ "Notify" }</p>
                        <div class="button-row">
                            { channel_button("mail", "Send via Email") }
                            { channel_button("chat", "Send via WhatsApp") }
                        </div>
                    </div>
                    <div>
                        <p class="section-label">{ "Share Document" }</p>
                        <div class="button-row">
                            { channel_button("share", "Email") }
                            { channel_button("chat", "WhatsApp") }
                            { channel_button("download", "PDF") }
                        </div>
                    </div>
                </div>
                <button
                    type="button"
                    class="ghost-btn"
                    onclick={link.callback(|_| Msg::DismissSubmitOptions)}
                >
                    { "Dismiss" }
                </button>
            </div>
        </TopSheet>
    }
}

fn channel_button(icon: &'static str, label: &'static str) -> Html {
    html! {
        <button type="button" class="outline-btn small">
            <i class="material-icons">{ icon }</i>{ label }
        </button>
    }
}
