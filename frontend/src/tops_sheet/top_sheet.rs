use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Delay before toggling the `show` class so the CSS slide-in transition runs.
const TRANSITION_DELAY_MS: u32 = 50;

/// A sheet that slides down from the top of the viewport.
pub struct TopSheet {
    /// DOM id of the title element, referenced by `aria-labelledby`.
    pub title_id: String,
    pub node_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let on_close = props.on_close.reform(|_: MouseEvent| ());
        html! {
            <div class="top-sheet" role="dialog" aria-labelledby={self.title_id.clone()} ref={self.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h3 id={self.title_id.clone()}>{ props.title.clone() }</h3>
                    <button type="button" class="icon-btn" title="Close" onclick={on_close}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
                { props.children.clone() }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if ctx.props().open {
            show_top_sheet(&self.node_ref);
        }
    }
}

pub fn show_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::Element>() {
        Timeout::new(TRANSITION_DELAY_MS, move || {
            top_sheet.class_list().add_1("show").ok();
        })
        .forget();
    }
}
