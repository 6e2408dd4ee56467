use yew::{html, Children, Component, Context, Html, Properties};
use yew::virtual_dom::AttrValue;

#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    /// Value for `grid-template-columns`, e.g. `"3fr 5fr 4fr"`.
    pub columns: AttrValue,
    #[prop_or(AttrValue::Static("1rem"))]
    pub gap: AttrValue,
    #[prop_or(AttrValue::Static("560px"))]
    pub min_height: AttrValue,
    pub children: Children,
}

/// Lays its children out as columns of a CSS grid.
pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid; \
             grid-template-columns: {}; \
             gap: {}; \
             min-height: {}; \
             align-items: stretch;",
            props.columns, props.gap, props.min_height
        );

        html! {
            <div class="workspace-grid" {style}>
                { for props.children.iter() }
            </div>
        }
    }
}
