use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Cards per row on wide screens; narrow screens stack them.
    pub columns: usize,
    pub children: Children,
}

/// Responsive row of equally sized cards.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "grid-template-columns: repeat(auto-fit, minmax(max(200px, calc(100% / {} - 16px)), 1fr));",
            props.columns.max(1)
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
