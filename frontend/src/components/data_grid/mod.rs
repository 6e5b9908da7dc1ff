//! Employee grid panel: toolbar plus the AG Grid widget.
//!
//! Owns the [`ViewStateController`](common::controller::ViewStateController)
//! for the lifetime of the widget. The widget is created on first render,
//! once its container exists, and parked in `pending_grid` until it reports
//! ready; only then does the controller receive it and restore the saved
//! column layout.

use std::rc::Rc;

use common::grid::GridApi;
use log::error;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::components::helpers::show_toast;
use crate::grid::AgGrid;
use crate::storage::describe;
pub use messages::Msg;
pub use props::DataGridProps;
pub use state::DataGridComponent;

impl Component for DataGridComponent {
    type Message = Msg;
    type Properties = DataGridProps;

    fn create(ctx: &Context<Self>) -> Self {
        DataGridComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let rows = &ctx.props().rows;
        if !Rc::ptr_eq(rows, &old_props.rows) {
            match &self.pending_grid {
                Some(grid) => grid.set_rows(rows),
                None => self.controller.show_rows(rows),
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(container) = self.container_ref.cast::<web_sys::HtmlElement>() else {
            return;
        };

        let props = ctx.props();
        let on_event = ctx.link().callback(Msg::Grid);
        let page_size = props.config.default_page_size;
        match AgGrid::mount(&container, &props.rows, page_size, on_event) {
            Ok(grid) => self.pending_grid = Some(grid),
            Err(err) => {
                error!("grid could not be created: {}", describe(&err));
                self.mount_failed = true;
                show_toast("The data grid could not be loaded.");
                ctx.link().send_message(Msg::Redraw);
            }
        }
    }
}
