//! Toolbar above the grid.
//!
//! Stateless apart from the open/closed column menu: every value it shows
//! comes from props and every interaction is reported through a callback.

use yew::prelude::*;

mod props;
mod view;

pub use props::ToolbarProps;

pub enum Msg {
    ToggleColumnMenu,
    CloseColumnMenu,
}

pub struct Toolbar {
    pub show_column_menu: bool,
}

impl Component for Toolbar {
    type Message = Msg;
    type Properties = ToolbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            show_column_menu: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleColumnMenu => self.show_column_menu = !self.show_column_menu,
            Msg::CloseColumnMenu => self.show_column_menu = false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
