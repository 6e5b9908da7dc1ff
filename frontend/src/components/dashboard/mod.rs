//! Dashboard shell: header with the live indicator, headline statistics and
//! the employee grid.
//!
//! The component owns the [`DataSourceSwitcher`](common::switcher::DataSourceSwitcher)
//! and therefore the active employee collection. A source change is split
//! into two messages with a timer in between so the loading state reaches
//! the screen before the (possibly heavy) swap runs.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new(crate::config::load())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            send_after(ctx, self.config.initial_load_delay_ms, Msg::InitialLoadFinished);
        }
    }
}

/// Delivers `msg` to the component once `delay_ms` have passed.
pub(super) fn send_after(ctx: &Context<DashboardComponent>, delay_ms: u32, msg: Msg) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        link.send_message(msg);
    });
}
