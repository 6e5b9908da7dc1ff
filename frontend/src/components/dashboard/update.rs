use log::debug;
use yew::prelude::*;

use super::messages::Msg;
use super::send_after;
use super::state::DashboardComponent;
use common::stats::DashboardStats;

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::InitialLoadFinished => {
            component.initial_loading = false;
            true
        }
        Msg::RequestSource(target) => {
            let already_pending = component.switcher.is_loading();
            component.switcher.begin_switch(target);
            if already_pending {
                debug!("source switch retargeted to {target:?}");
            } else {
                send_after(ctx, component.config.switch_delay_ms, Msg::CompleteSwitch);
            }
            true
        }
        Msg::CompleteSwitch => {
            if !component.switcher.complete_switch() {
                return false;
            }
            component.stats = DashboardStats::from_rows(component.switcher.rows());
            true
        }
    }
}
