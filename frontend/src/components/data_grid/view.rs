use yew::prelude::*;

use super::messages::Msg;
use super::state::DataGridComponent;
use crate::components::helpers::skeleton;
use crate::components::toolbar::Toolbar;

pub fn view(component: &DataGridComponent, ctx: &Context<DataGridComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let controller = &component.controller;

    html! {
        <div class="grid-panel">
            <Toolbar
                quick_filter={controller.quick_filter().to_string()}
                selected_rows={controller.selected_rows()}
                columns={controller.columns().to_vec()}
                page_size={controller.page_size()}
                mode={props.mode}
                loading={props.loading}
                sample_rows={props.sample_rows}
                synthetic_rows={props.synthetic_rows}
                on_quick_filter={link.callback(Msg::QuickFilter)}
                on_export={link.callback(|_| Msg::Export)}
                on_clear_selection={link.callback(|_| Msg::ClearSelection)}
                on_column_visibility={link.callback(|(col_id, visible): (String, bool)| {
                    Msg::SetColumnVisible { col_id, visible }
                })}
                on_page_size={link.callback(Msg::PageSize)}
                on_toggle_source={link.callback(|_| Msg::ToggleSource)}
                on_reset_layout={link.callback(|_| Msg::ResetLayout)}
            />

            <div class="grid-frame">
                <div class="ag-theme-quartz grid-host" ref={component.container_ref.clone()}></div>
                if props.loading {
                    <div class="grid-overlay">
                        { for (0..8).map(|_| skeleton("skeleton-row")) }
                    </div>
                }
                if component.mount_failed {
                    <div class="grid-overlay grid-error">
                        { "The data grid could not be loaded. Check that AG Grid is available." }
                    </div>
                }
            </div>
        </div>
    }
}
