//! Update function of the grid panel.
//!
//! Toolbar intents go to the controller, which forwards them to the widget.
//! Layout persistence happens only when the widget reports the resulting
//! event, so an intent never writes to storage itself.

use common::grid::GridEvent;
use log::debug;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DataGridComponent;
use crate::components::helpers::show_toast;

pub fn update(
    component: &mut DataGridComponent,
    ctx: &Context<DataGridComponent>,
    msg: Msg,
) -> bool {
    let controller = &mut component.controller;
    match msg {
        Msg::Grid(GridEvent::Ready) => match component.pending_grid.take() {
            Some(grid) => {
                controller.on_ready(grid);
                true
            }
            None => {
                debug!("ready event without a pending grid");
                false
            }
        },
        Msg::Grid(event) => {
            controller.handle_event(event);
            // Sort and resize change nothing the toolbar shows.
            matches!(
                event,
                GridEvent::ColumnVisible | GridEvent::ColumnMoved | GridEvent::SelectionChanged
            )
        }
        Msg::QuickFilter(text) => {
            controller.set_quick_filter(text);
            true
        }
        Msg::Export => {
            if let Some(request) = controller.export_current_view() {
                show_toast(&format!("Exported {}", request.file_name));
            }
            false
        }
        Msg::ClearSelection => {
            controller.clear_selection();
            true
        }
        Msg::SetColumnVisible { col_id, visible } => {
            controller.set_column_visible(&col_id, visible);
            false
        }
        Msg::PageSize(size) => {
            controller.set_page_size(size);
            true
        }
        Msg::ResetLayout => {
            controller.reset_layout();
            show_toast("Column layout reset");
            true
        }
        Msg::ToggleSource => {
            let props = ctx.props();
            if !props.loading {
                props.on_source_change.emit(props.mode.toggled());
            }
            false
        }
        Msg::Redraw => true,
    }
}
