use common::grid::GridEvent;
use common::model::PageSize;

pub enum Msg {
    /// Notification from the widget.
    Grid(GridEvent),
    QuickFilter(String),
    Export,
    ClearSelection,
    SetColumnVisible { col_id: String, visible: bool },
    PageSize(PageSize),
    ResetLayout,
    ToggleSource,
    /// Re-render without touching state.
    Redraw,
}
