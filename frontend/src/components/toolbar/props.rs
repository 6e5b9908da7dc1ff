use common::model::{DataSourceMode, PageSize, ToolbarColumn};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    /// Current quick-filter text; the input is controlled by it.
    pub quick_filter: String,
    pub selected_rows: usize,
    /// Toggleable columns in display order.
    pub columns: Vec<ToolbarColumn>,
    pub page_size: PageSize,
    pub mode: DataSourceMode,
    pub loading: bool,
    pub sample_rows: usize,
    pub synthetic_rows: usize,

    pub on_quick_filter: Callback<String>,
    pub on_export: Callback<()>,
    pub on_clear_selection: Callback<()>,
    /// `(col_id, visible)`
    pub on_column_visibility: Callback<(String, bool)>,
    pub on_page_size: Callback<PageSize>,
    pub on_toggle_source: Callback<()>,
    pub on_reset_layout: Callback<()>,
}
