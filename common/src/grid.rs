//! Contract of the external grid widget.
//!
//! The controller drives the widget only through [`GridApi`] and learns about
//! user interaction only through [`GridEvent`]. Rendering, sorting, filtering,
//! pagination and CSV serialization all stay inside the widget.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{ColumnState, Employee, PageSize};

/// Notifications raised by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridEvent {
    Ready,
    ColumnMoved,
    ColumnResized,
    ColumnVisible,
    SortChanged,
    SelectionChanged,
}

impl GridEvent {
    /// Events after which the full column layout has to be persisted.
    pub fn changes_layout(self) -> bool {
        matches!(
            self,
            GridEvent::ColumnMoved
                | GridEvent::ColumnResized
                | GridEvent::ColumnVisible
                | GridEvent::SortChanged
        )
    }
}

/// Live column as reported by the widget, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub col_id: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExportRequest {
    pub file_name: String,
    pub only_selected: bool,
}

impl CsvExportRequest {
    /// Export of every row (not only the selection), named after `date`.
    pub fn full_view(prefix: &str, date: NaiveDate) -> Self {
        Self {
            file_name: export_file_name(prefix, date),
            only_selected: false,
        }
    }
}

/// `<prefix>-employees-<YYYY-MM-DD>.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-employees-{}.csv", date.format("%Y-%m-%d"))
}

/// Imperative surface of the grid widget.
///
/// Methods take `&self`: the widget is a shared handle owned by the host page
/// and every call happens on the UI thread.
pub trait GridApi {
    fn column_state(&self) -> Vec<ColumnState>;
    /// Applies `state`; with `apply_order` the widget reorders its columns to
    /// match the sequence. Returns whether every entry found its column.
    fn apply_column_state(&self, state: &[ColumnState], apply_order: bool) -> bool;
    fn reset_column_state(&self);
    fn columns(&self) -> Vec<GridColumn>;
    fn selected_row_count(&self) -> usize;
    fn set_quick_filter(&self, text: &str);
    fn export_csv(&self, request: &CsvExportRequest);
    fn deselect_all(&self);
    fn set_page_size(&self, size: PageSize);
    fn set_column_visible(&self, col_id: &str, visible: bool);
    fn set_rows(&self, rows: &[Employee]);
}
