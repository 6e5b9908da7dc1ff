//! View-state controller of the employee grid.
//!
//! The controller is the only writer of the toolbar-facing [`ViewState`]. It
//! turns toolbar intents into [`GridApi`] calls and grid notifications
//! ([`GridEvent`]) into state updates and layout persistence.
//!
//! Reconciliation rules
//! - Start-up: the persisted layout is restored *before* the toolbar's column
//!   list is computed, then any filter text or page size chosen before the
//!   grid existed is pushed to it.
//! - Every layout event (move, resize, visibility, sort) reads the complete
//!   column state once and saves it once. Visibility intents are forwarded to
//!   the grid only; the grid's own visibility event is what persists them.
//! - Quick filter, page size and selection never touch persistence.

use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::columns;
use crate::config::DashboardConfig;
use crate::grid::{CsvExportRequest, GridApi, GridEvent};
use crate::model::{ColumnState, Employee, PageSize, ToolbarColumn, ViewState};
use crate::store::{ColumnStateStore, KeyValueStore};

pub struct ViewStateController<G, S, C = SystemClock> {
    grid: Option<G>,
    store: ColumnStateStore<S>,
    clock: C,
    export_prefix: String,
    state: ViewState,
    columns: Vec<ToolbarColumn>,
}

impl<G: GridApi, S: KeyValueStore> ViewStateController<G, S, SystemClock> {
    pub fn new(store: ColumnStateStore<S>, config: &DashboardConfig) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<G: GridApi, S: KeyValueStore, C: Clock> ViewStateController<G, S, C> {
    pub fn with_clock(store: ColumnStateStore<S>, config: &DashboardConfig, clock: C) -> Self {
        Self {
            grid: None,
            store,
            clock,
            export_prefix: config.export_prefix.clone(),
            state: ViewState {
                page_size: config.default_page_size,
                ..ViewState::default()
            },
            columns: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn quick_filter(&self) -> &str {
        &self.state.quick_filter
    }

    pub fn selected_rows(&self) -> usize {
        self.state.selected_rows
    }

    pub fn page_size(&self) -> PageSize {
        self.state.page_size
    }

    /// Columns offered in the toolbar's visibility menu, in display order.
    pub fn columns(&self) -> &[ToolbarColumn] {
        &self.columns
    }

    pub fn visible_column_count(&self) -> usize {
        self.columns.iter().filter(|column| column.visible).count()
    }

    pub fn is_ready(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Option<&G> {
        self.grid.as_ref()
    }

    /// Takes ownership of the grid once it signals readiness and brings it in
    /// line with the persisted layout and the pending toolbar state.
    pub fn on_ready(&mut self, grid: G) {
        self.restore_layout(&grid);
        self.grid = Some(grid);
        self.refresh_columns();

        if let Some(grid) = &self.grid {
            if !self.state.quick_filter.is_empty() {
                grid.set_quick_filter(&self.state.quick_filter);
            }
            grid.set_page_size(self.state.page_size);
        }
        self.on_selection_changed();
        debug!("grid ready with {} toolbar columns", self.columns.len());
    }

    /// Single entry point for grid notifications.
    pub fn handle_event(&mut self, event: GridEvent) {
        match event {
            GridEvent::Ready => debug!("ready notification without a grid handle ignored"),
            GridEvent::SelectionChanged => self.on_selection_changed(),
            layout_event => self.on_layout_changed(layout_event),
        }
    }

    fn on_layout_changed(&mut self, event: GridEvent) {
        let Some(grid) = &self.grid else {
            return;
        };
        let state = grid.column_state();
        self.store.save(&state);

        if event == GridEvent::ColumnVisible {
            self.refresh_columns();
        }
    }

    pub fn on_selection_changed(&mut self) {
        if let Some(grid) = &self.grid {
            self.state.selected_rows = grid.selected_row_count();
        }
    }

    pub fn set_quick_filter(&mut self, text: impl Into<String>) {
        self.state.quick_filter = text.into();
        if let Some(grid) = &self.grid {
            grid.set_quick_filter(&self.state.quick_filter);
        }
    }

    /// Asks the grid for a CSV of the whole current view. Returns the issued
    /// request, or `None` when the grid is not up yet.
    pub fn export_current_view(&self) -> Option<CsvExportRequest> {
        let grid = self.grid.as_ref()?;
        let today = self.clock.now().date_naive();
        let request = CsvExportRequest::full_view(&self.export_prefix, today);
        info!("exporting grid view to {}", request.file_name);
        grid.export_csv(&request);
        Some(request)
    }

    pub fn clear_selection(&mut self) {
        if let Some(grid) = &self.grid {
            grid.deselect_all();
        }
    }

    /// Forwards the change only. The grid answers with
    /// [`GridEvent::ColumnVisible`], which persists the layout.
    pub fn set_column_visible(&self, col_id: &str, visible: bool) {
        if !columns::is_declared(col_id) {
            debug!("visibility change for undeclared column `{col_id}` ignored");
            return;
        }
        if let Some(grid) = &self.grid {
            grid.set_column_visible(col_id, visible);
        }
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.state.page_size = size;
        if let Some(grid) = &self.grid {
            grid.set_page_size(size);
        }
    }

    /// Hands a replaced collection to the grid.
    pub fn show_rows(&mut self, rows: &[Employee]) {
        if let Some(grid) = &self.grid {
            grid.set_rows(rows);
        }
        self.on_selection_changed();
    }

    /// Forgets the persisted layout and returns the grid to its declared one.
    pub fn reset_layout(&mut self) {
        self.store.clear();
        if let Some(grid) = &self.grid {
            grid.reset_column_state();
        }
        self.refresh_columns();
        info!("column layout reset to defaults");
    }

    fn restore_layout(&self, grid: &G) {
        let Some(saved) = self.store.load() else {
            debug!("no persisted column layout");
            return;
        };

        let (known, unknown): (Vec<ColumnState>, Vec<ColumnState>) = saved
            .into_iter()
            .partition(|entry| columns::is_declared(&entry.col_id));
        for entry in &unknown {
            debug!("dropping persisted state of unknown column `{}`", entry.col_id);
        }
        if known.is_empty() {
            return;
        }

        let complete = grid.apply_column_state(&known, true);
        info!(
            "restored layout of {} columns (complete: {complete})",
            known.len()
        );
    }

    fn refresh_columns(&mut self) {
        let Some(grid) = &self.grid else {
            self.columns.clear();
            return;
        };
        self.columns = grid
            .columns()
            .into_iter()
            .filter_map(|column| {
                let decl = columns::find(&column.col_id)?;
                decl.has_header().then(|| ToolbarColumn {
                    col_id: column.col_id,
                    header: decl.header.to_string(),
                    visible: column.visible,
                })
            })
            .collect();
    }
}
