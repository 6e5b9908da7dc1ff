//! End-to-end flows through the public API: a switcher feeding a controller
//! that drives a recording grid and persists into a memory store.

use std::cell::RefCell;
use std::rc::Rc;

use common::config::DashboardConfig;
use common::controller::ViewStateController;
use common::grid::{CsvExportRequest, GridApi, GridColumn, GridEvent};
use common::model::{ColumnState, DataSourceMode, Employee, PageSize};
use common::stats::DashboardStats;
use common::store::{ColumnStateStore, KeyValueStore, MemoryStore};
use common::switcher::DataSourceSwitcher;

#[derive(Clone, Default)]
struct RecordingGrid {
    columns: Rc<RefCell<Vec<ColumnState>>>,
    rows: Rc<RefCell<usize>>,
}

impl RecordingGrid {
    fn with_columns(ids: &[&str]) -> Self {
        let grid = RecordingGrid::default();
        *grid.columns.borrow_mut() = ids
            .iter()
            .map(|id| ColumnState::new(*id).with_width(100).with_hidden(false))
            .collect();
        grid
    }
}

impl GridApi for RecordingGrid {
    fn column_state(&self) -> Vec<ColumnState> {
        self.columns.borrow().clone()
    }

    fn apply_column_state(&self, state: &[ColumnState], _apply_order: bool) -> bool {
        *self.columns.borrow_mut() = state.to_vec();
        true
    }

    fn reset_column_state(&self) {}

    fn columns(&self) -> Vec<GridColumn> {
        self.columns
            .borrow()
            .iter()
            .map(|c| GridColumn {
                col_id: c.col_id.clone(),
                visible: c.is_visible(),
            })
            .collect()
    }

    fn selected_row_count(&self) -> usize {
        0
    }

    fn set_quick_filter(&self, _text: &str) {}

    fn export_csv(&self, _request: &CsvExportRequest) {}

    fn deselect_all(&self) {}

    fn set_page_size(&self, _size: PageSize) {}

    fn set_column_visible(&self, col_id: &str, visible: bool) {
        if let Some(column) = self
            .columns
            .borrow_mut()
            .iter_mut()
            .find(|c| c.col_id == col_id)
        {
            column.hide = Some(!visible);
        }
    }

    fn set_rows(&self, rows: &[Employee]) {
        *self.rows.borrow_mut() = rows.len();
    }
}

const IDS: &[&str] = &["selection", "id", "firstName", "lastName", "salary"];

#[test]
fn layout_survives_a_new_session() {
    let config = DashboardConfig::default();
    let backend = Rc::new(MemoryStore::new());

    let mut first = ViewStateController::new(
        ColumnStateStore::new(Rc::clone(&backend), &config.column_state_key),
        &config,
    );
    first.on_ready(RecordingGrid::with_columns(IDS));
    first.set_column_visible("salary", false);
    first.handle_event(GridEvent::ColumnVisible);
    drop(first);

    let saved = backend.get(&config.column_state_key).unwrap();
    assert!(saved.is_some());

    let mut second = ViewStateController::new(
        ColumnStateStore::new(Rc::clone(&backend), &config.column_state_key),
        &config,
    );
    second.on_ready(RecordingGrid::with_columns(IDS));

    let salary = second
        .columns()
        .iter()
        .find(|c| c.col_id == "salary")
        .unwrap();
    assert!(!salary.visible);
    assert_eq!(second.visible_column_count(), 3);
}

#[test]
fn switching_sources_feeds_the_grid() {
    let config = DashboardConfig {
        synthetic_rows: 1_000,
        ..DashboardConfig::default()
    };
    let mut switcher = DataSourceSwitcher::new(&config);
    let grid = RecordingGrid::with_columns(IDS);
    let mut controller = ViewStateController::new(
        ColumnStateStore::new(MemoryStore::new(), &config.column_state_key),
        &config,
    );
    controller.on_ready(grid.clone());
    controller.show_rows(switcher.rows());
    assert_eq!(*grid.rows.borrow(), 20);

    switcher.begin_switch(DataSourceMode::Synthetic);
    switcher.complete_switch();
    controller.show_rows(switcher.rows());

    assert_eq!(*grid.rows.borrow(), 1_000);
    let stats = DashboardStats::from_rows(switcher.rows());
    assert_eq!(stats.total, 1_000);
    assert!(stats.departments <= 6);
}
