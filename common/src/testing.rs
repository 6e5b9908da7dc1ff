//! Test doubles shared by the unit test modules.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::clock::Clock;
use crate::columns::COLUMNS;
use crate::error::StoreError;
use crate::grid::{CsvExportRequest, GridApi, GridColumn};
use crate::model::{ColumnState, Employee, PageSize};
use crate::store::{KeyValueStore, MemoryStore};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn employee(id: u32) -> Employee {
    Employee {
        id,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: format!("john.doe{id}@company.com"),
        department: "Engineering".to_string(),
        position: "Engineer".to_string(),
        salary: 75_000,
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        age: 30,
        location: "New York".to_string(),
        performance_rating: 4.5,
        projects_completed: 10,
        is_active: true,
        skills: vec!["JavaScript".to_string(), "React".to_string()],
        manager: None,
    }
}

/// Memory store whose reads and writes can be switched to failing.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    set_calls: Cell<usize>,
}

impl FlakyStore {
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of attempted writes, failed ones included.
    pub fn set_calls(&self) -> usize {
        self.set_calls.get()
    }

    pub fn reset_counts(&self) {
        self.set_calls.set(0);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.get() {
            return Err(StoreError::Unavailable("storage disabled".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_calls.set(self.set_calls.get() + 1);
        if self.fail_writes.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

#[derive(Default)]
struct GridModel {
    columns: Vec<ColumnState>,
    applied: Vec<(Vec<ColumnState>, bool)>,
    selected: usize,
    quick_filter: Option<String>,
    page_size: Option<PageSize>,
    exports: Vec<CsvExportRequest>,
    visibility_calls: usize,
    rows: usize,
}

/// In-memory stand-in for the grid widget. Clones share one model, so a test
/// can keep a handle after giving one to the controller.
#[derive(Clone, Default)]
pub struct MockGrid {
    model: Rc<RefCell<GridModel>>,
}

impl MockGrid {
    /// Grid showing every declared column at its declared width.
    pub fn declared() -> Self {
        let grid = MockGrid::default();
        grid.model.borrow_mut().columns = declared_state();
        grid
    }

    pub fn applied(&self) -> Vec<(Vec<ColumnState>, bool)> {
        self.model.borrow().applied.clone()
    }

    pub fn column(&self, col_id: &str) -> Option<ColumnState> {
        self.model
            .borrow()
            .columns
            .iter()
            .find(|c| c.col_id == col_id)
            .cloned()
    }

    pub fn select(&self, rows: usize) {
        self.model.borrow_mut().selected = rows;
    }

    pub fn quick_filter(&self) -> Option<String> {
        self.model.borrow().quick_filter.clone()
    }

    pub fn page_size(&self) -> Option<PageSize> {
        self.model.borrow().page_size
    }

    pub fn exports(&self) -> Vec<CsvExportRequest> {
        self.model.borrow().exports.clone()
    }

    pub fn visibility_calls(&self) -> usize {
        self.model.borrow().visibility_calls
    }

    pub fn row_count(&self) -> usize {
        self.model.borrow().rows
    }
}

fn declared_state() -> Vec<ColumnState> {
    COLUMNS
        .iter()
        .map(|decl| {
            ColumnState::new(decl.id)
                .with_width(decl.width)
                .with_hidden(false)
        })
        .collect()
}

impl GridApi for MockGrid {
    fn column_state(&self) -> Vec<ColumnState> {
        self.model.borrow().columns.clone()
    }

    fn apply_column_state(&self, state: &[ColumnState], apply_order: bool) -> bool {
        let mut model = self.model.borrow_mut();
        model.applied.push((state.to_vec(), apply_order));

        let mut complete = true;
        for entry in state {
            match model.columns.iter_mut().find(|c| c.col_id == entry.col_id) {
                Some(column) => {
                    if entry.hide.is_some() {
                        column.hide = entry.hide;
                    }
                    for (key, value) in &entry.layout {
                        column.layout.insert(key.clone(), value.clone());
                    }
                }
                None => complete = false,
            }
        }

        if apply_order {
            let mut ordered: Vec<ColumnState> = Vec::with_capacity(model.columns.len());
            for entry in state {
                if let Some(column) = model.columns.iter().find(|c| c.col_id == entry.col_id) {
                    ordered.push(column.clone());
                }
            }
            for column in &model.columns {
                if !ordered.iter().any(|c| c.col_id == column.col_id) {
                    ordered.push(column.clone());
                }
            }
            model.columns = ordered;
        }
        complete
    }

    fn reset_column_state(&self) {
        self.model.borrow_mut().columns = declared_state();
    }

    fn columns(&self) -> Vec<GridColumn> {
        self.model
            .borrow()
            .columns
            .iter()
            .map(|c| GridColumn {
                col_id: c.col_id.clone(),
                visible: c.is_visible(),
            })
            .collect()
    }

    fn selected_row_count(&self) -> usize {
        self.model.borrow().selected
    }

    fn set_quick_filter(&self, text: &str) {
        self.model.borrow_mut().quick_filter = Some(text.to_string());
    }

    fn export_csv(&self, request: &CsvExportRequest) {
        self.model.borrow_mut().exports.push(request.clone());
    }

    fn deselect_all(&self) {
        self.model.borrow_mut().selected = 0;
    }

    fn set_page_size(&self, size: PageSize) {
        self.model.borrow_mut().page_size = Some(size);
    }

    fn set_column_visible(&self, col_id: &str, visible: bool) {
        let mut model = self.model.borrow_mut();
        model.visibility_calls += 1;
        if let Some(column) = model.columns.iter_mut().find(|c| c.col_id == col_id) {
            column.hide = Some(!visible);
        }
    }

    fn set_rows(&self, rows: &[Employee]) {
        let mut model = self.model.borrow_mut();
        model.rows = rows.len();
        model.selected = 0;
    }
}

/// Clock pinned to midday UTC of one date.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        FixedClock(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that moves one second forward on every reading.
pub struct SteppingClock(Cell<DateTime<Utc>>);

impl SteppingClock {
    pub fn starting(year: i32, month: u32, day: u32) -> Self {
        SteppingClock(Cell::new(
            Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap(),
        ))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.0.get();
        self.0.set(now + Duration::seconds(1));
        now
    }
}
