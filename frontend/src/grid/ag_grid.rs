use common::columns::COLUMNS;
use common::format::format_value;
use common::grid::{CsvExportRequest, GridApi, GridColumn, GridEvent};
use common::model::{ColumnState, Employee, PageSize};
use js_sys::{Array, Reflect};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::Callback;

use super::options::{formatted_kind, grid_options};
use crate::storage::describe;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = agGrid, js_name = createGrid)]
    fn create_grid(container: &HtmlElement, options: &JsValue) -> Result<JsGridApi, JsValue>;

    type JsGridApi;

    #[wasm_bindgen(method, js_name = getColumnState)]
    fn get_column_state(this: &JsGridApi) -> JsValue;

    #[wasm_bindgen(method, js_name = applyColumnState)]
    fn apply_column_state(this: &JsGridApi, params: &JsValue) -> bool;

    #[wasm_bindgen(method, js_name = resetColumnState)]
    fn reset_column_state(this: &JsGridApi);

    #[wasm_bindgen(method, js_name = getColumns)]
    fn get_columns(this: &JsGridApi) -> Option<Array>;

    #[wasm_bindgen(method, js_name = getSelectedRows)]
    fn get_selected_rows(this: &JsGridApi) -> Array;

    #[wasm_bindgen(method, js_name = setGridOption)]
    fn set_grid_option(this: &JsGridApi, key: &str, value: &JsValue);

    #[wasm_bindgen(method, js_name = exportDataAsCsv)]
    fn export_data_as_csv(this: &JsGridApi, params: &JsValue);

    #[wasm_bindgen(method, js_name = deselectAll)]
    fn deselect_all(this: &JsGridApi);

    #[wasm_bindgen(method, js_name = setColumnsVisible)]
    fn set_columns_visible(this: &JsGridApi, keys: &Array, visible: bool);

    #[wasm_bindgen(method)]
    fn destroy(this: &JsGridApi);

    type JsColumn;

    #[wasm_bindgen(method, js_name = getColId)]
    fn get_col_id(this: &JsColumn) -> String;

    #[wasm_bindgen(method, js_name = isVisible)]
    fn is_visible(this: &JsColumn) -> bool;
}

/// Widget callbacks forwarded as [`GridEvent`]s.
const EVENT_HOOKS: [(&str, GridEvent); 6] = [
    ("onGridReady", GridEvent::Ready),
    ("onColumnMoved", GridEvent::ColumnMoved),
    ("onColumnResized", GridEvent::ColumnResized),
    ("onColumnVisible", GridEvent::ColumnVisible),
    ("onSortChanged", GridEvent::SortChanged),
    ("onSelectionChanged", GridEvent::SelectionChanged),
];

/// Live AG Grid instance.
///
/// The closures handed to the widget are owned here and dropped together
/// with the widget, which is destroyed when this value goes away.
pub struct AgGrid {
    api: JsGridApi,
    _listeners: Vec<Closure<dyn Fn(JsValue)>>,
    _formatters: Vec<Formatter>,
}

impl AgGrid {
    /// Creates the widget inside `container`. `on_event` receives every
    /// widget notification, [`GridEvent::Ready`] included.
    pub fn mount(
        container: &HtmlElement,
        rows: &[Employee],
        page_size: PageSize,
        on_event: Callback<GridEvent>,
    ) -> Result<Self, JsValue> {
        let options = to_js(&grid_options(page_size))?;
        let formatters = attach_formatters(&options)?;
        let listeners = attach_listeners(&options, &on_event)?;
        Reflect::set(&options, &JsValue::from_str("rowData"), &to_js(rows)?)?;

        let api = create_grid(container, &options)?;
        debug!("grid mounted with {} rows", rows.len());
        Ok(Self {
            api,
            _listeners: listeners,
            _formatters: formatters,
        })
    }
}

impl Drop for AgGrid {
    fn drop(&mut self) {
        self.api.destroy();
    }
}

impl GridApi for AgGrid {
    fn column_state(&self) -> Vec<ColumnState> {
        serde_wasm_bindgen::from_value(self.api.get_column_state()).unwrap_or_else(|err| {
            warn!("unreadable column state from grid: {err}");
            Vec::new()
        })
    }

    fn apply_column_state(&self, state: &[ColumnState], apply_order: bool) -> bool {
        let params = serde_json::json!({ "state": state, "applyOrder": apply_order });
        match to_js(&params) {
            Ok(params) => self.api.apply_column_state(&params),
            Err(err) => {
                warn!("column state not applied: {}", describe(&err));
                false
            }
        }
    }

    fn reset_column_state(&self) {
        self.api.reset_column_state();
    }

    fn columns(&self) -> Vec<GridColumn> {
        let Some(columns) = self.api.get_columns() else {
            return Vec::new();
        };
        columns
            .iter()
            .map(|column| {
                let column: JsColumn = column.unchecked_into();
                GridColumn {
                    col_id: column.get_col_id(),
                    visible: column.is_visible(),
                }
            })
            .collect()
    }

    fn selected_row_count(&self) -> usize {
        self.api.get_selected_rows().length() as usize
    }

    fn set_quick_filter(&self, text: &str) {
        self.api
            .set_grid_option("quickFilterText", &JsValue::from_str(text));
    }

    fn export_csv(&self, request: &CsvExportRequest) {
        match to_js(request) {
            Ok(params) => self.api.export_data_as_csv(&params),
            Err(err) => warn!("csv export failed: {}", describe(&err)),
        }
    }

    fn deselect_all(&self) {
        self.api.deselect_all();
    }

    fn set_page_size(&self, size: PageSize) {
        self.api
            .set_grid_option("paginationPageSize", &JsValue::from(size.rows()));
    }

    fn set_column_visible(&self, col_id: &str, visible: bool) {
        let keys = Array::of1(&JsValue::from_str(col_id));
        self.api.set_columns_visible(&keys, visible);
    }

    fn set_rows(&self, rows: &[Employee]) {
        match to_js(rows) {
            Ok(rows) => self.api.set_grid_option("rowData", &rows),
            Err(err) => warn!("rows not handed to grid: {}", describe(&err)),
        }
    }
}

type Formatter = Closure<dyn Fn(JsValue) -> JsValue>;

fn attach_formatters(options: &JsValue) -> Result<Vec<Formatter>, JsValue> {
    let defs: Array = Reflect::get(options, &JsValue::from_str("columnDefs"))?.unchecked_into();
    let mut formatters = Vec::new();
    for (index, decl) in COLUMNS.iter().enumerate() {
        let Some(kind) = formatted_kind(decl) else {
            continue;
        };
        let formatter = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |params: JsValue| {
            let value =
                Reflect::get(&params, &JsValue::from_str("value")).unwrap_or(JsValue::NULL);
            JsValue::from_str(&format_value(kind, &js_to_json(value)))
        });
        Reflect::set(
            &defs.get(index as u32),
            &JsValue::from_str("valueFormatter"),
            formatter.as_ref(),
        )?;
        formatters.push(formatter);
    }
    Ok(formatters)
}

fn attach_listeners(
    options: &JsValue,
    on_event: &Callback<GridEvent>,
) -> Result<Vec<Closure<dyn Fn(JsValue)>>, JsValue> {
    EVENT_HOOKS
        .iter()
        .map(|&(hook, event)| {
            let on_event = on_event.clone();
            let listener = Closure::<dyn Fn(JsValue)>::new(move |params: JsValue| {
                if still_dragging(&params) {
                    return;
                }
                on_event.emit(event);
            });
            Reflect::set(options, &JsValue::from_str(hook), listener.as_ref())?;
            Ok(listener)
        })
        .collect()
}

/// Move and resize events fire on every drag step; only the last one
/// carries `finished: true`.
fn still_dragging(params: &JsValue) -> bool {
    Reflect::get(params, &JsValue::from_str("finished"))
        .map(|finished| finished == JsValue::FALSE)
        .unwrap_or(false)
}

/// Plain JS objects and arrays, the shape AG Grid expects; maps would
/// otherwise become ES `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn js_to_json(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).unwrap_or(Value::Null)
}
