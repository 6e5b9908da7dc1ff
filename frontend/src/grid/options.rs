use common::columns::{ColumnDecl, ColumnFilter, ColumnKind, COLUMNS};
use common::model::PageSize;
use serde_json::{json, Map, Value};

/// Columns whose cells are rendered through `common::format`.
pub fn formatted_kind(decl: &ColumnDecl) -> Option<ColumnKind> {
    match decl.kind {
        ColumnKind::Currency
        | ColumnKind::Date
        | ColumnKind::Rating
        | ColumnKind::Status
        | ColumnKind::Skills => Some(decl.kind),
        _ => None,
    }
}

fn filter_name(filter: ColumnFilter) -> Value {
    match filter {
        ColumnFilter::None => Value::Bool(false),
        ColumnFilter::Text => json!("agTextColumnFilter"),
        ColumnFilter::Number => json!("agNumberColumnFilter"),
        ColumnFilter::Date => json!("agDateColumnFilter"),
    }
}

pub fn column_def(decl: &ColumnDecl) -> Value {
    let mut def = Map::new();
    def.insert("colId".into(), json!(decl.id));
    def.insert("headerName".into(), json!(decl.header));
    def.insert("width".into(), json!(decl.width));
    def.insert("sortable".into(), json!(decl.sortable));
    def.insert("filter".into(), filter_name(decl.filter));

    if decl.kind == ColumnKind::Selection {
        def.insert("checkboxSelection".into(), json!(true));
        def.insert("headerCheckboxSelection".into(), json!(true));
        def.insert("resizable".into(), json!(false));
        def.insert("suppressHeaderMenuButton".into(), json!(true));
    } else {
        def.insert("field".into(), json!(decl.field));
    }
    if decl.pinned_left {
        def.insert("pinned".into(), json!("left"));
    }
    if decl.lock_position {
        def.insert("lockPosition".into(), json!("left"));
    }
    if decl.is_numeric() {
        def.insert("type".into(), json!("numericColumn"));
    }
    if decl.kind == ColumnKind::Status {
        def.insert("cellClass".into(), json!("cell-status"));
    }
    if decl.kind == ColumnKind::Skills {
        def.insert("tooltipField".into(), json!(decl.field));
    }
    Value::Object(def)
}

pub fn column_defs() -> Vec<Value> {
    COLUMNS.iter().map(column_def).collect()
}

/// Option object handed to `agGrid.createGrid`, without row data and callbacks.
pub fn grid_options(page_size: PageSize) -> Value {
    json!({
        "columnDefs": column_defs(),
        "defaultColDef": {
            "resizable": true,
            "sortable": true,
            "filter": true,
            "minWidth": 60,
        },
        "rowSelection": "multiple",
        "suppressRowClickSelection": true,
        "pagination": true,
        "paginationPageSize": page_size.rows(),
        "paginationPageSizeSelector": false,
        "animateRows": true,
        "enableCellTextSelection": true,
        "maintainColumnOrder": true,
        "tooltipShowDelay": 300,
        "overlayNoRowsTemplate": "<span class=\"grid-empty\">No employees to show</span>",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::columns::{find, SELECTION_COLUMN_ID};

    fn def_for(col_id: &str) -> Value {
        column_def(find(col_id).unwrap())
    }

    #[test]
    fn every_declared_column_gets_a_definition_in_order() {
        let ids: Vec<String> = column_defs()
            .iter()
            .map(|def| def["colId"].as_str().unwrap().to_string())
            .collect();
        let declared: Vec<&str> = COLUMNS.iter().map(|decl| decl.id).collect();
        assert_eq!(ids, declared);
    }

    #[test]
    fn selection_column_is_a_pinned_checkbox_without_data() {
        let def = def_for(SELECTION_COLUMN_ID);
        assert_eq!(def["checkboxSelection"], json!(true));
        assert_eq!(def["headerCheckboxSelection"], json!(true));
        assert_eq!(def["pinned"], json!("left"));
        assert_eq!(def["filter"], json!(false));
        assert!(def.get("field").is_none());
    }

    #[test]
    fn numeric_columns_are_right_aligned_with_number_filters() {
        let salary = def_for("salary");
        assert_eq!(salary["type"], json!("numericColumn"));
        assert_eq!(salary["filter"], json!("agNumberColumnFilter"));
        assert!(def_for("email").get("type").is_none());
        assert_eq!(def_for("hireDate")["filter"], json!("agDateColumnFilter"));
    }

    #[test]
    fn skills_are_not_sortable() {
        assert_eq!(def_for("skills")["sortable"], json!(false));
    }

    #[test]
    fn only_presentation_kinds_get_formatters() {
        assert_eq!(
            formatted_kind(find("salary").unwrap()),
            Some(ColumnKind::Currency)
        );
        assert_eq!(formatted_kind(find("firstName").unwrap()), None);
        assert_eq!(formatted_kind(find(SELECTION_COLUMN_ID).unwrap()), None);
    }

    #[test]
    fn options_carry_the_page_size() {
        let options = grid_options(PageSize::Fifty);
        assert_eq!(options["paginationPageSize"], json!(50));
        assert_eq!(options["pagination"], json!(true));
        assert_eq!(options["rowSelection"], json!("multiple"));
    }
}
