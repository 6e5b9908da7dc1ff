//! Static column declarations of the employee grid.
//!
//! This list is the authority on which column identifiers exist. Persisted
//! column state is validated against it on restore, and the toolbar's
//! visibility menu is built from it.

use serde::Serialize;

/// How a column's values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    /// Checkbox column used for row selection. Has no header and no data.
    Selection,
    Text,
    Number,
    Currency,
    Date,
    Rating,
    Status,
    Skills,
}

/// Built-in grid filter attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnFilter {
    None,
    Text,
    Number,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDecl {
    pub id: &'static str,
    pub field: &'static str,
    pub header: &'static str,
    pub width: u32,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub filter: ColumnFilter,
    pub pinned_left: bool,
    pub lock_position: bool,
}

impl ColumnDecl {
    const fn data(
        id: &'static str,
        header: &'static str,
        width: u32,
        kind: ColumnKind,
        filter: ColumnFilter,
    ) -> Self {
        Self {
            id,
            field: id,
            header,
            width,
            kind,
            sortable: true,
            filter,
            pinned_left: false,
            lock_position: false,
        }
    }

    /// Whether the column may appear in the toolbar's visibility menu.
    pub fn has_header(&self) -> bool {
        !self.header.trim().is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self.kind,
            ColumnKind::Number | ColumnKind::Currency | ColumnKind::Rating
        )
    }
}

pub const SELECTION_COLUMN_ID: &str = "selection";

pub const COLUMNS: &[ColumnDecl] = &[
    ColumnDecl {
        id: SELECTION_COLUMN_ID,
        field: "id",
        header: "",
        width: 60,
        kind: ColumnKind::Selection,
        sortable: false,
        filter: ColumnFilter::None,
        pinned_left: true,
        lock_position: true,
    },
    ColumnDecl::data("id", "ID", 80, ColumnKind::Number, ColumnFilter::Number),
    ColumnDecl::data("firstName", "First Name", 140, ColumnKind::Text, ColumnFilter::Text),
    ColumnDecl::data("lastName", "Last Name", 140, ColumnKind::Text, ColumnFilter::Text),
    ColumnDecl::data("email", "Email", 260, ColumnKind::Text, ColumnFilter::Text),
    ColumnDecl::data("department", "Department", 150, ColumnKind::Text, ColumnFilter::Text),
    ColumnDecl::data("position", "Position", 200, ColumnKind::Text, ColumnFilter::Text),
    ColumnDecl::data("salary", "Salary", 130, ColumnKind::Currency, ColumnFilter::Number),
    ColumnDecl::data("hireDate", "Hire Date", 130, ColumnKind::Date, ColumnFilter::Date),
    ColumnDecl::data("age", "Age", 90, ColumnKind::Number, ColumnFilter::Number),
    ColumnDecl::data("location", "Location", 150, ColumnKind::Text, ColumnFilter::Text),
    ColumnDecl::data(
        "performanceRating",
        "Performance",
        130,
        ColumnKind::Rating,
        ColumnFilter::Number,
    ),
    ColumnDecl::data(
        "projectsCompleted",
        "Projects",
        110,
        ColumnKind::Number,
        ColumnFilter::Number,
    ),
    ColumnDecl::data("isActive", "Status", 120, ColumnKind::Status, ColumnFilter::Text),
    ColumnDecl {
        sortable: false,
        ..ColumnDecl::data("skills", "Skills", 300, ColumnKind::Skills, ColumnFilter::Text)
    },
    ColumnDecl::data("manager", "Manager", 160, ColumnKind::Text, ColumnFilter::Text),
];

pub fn find(col_id: &str) -> Option<&'static ColumnDecl> {
    COLUMNS.iter().find(|column| column.id == col_id)
}

pub fn is_declared(col_id: &str) -> bool {
    find(col_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn column_ids_are_unique() {
        let ids: HashSet<_> = COLUMNS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COLUMNS.len());
    }

    #[test]
    fn only_selection_column_lacks_a_header() {
        let headerless: Vec<_> = COLUMNS.iter().filter(|c| !c.has_header()).collect();
        assert_eq!(headerless.len(), 1);
        assert_eq!(headerless[0].id, SELECTION_COLUMN_ID);
    }

    #[test]
    fn every_data_field_exists_on_employee() {
        let sample = serde_json::to_value(crate::testing::employee(1)).unwrap();
        for column in COLUMNS {
            assert!(
                sample.get(column.field).is_some(),
                "column {} refers to missing field {}",
                column.id,
                column.field
            );
        }
    }
}
