use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted layout of one grid column.
///
/// Only the identifier and the visibility flag are typed. Everything else the
/// grid reports (`width`, `pinned`, `sort`, `sortIndex`, `flex`, ...) is kept
/// in `layout` and written back exactly as it was read, so a newer grid
/// version adding keys does not lose them on a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnState {
    pub col_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(flatten)]
    pub layout: Map<String, Value>,
}

impl ColumnState {
    pub fn new(col_id: impl Into<String>) -> Self {
        Self {
            col_id: col_id.into(),
            hide: None,
            layout: Map::new(),
        }
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hide = Some(hidden);
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.layout.insert("width".to_string(), Value::from(width));
        self
    }

    pub fn is_visible(&self) -> bool {
        !self.hide.unwrap_or(false)
    }

    pub fn width(&self) -> Option<f64> {
        self.layout.get("width").and_then(Value::as_f64)
    }
}

/// Entry of the toolbar's column-visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarColumn {
    pub col_id: String,
    pub header: String,
    pub visible: bool,
}
