use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PageSizeError;

/// Rows shown per grid page. Only the sizes offered by the toolbar exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Ten,
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn rows(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.rows() == value)
            .ok_or(PageSizeError(value))
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.rows()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// Toolbar-facing state owned by the view-state controller.
///
/// None of it is persisted. `selected_rows` is only ever written from the
/// grid's live selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub quick_filter: String,
    pub selected_rows: usize,
    pub page_size: PageSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_accepts_only_offered_sizes() {
        assert_eq!(PageSize::try_from(50), Ok(PageSize::Fifty));
        assert_eq!(PageSize::try_from(25), Err(PageSizeError(25)));
        assert_eq!(PageSize::try_from(0), Err(PageSizeError(0)));
    }

    #[test]
    fn page_size_serializes_as_row_count() {
        let json = serde_json::to_string(&PageSize::Hundred).unwrap();
        assert_eq!(json, "100");
        let parsed: PageSize = serde_json::from_str("10").unwrap();
        assert_eq!(parsed, PageSize::Ten);
        assert!(serde_json::from_str::<PageSize>("15").is_err());
    }
}
