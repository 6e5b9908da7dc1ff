//! Dashboard configuration.
//!
//! Every field has a default, so an empty object (or no config at all) yields
//! the stock dashboard. The frontend reads overrides from a JSON block embedded
//! in the host page.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::PageSize;

pub const DEFAULT_COLUMN_STATE_KEY: &str = "ag-grid-column-state";
pub const DEFAULT_EXPORT_PREFIX: &str = "factwise";
pub const DEFAULT_SYNTHETIC_ROWS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Storage key the column layout is persisted under.
    pub column_state_key: String,
    /// Leading part of exported CSV file names.
    pub export_prefix: String,
    /// Size of the generated dataset.
    pub synthetic_rows: usize,
    pub default_page_size: PageSize,
    /// Pause before a data-source swap runs, so the loading state can paint.
    pub switch_delay_ms: u32,
    /// Length of the loading state shown when the dashboard first mounts.
    pub initial_load_delay_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            column_state_key: DEFAULT_COLUMN_STATE_KEY.to_string(),
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
            synthetic_rows: DEFAULT_SYNTHETIC_ROWS,
            default_page_size: PageSize::default(),
            switch_delay_ms: 1500,
            initial_load_delay_ms: 1500,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        if config.synthetic_rows == 0 {
            return Err(ConfigError::EmptySyntheticSet);
        }
        Ok(config)
    }
}
