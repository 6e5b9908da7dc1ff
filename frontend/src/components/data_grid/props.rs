use std::rc::Rc;

use common::config::DashboardConfig;
use common::model::{DataSourceMode, Employee};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct DataGridProps {
    /// Active collection. Compared by pointer: the dashboard hands over a
    /// new `Rc` whenever the data source is swapped.
    pub rows: Rc<Vec<Employee>>,
    pub mode: DataSourceMode,
    /// Shows the skeleton overlay and disables the source toggle.
    pub loading: bool,
    pub config: Rc<DashboardConfig>,
    /// Row counts for the source toggle's labels.
    pub sample_rows: usize,
    pub synthetic_rows: usize,
    pub on_source_change: Callback<DataSourceMode>,
}

impl PartialEq for DataGridProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rows, &other.rows)
            && self.mode == other.mode
            && self.loading == other.loading
            && Rc::ptr_eq(&self.config, &other.config)
            && self.sample_rows == other.sample_rows
            && self.synthetic_rows == other.synthetic_rows
            && self.on_source_change == other.on_source_change
    }
}
