use common::config::DashboardConfig;
use common::controller::ViewStateController;
use common::store::ColumnStateStore;
use yew::NodeRef;

use crate::grid::AgGrid;
use crate::storage::DashboardStore;

pub struct DataGridComponent {
    pub controller: ViewStateController<AgGrid, DashboardStore>,
    /// Widget created but not yet ready.
    pub pending_grid: Option<AgGrid>,
    pub container_ref: NodeRef,
    pub mount_failed: bool,
}

impl DataGridComponent {
    pub fn new(config: &DashboardConfig) -> Self {
        let store = ColumnStateStore::new(
            DashboardStore::open(),
            config.column_state_key.clone(),
        );
        Self {
            controller: ViewStateController::new(store, config),
            pending_grid: None,
            container_ref: NodeRef::default(),
            mount_failed: false,
        }
    }
}
