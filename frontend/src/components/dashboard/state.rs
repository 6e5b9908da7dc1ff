use std::rc::Rc;

use common::config::DashboardConfig;
use common::stats::DashboardStats;
use common::switcher::DataSourceSwitcher;

pub struct DashboardComponent {
    pub config: Rc<DashboardConfig>,
    pub switcher: DataSourceSwitcher,
    /// Figures of `switcher.rows()`, recomputed after every swap.
    pub stats: DashboardStats,
    pub initial_loading: bool,
}

impl DashboardComponent {
    pub fn new(config: DashboardConfig) -> Self {
        let switcher = DataSourceSwitcher::new(&config);
        let stats = DashboardStats::from_rows(switcher.rows());
        Self {
            config: Rc::new(config),
            switcher,
            stats,
            initial_loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.initial_loading || self.switcher.is_loading()
    }
}
