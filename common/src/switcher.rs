//! Data-source switcher: swaps the active employee collection between the
//! embedded sample and a generated synthetic set.
//!
//! A swap is two steps so the host can show a loading state in between:
//! [`DataSourceSwitcher::begin_switch`] records the target and
//! [`DataSourceSwitcher::complete_switch`] does the (possibly heavy) work.
//! The collection is always replaced wholesale, never edited in place.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{error, info};

use crate::clock::{Clock, SystemClock};
use crate::config::DashboardConfig;
use crate::generator;
use crate::model::{DataSourceMode, Employee};
use crate::sample::sample_employees;

pub struct DataSourceSwitcher<C = SystemClock> {
    mode: DataSourceMode,
    rows: Rc<Vec<Employee>>,
    last_updated: DateTime<Utc>,
    pending: Option<DataSourceMode>,
    synthetic_rows: usize,
    clock: C,
}

impl DataSourceSwitcher<SystemClock> {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> DataSourceSwitcher<C> {
    /// Starts in [`DataSourceMode::Sample`].
    pub fn with_clock(config: &DashboardConfig, clock: C) -> Self {
        let last_updated = clock.now();
        Self {
            mode: DataSourceMode::Sample,
            rows: Rc::new(load_sample()),
            last_updated,
            pending: None,
            synthetic_rows: config.synthetic_rows,
            clock,
        }
    }

    pub fn mode(&self) -> DataSourceMode {
        self.mode
    }

    /// Shared handle to the active collection; a new `Rc` after every swap.
    pub fn rows(&self) -> &Rc<Vec<Employee>> {
        &self.rows
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<DataSourceMode> {
        self.pending
    }

    /// Row count a mode will produce, for labelling the toggle.
    pub fn rows_for(&self, mode: DataSourceMode) -> usize {
        match mode {
            DataSourceMode::Sample if self.mode == DataSourceMode::Sample => self.rows.len(),
            DataSourceMode::Sample => load_sample().len(),
            DataSourceMode::Synthetic => self.synthetic_rows,
        }
    }

    /// Enters the loading state. A later call replaces the target; nothing
    /// is queued.
    pub fn begin_switch(&mut self, target: DataSourceMode) {
        self.pending = Some(target);
    }

    /// Performs the swap recorded by [`Self::begin_switch`]. Returns `false`
    /// when no swap was pending.
    pub fn complete_switch(&mut self) -> bool {
        let Some(target) = self.pending.take() else {
            return false;
        };
        self.apply(target);
        true
    }

    pub fn switch_to(&mut self, target: DataSourceMode) {
        self.pending = None;
        self.apply(target);
    }

    fn apply(&mut self, target: DataSourceMode) {
        let rows = match target {
            DataSourceMode::Sample => load_sample(),
            DataSourceMode::Synthetic => generator::generate(self.synthetic_rows),
        };
        self.rows = Rc::new(rows);
        self.mode = target;
        self.last_updated = self.clock.now();
        info!(
            "switched data source to {:?} ({} rows)",
            self.mode,
            self.rows.len()
        );
    }
}

fn load_sample() -> Vec<Employee> {
    sample_employees().unwrap_or_else(|err| {
        error!("{err}");
        Vec::new()
    })
}
