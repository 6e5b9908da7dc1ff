use serde::{Deserialize, Serialize};

/// Which employee collection the dashboard is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataSourceMode {
    /// The small curated dataset embedded in the binary.
    #[default]
    Sample,
    /// A large generated dataset used to exercise the grid at scale.
    Synthetic,
}

impl DataSourceMode {
    pub fn toggled(self) -> Self {
        match self {
            DataSourceMode::Sample => DataSourceMode::Synthetic,
            DataSourceMode::Synthetic => DataSourceMode::Sample,
        }
    }

    pub fn is_synthetic(self) -> bool {
        matches!(self, DataSourceMode::Synthetic)
    }

    pub fn label(self) -> &'static str {
        match self {
            DataSourceMode::Sample => "Sample Data",
            DataSourceMode::Synthetic => "Performance Mode",
        }
    }
}
