use common::model::DataSourceMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// End of the loading state shown on first mount.
    InitialLoadFinished,
    /// User asked for another data source; enters the loading state.
    RequestSource(DataSourceMode),
    /// Timer fired; the pending swap runs now.
    CompleteSwitch,
}
