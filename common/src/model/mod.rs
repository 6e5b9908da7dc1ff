pub mod column;
pub mod datasource;
pub mod employee;
pub mod view_state;

pub use column::{ColumnState, ToolbarColumn};
pub use datasource::DataSourceMode;
pub use employee::Employee;
pub use view_state::{PageSize, ViewState};
