pub mod dashboard;
pub mod data_grid;
pub mod helpers;
pub mod layout;
pub mod toolbar;
