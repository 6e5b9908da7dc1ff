//! Binding to the AG Grid widget loaded by the host page.
//!
//! `options` turns the static column declarations into the widget's option
//! object and is plain data; `ag_grid` owns the live widget handle and
//! implements [`common::grid::GridApi`] on top of it.

mod ag_grid;
pub mod options;

pub use ag_grid::AgGrid;
