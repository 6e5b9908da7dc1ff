//! Shared core of the employee dashboard.
//!
//! Everything in this crate is target-independent: the frontend compiles it to
//! `wasm32` and the test suite runs it natively. Browser-specific pieces (the
//! AG Grid binding and `localStorage`) live in the `frontend` crate and plug in
//! through the [`grid::GridApi`] and [`store::KeyValueStore`] traits.

pub mod clock;
pub mod columns;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod generator;
pub mod grid;
pub mod model;
pub mod sample;
pub mod stats;
pub mod store;
pub mod switcher;

#[cfg(test)]
pub(crate) mod testing;
