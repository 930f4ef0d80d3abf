//! Headless driver: renders one frame through the interactive controller
//! and hands it to a file presenter.

pub mod controller;
pub mod ports;

pub use controller::SnapshotController;
