//! Input adapters: command-line arguments and, with the `gui` feature, the
//! window event loop.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
