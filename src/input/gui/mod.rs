//! Windowed front end: winit for the window and its events, pixels for the
//! framebuffer, egui for the status overlay.

mod app;
pub mod commands;
