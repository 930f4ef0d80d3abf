//! Port definitions for the interactive controller.
//!
//! Contains the trait the controller draws through; the platform side
//! (window surface, in-memory raster) lives in `presenters`.

pub mod draw_backend;
