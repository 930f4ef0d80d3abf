//! Event-driven recompute controller.
//!
//! Turns a stream of [`InputEvent`]s into regenerated frames. The controller
//! owns the viewport, the active fractal parameters, the pointer damping
//! state and the off-screen frame buffer; drawing goes through the
//! [`DrawBackend`] port so the same controller serves the window and the
//! headless snapshot.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
mod hysteresis;
pub mod ports;

pub use controller::{ControllerStatus, InteractiveController};
pub use data::frame_status::FrameStatus;
pub use data::settings::ProgramSettings;
pub use errors::controller::ControllerError;
pub use events::input::InputEvent;
pub use ports::draw_backend::{BackendError, DrawBackend};
