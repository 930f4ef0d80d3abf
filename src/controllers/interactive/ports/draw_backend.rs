use std::error::Error;
use std::fmt;

use crate::controllers::interactive::data::frame_status::FrameStatus;
use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use crate::core::data::viewport::Viewport;

/// A failure to acquire or use a drawing resource. Never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendError {
    Surface(String),
    Allocation(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(message) => write!(f, "drawing surface error: {}", message),
            Self::Allocation(message) => write!(f, "drawing surface allocation failed: {}", message),
        }
    }
}

impl Error for BackendError {}

/// Drawing primitives the controller needs from the platform.
pub trait DrawBackend {
    /// Adapts the drawing surface to a new drawable viewport.
    fn resize(&mut self, viewport: Viewport) -> Result<(), BackendError>;

    fn clear(&mut self, colour: Colour);

    fn draw_line(&mut self, from: Point, to: Point, colour: Colour);

    fn fill_rect(&mut self, rect: Rect, colour: Colour);

    /// Copies an off-screen buffer to the screen, top-left aligned.
    fn blit(&mut self, buffer: &PixelBuffer);

    /// Flushes the finished frame to the screen.
    fn present(&mut self, status: &FrameStatus) -> Result<(), BackendError>;

    fn execute(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Line { from, to, colour } => self.draw_line(from, to, colour),
            DrawCommand::FilledRect { rect, colour } => self.fill_rect(rect, colour),
        }
    }
}
