use std::error::Error;
use std::fmt;

use crate::controllers::interactive::ports::draw_backend::BackendError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;

/// Unrecoverable failures while producing a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    Backend(BackendError),
    FrameBuffer(PixelBufferError),
    FrameSize(PixelRectError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "backend error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
            Self::FrameSize(err) => write!(f, "frame size error: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::FrameBuffer(err) => Some(err),
            Self::FrameSize(err) => Some(err),
        }
    }
}

impl From<BackendError> for ControllerError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}

impl From<PixelBufferError> for ControllerError {
    fn from(err: PixelBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

impl From<PixelRectError> for ControllerError {
    fn from(err: PixelRectError) -> Self {
        Self::FrameSize(err)
    }
}
