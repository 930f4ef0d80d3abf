use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished frame to a file.
pub trait FilePresenterPort {
    fn present(&self, frame: &PixelBuffer, filepath: &Path) -> io::Result<()>;
}
