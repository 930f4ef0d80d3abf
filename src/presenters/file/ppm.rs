use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::controllers::snapshot::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM (P6), creating missing parent directories.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    /// Encodes `frame` as a P6 image onto `writer`.
    pub fn encode(frame: &PixelBuffer, writer: &mut impl Write) -> io::Result<()> {
        let pixel_rect = frame.pixel_rect();

        // P6: binary RGB, then width, height and the maximum channel value
        write!(writer, "P6\n{} {}\n255\n", pixel_rect.width(), pixel_rect.height())?;
        writer.write_all(frame.buffer())?;

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        Self::encode(frame, &mut writer)?;
        writer.flush()
    }
}
