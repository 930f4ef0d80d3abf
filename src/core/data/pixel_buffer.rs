use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    AllocationFailed {
        bytes: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} pixel buffer",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "unable to allocate a pixel buffer of {} bytes", bytes)
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Off-screen RGB raster, three bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a black buffer covering `pixel_rect`.
    ///
    /// Allocation failure is reported instead of aborting so callers can
    /// surface it as a fatal diagnostic.
    pub fn new(pixel_rect: PixelRect) -> Result<Self, PixelBufferError> {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);
        let mut buffer = PixelBufferData::new();

        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| PixelBufferError::AllocationFailed { bytes: total_bytes })?;
        buffer.resize(total_bytes, 0);

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.pixel_rect.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let index = self.index_of(pixel);

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    /// Fills `rect`, clipped to the buffer. Empty or fully outside rects are no-ops.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        if rect.is_empty() {
            return;
        }

        let right = i64::from(rect.origin.x) + i64::from(rect.width);
        let bottom = i64::from(rect.origin.y) + i64::from(rect.height);

        let x0 = i64::from(rect.origin.x).max(0) as usize;
        let y0 = i64::from(rect.origin.y).max(0) as usize;
        let x1 = right.clamp(0, i64::from(self.pixel_rect.width())) as usize;
        let y1 = bottom.clamp(0, i64::from(self.pixel_rect.height())) as usize;

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.pixel_rect.width() as usize * BYTES_PER_PIXEL;

        for y in y0..y1 {
            let row = &mut self.buffer[y * stride + x0 * BYTES_PER_PIXEL..y * stride + x1 * BYTES_PER_PIXEL];
            for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        }
    }

    /// Copies `source` onto this buffer with both top-left corners aligned,
    /// clipping to the overlapping area.
    pub fn copy_from(&mut self, source: &PixelBuffer) {
        let width = self.pixel_rect.width().min(source.pixel_rect.width()) as usize;
        let height = self.pixel_rect.height().min(source.pixel_rect.height()) as usize;
        let dst_stride = self.pixel_rect.width() as usize * BYTES_PER_PIXEL;
        let src_stride = source.pixel_rect.width() as usize * BYTES_PER_PIXEL;
        let row_bytes = width * BYTES_PER_PIXEL;

        for y in 0..height {
            let dst_start = y * dst_stride;
            let src_start = y * src_stride;
            self.buffer[dst_start..dst_start + row_bytes]
                .copy_from_slice(&source.buffer[src_start..src_start + row_bytes]);
        }
    }
}
