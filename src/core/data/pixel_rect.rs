use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive and fit in i32: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Pixel area of a raster, anchored at the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0
            || height == 0
            || i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
        {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn from_viewport(viewport: Viewport) -> Result<Self, PixelRectError> {
        Self::new(viewport.width, viewport.height)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.width as i32 - 1,
            y: self.height as i32 - 1,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let bottom_right = self.bottom_right();

        point.x >= 0 && point.y >= 0 && point.x <= bottom_right.x && point.y <= bottom_right.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(121, 101).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
        assert_eq!(rect.bottom_right(), Point { x: 120, y: 100 });
    }

    #[test]
    fn test_pixel_rect_rejects_empty_sizes() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_pixel_rect_rejects_sizes_beyond_i32() {
        let too_wide = u32::MAX;

        assert!(PixelRect::new(too_wide, 1).is_err());
    }

    #[test]
    fn test_pixel_rect_from_viewport() {
        let rect = PixelRect::from_viewport(Viewport::new(640, 400)).unwrap();

        assert_eq!(rect.width(), 640);
        assert_eq!(rect.height(), 400);
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(100, 50).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 99, y: 49 }));
        assert!(!rect.contains_point(Point { x: 100, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: 50 }));
        assert!(!rect.contains_point(Point { x: -1, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: -1 }));
    }
}
