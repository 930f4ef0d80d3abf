use crate::core::data::point::Point;

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height are signed so that generators can hand over whatever
/// their integer arithmetic produced; rasterisation treats anything not
/// strictly positive as empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
