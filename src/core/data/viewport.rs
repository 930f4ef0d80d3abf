/// Smallest width or height, in pixels, for which a frame is generated.
pub const MIN_DRAWABLE_SIZE: u32 = 20;

/// Current drawable area of the window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions reach [`MIN_DRAWABLE_SIZE`].
    ///
    /// Generators recurse on fractions of the viewport; below this size the
    /// recursion degenerates, so the controller skips the frame instead.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.width >= MIN_DRAWABLE_SIZE && self.height >= MIN_DRAWABLE_SIZE
    }

    #[must_use]
    pub fn width_i32(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn height_i32(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_at_threshold_is_drawable() {
        assert!(Viewport::new(20, 20).is_drawable());
        assert!(Viewport::new(640, 400).is_drawable());
    }

    #[test]
    fn test_viewport_below_threshold_is_not_drawable() {
        assert!(!Viewport::new(19, 400).is_drawable());
        assert!(!Viewport::new(640, 19).is_drawable());
        assert!(!Viewport::new(10, 10).is_drawable());
        assert!(!Viewport::new(0, 0).is_drawable());
    }

    #[test]
    fn test_viewport_signed_dimensions_saturate() {
        let viewport = Viewport::new(u32::MAX, 7);

        assert_eq!(viewport.width_i32(), i32::MAX);
        assert_eq!(viewport.height_i32(), 7);
    }
}
