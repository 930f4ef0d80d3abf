use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

pub const MANDELBROT_MAX_ITERATIONS: u32 = 64;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotParams {
    pub max_iterations: u32,
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: MANDELBROT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotParams {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.min(MANDELBROT_MAX_ITERATIONS),
        }
    }

    /// Linear map of the pointer's x over the viewport width onto `0..=64`.
    #[must_use]
    pub fn from_pointer(viewport: Viewport, pointer: Point) -> Self {
        let width = f64::from(viewport.width.max(1));
        let iterations = (f64::from(MANDELBROT_MAX_ITERATIONS) * (f64::from(pointer.x) + 1.0) / width) as i64;

        Self {
            max_iterations: iterations.clamp(0, i64::from(MANDELBROT_MAX_ITERATIONS)) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_full_iteration_bound() {
        assert_eq!(MandelbrotParams::default().max_iterations, 64);
    }

    #[test]
    fn test_from_pointer_is_linear_in_x() {
        let viewport = Viewport::new(640, 400);

        assert_eq!(MandelbrotParams::from_pointer(viewport, Point::new(0, 0)).max_iterations, 0);
        assert_eq!(MandelbrotParams::from_pointer(viewport, Point::new(9, 0)).max_iterations, 1);
        assert_eq!(MandelbrotParams::from_pointer(viewport, Point::new(319, 0)).max_iterations, 32);
        assert_eq!(MandelbrotParams::from_pointer(viewport, Point::new(639, 0)).max_iterations, 64);
    }

    #[test]
    fn test_from_pointer_is_clamped() {
        let viewport = Viewport::new(640, 400);

        assert_eq!(MandelbrotParams::from_pointer(viewport, Point::new(5000, 0)).max_iterations, 64);
        assert_eq!(MandelbrotParams::from_pointer(viewport, Point::new(-200, 0)).max_iterations, 0);
    }

    #[test]
    fn test_new_caps_iterations() {
        assert_eq!(MandelbrotParams::new(500).max_iterations, 64);
        assert_eq!(MandelbrotParams::new(12).max_iterations, 12);
    }
}
