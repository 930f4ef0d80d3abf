use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Squared escape radius.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time iteration over a fixed framing of the complex plane.
///
/// Pixel `(px, py)` maps to `px / (w / 2) - 1.5 + i (py / (h / 2) - 1)`.
/// The framing is offset rather than centred on the set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    half_width: f64,
    half_height: f64,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: u32) -> Self {
        Self {
            half_width: f64::from(viewport.width) / 2.0,
            half_height: f64::from(viewport.height) / 2.0,
            max_iterations,
        }
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: f64::from(pixel.x) / self.half_width - 1.5,
            imag: f64::from(pixel.y) / self.half_height - 1.0,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> u32 {
        escape_time(self.pixel_to_complex(pixel), self.max_iterations)
    }
}

/// Number of `z <- z² + c` steps taken from `z = 0` before `|z|² > 4`,
/// counting the step that crossed the radius, capped at `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        z = z.squared_plus(c);
        iterations += 1;
    }

    iterations
}
