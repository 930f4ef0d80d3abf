use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::canopy::algorithm::generate_canopy;
use crate::core::fractals::carpet::algorithm::generate_carpet_for_viewport;
use crate::core::fractals::levy::algorithm::generate_levy_for_viewport;
use crate::core::fractals::mandelbrot::generator::generate_mandelbrot;

/// Regenerates the full command sequence of one frame.
///
/// Pure: identical inputs always give an identical sequence.
#[must_use]
pub fn generate_fractal(viewport: Viewport, params: &FractalParams) -> Vec<DrawCommand> {
    match params {
        FractalParams::Canopy(canopy) => generate_canopy(viewport, canopy),
        FractalParams::Mandelbrot(mandelbrot) => generate_mandelbrot(viewport, mandelbrot),
        FractalParams::Carpet(variant) => generate_carpet_for_viewport(viewport, variant),
        FractalParams::Levy(levy) => generate_levy_for_viewport(viewport, levy),
    }
}

/// Runs `algorithm` on every pixel of `viewport`, row-major.
pub fn generate_escape_field<Alg: FractalAlgorithm>(viewport: Viewport, algorithm: &Alg) -> Vec<Alg::Success> {
    let width = viewport.width_i32();
    let height = viewport.height_i32();

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
