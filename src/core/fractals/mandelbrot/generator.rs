use crate::core::actions::generate_fractal::generate_fractal::generate_escape_field;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::colour_field_to_commands;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotBlueTint;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// One 1×1 filled rect per pixel, row-major, recomputed in full every call.
#[must_use]
pub fn generate_mandelbrot(viewport: Viewport, params: &MandelbrotParams) -> Vec<DrawCommand> {
    let algorithm = MandelbrotAlgorithm::new(viewport, params.max_iterations);
    let field = generate_escape_field(viewport, &algorithm);
    let colour_map = MandelbrotBlueTint::new(params.max_iterations);

    colour_field_to_commands(viewport, &field, &colour_map)
}
