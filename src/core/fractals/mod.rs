pub mod canopy;
pub mod carpet;
pub mod fractal_kinds;
pub mod levy;
pub mod mandelbrot;
