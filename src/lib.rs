mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::interactive::{
    BackendError, ControllerError, ControllerStatus, DrawBackend, FrameStatus, InputEvent,
    InteractiveController, ProgramSettings,
};
pub use crate::controllers::snapshot::SnapshotController;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::draw_command::DrawCommand;
pub use crate::core::data::fractal_params::FractalParams;
pub use crate::core::data::point::Point;
pub use crate::core::data::rect::Rect;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::canopy::algorithm::generate_canopy;
pub use crate::core::fractals::canopy::params::CanopyParams;
pub use crate::core::fractals::carpet::algorithm::{generate_carpet, generate_carpet_for_viewport};
pub use crate::core::fractals::carpet::variant::CarpetVariant;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::levy::algorithm::{generate_levy, generate_levy_for_viewport};
pub use crate::core::fractals::levy::params::LevyParams;
pub use crate::core::fractals::mandelbrot::generator::generate_mandelbrot;
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use crate::input::cli::args::{GuiCli, SketchArgs, SnapshotCli};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::raster::canvas::RasterCanvas;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
