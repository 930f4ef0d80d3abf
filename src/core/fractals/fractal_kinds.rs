use clap::ValueEnum;

use crate::core::data::fractal_params::FractalParams;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::canopy::params::CanopyParams;
use crate::core::fractals::carpet::variant::CarpetVariant;
use crate::core::fractals::levy::params::LevyParams;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FractalKinds {
    #[default]
    Canopy,
    Mandelbrot,
    CarpetDynamic,
    CarpetStatic,
    Levy,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Canopy,
        Self::Mandelbrot,
        Self::CarpetDynamic,
        Self::CarpetStatic,
        Self::Levy,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Canopy => "Dynamic Fractal Canopy",
            Self::Mandelbrot => "Mandelbrot",
            Self::CarpetDynamic => "Dynamic Sierpinski",
            Self::CarpetStatic => "Static Sierpinski",
            Self::Levy => "Static Dragon",
        }
    }

    #[must_use]
    pub const fn initial_viewport(self) -> Viewport {
        match self {
            Self::Canopy | Self::Mandelbrot => Viewport::new(640, 400),
            Self::CarpetDynamic | Self::CarpetStatic | Self::Levy => Viewport::new(500, 500),
        }
    }

    /// Parameters of the first frame. `depth_arg` is the optional integer
    /// given on the command line; fractals driven only by the pointer ignore it.
    #[must_use]
    pub fn initial_params(self, viewport: Viewport, depth_arg: Option<i64>) -> FractalParams {
        match self {
            Self::Canopy => FractalParams::Canopy(CanopyParams::from_pointer(
                viewport,
                CanopyParams::initial_pointer(viewport),
            )),
            Self::Mandelbrot => FractalParams::Mandelbrot(MandelbrotParams::default()),
            Self::CarpetDynamic => FractalParams::Carpet(CarpetVariant::size_driven_from_arg(depth_arg)),
            Self::CarpetStatic => FractalParams::Carpet(CarpetVariant::depth_driven_from_arg(depth_arg)),
            Self::Levy => FractalParams::Levy(LevyParams::from_arg(depth_arg)),
        }
    }
}
