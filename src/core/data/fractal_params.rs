use std::fmt;

use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::canopy::params::CanopyParams;
use crate::core::fractals::carpet::variant::CarpetVariant;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::levy::params::LevyParams;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Where a fractal's draw commands end up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Surface {
    /// Cleared and drawn straight onto the screen.
    Direct,
    /// Rasterised into an off-screen buffer kept between frames, then blitted.
    Buffered,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalParams {
    Canopy(CanopyParams),
    Mandelbrot(MandelbrotParams),
    Carpet(CarpetVariant),
    Levy(LevyParams),
}

impl FractalParams {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Canopy(_) => FractalKinds::Canopy,
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Carpet(CarpetVariant::SizeDriven { .. }) => FractalKinds::CarpetDynamic,
            Self::Carpet(CarpetVariant::DepthDriven { .. }) => FractalKinds::CarpetStatic,
            Self::Levy(_) => FractalKinds::Levy,
        }
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        match self {
            Self::Canopy(_) | Self::Levy(_) => Surface::Direct,
            Self::Mandelbrot(_) | Self::Carpet(_) => Surface::Buffered,
        }
    }

    /// Candidate parameters for a pointer position, or `None` when this
    /// fractal does not follow the pointer.
    #[must_use]
    pub fn from_pointer(&self, viewport: Viewport, pointer: Point) -> Option<Self> {
        match self {
            Self::Canopy(_) => Some(Self::Canopy(CanopyParams::from_pointer(viewport, pointer))),
            Self::Mandelbrot(_) => Some(Self::Mandelbrot(MandelbrotParams::from_pointer(viewport, pointer))),
            Self::Carpet(variant) => variant.from_pointer(viewport, pointer).map(Self::Carpet),
            Self::Levy(_) => None,
        }
    }

    /// Whether pointer updates must move further than a tenth of the
    /// viewport width from the last accepted one before they apply.
    #[must_use]
    pub fn damps_pointer(&self) -> bool {
        matches!(self, Self::Carpet(CarpetVariant::SizeDriven { .. }))
    }

    /// Whether the parameters are a function of the viewport as well as the
    /// pointer and so must be derived again after a resize.
    #[must_use]
    pub fn follows_viewport(&self) -> bool {
        matches!(self, Self::Canopy(_))
    }
}

impl fmt::Display for FractalParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canopy(canopy) => write!(
                f,
                "depth {}, half angle {:.3} rad",
                canopy.max_depth, canopy.branch_half_angle
            ),
            Self::Mandelbrot(mandelbrot) => write!(f, "{} iterations", mandelbrot.max_iterations),
            Self::Carpet(CarpetVariant::SizeDriven { limit }) => write!(f, "cell limit {} px", limit),
            Self::Carpet(CarpetVariant::DepthDriven { depth }) => write!(f, "depth {}", depth),
            Self::Levy(levy) => write!(f, "depth {}", levy.depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_per_fractal() {
        assert_eq!(FractalParams::Canopy(CanopyParams::new(3, 0.5)).surface(), Surface::Direct);
        assert_eq!(FractalParams::Levy(LevyParams::new(3)).surface(), Surface::Direct);
        assert_eq!(FractalParams::Mandelbrot(MandelbrotParams::new(3)).surface(), Surface::Buffered);
        assert_eq!(FractalParams::Carpet(CarpetVariant::depth_driven(3)).surface(), Surface::Buffered);
    }

    #[test]
    fn test_only_size_driven_carpet_damps_pointer() {
        assert!(FractalParams::Carpet(CarpetVariant::size_driven(3)).damps_pointer());
        assert!(!FractalParams::Carpet(CarpetVariant::depth_driven(3)).damps_pointer());
        assert!(!FractalParams::Mandelbrot(MandelbrotParams::new(3)).damps_pointer());
        assert!(!FractalParams::Canopy(CanopyParams::new(3, 0.5)).damps_pointer());
    }

    #[test]
    fn test_static_fractals_ignore_pointer() {
        let viewport = Viewport::new(500, 500);
        let pointer = Point::new(200, 200);

        assert_eq!(FractalParams::Levy(LevyParams::new(3)).from_pointer(viewport, pointer), None);
        assert_eq!(
            FractalParams::Carpet(CarpetVariant::depth_driven(3)).from_pointer(viewport, pointer),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FractalParams::Mandelbrot(MandelbrotParams::new(12)).to_string(), "12 iterations");
        assert_eq!(FractalParams::Carpet(CarpetVariant::size_driven(7)).to_string(), "cell limit 7 px");
        assert_eq!(FractalParams::Levy(LevyParams::new(5)).to_string(), "depth 5");
    }
}
