use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::canopy::params::CanopyParams;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Startup state of one program: which fractal, at which size, with which
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSettings {
    pub kind: FractalKinds,
    pub viewport: Viewport,
    pub params: FractalParams,
    pub initial_pointer: Point,
}

impl ProgramSettings {
    #[must_use]
    pub fn new(kind: FractalKinds, depth_arg: Option<i64>) -> Self {
        Self::with_viewport(kind, depth_arg, kind.initial_viewport())
    }

    #[must_use]
    pub fn with_viewport(kind: FractalKinds, depth_arg: Option<i64>, viewport: Viewport) -> Self {
        let initial_pointer = match kind {
            FractalKinds::Canopy => CanopyParams::initial_pointer(viewport),
            _ => Point::default(),
        };

        Self {
            kind,
            viewport,
            params: kind.initial_params(viewport, depth_arg),
            initial_pointer,
        }
    }
}
