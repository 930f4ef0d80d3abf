use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Blue-tinted grey: `v = 255 - n * 255 / max`, drawn as `(v/3, v/3, v)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotBlueTint {
    max_iterations: u32,
}

impl MandelbrotBlueTint {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for MandelbrotBlueTint {
    fn map(&self, iterations: u32) -> Colour {
        // A zero bound means every pixel escaped immediately.
        let value = if self.max_iterations == 0 {
            255
        } else {
            let iterations = u64::from(iterations.min(self.max_iterations));
            255 - (iterations * 255 / u64::from(self.max_iterations)) as u8
        };

        Colour {
            r: value / 3,
            g: value / 3,
            b: value,
        }
    }
}
