use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use crate::core::data::viewport::Viewport;

pub const CARPET_MAX_DEPTH: u32 = 12;
pub const CARPET_DEFAULT_DEPTH: u32 = 10;
pub const CARPET_DEFAULT_LIMIT: i32 = 2;

/// Subdivision policy of the Sierpinski carpet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CarpetVariant {
    /// Split while the cell is larger than `limit` pixels; the centre of each
    /// split is painted white.
    SizeDriven { limit: i32 },
    /// Split `depth` times with the integer framing of the static sketch;
    /// the centre of each split is left undrawn.
    DepthDriven { depth: u32 },
}

impl CarpetVariant {
    #[must_use]
    pub fn size_driven(limit: i32) -> Self {
        Self::SizeDriven { limit: limit.max(0) }
    }

    #[must_use]
    pub fn depth_driven(depth: u32) -> Self {
        Self::DepthDriven {
            depth: depth.min(CARPET_MAX_DEPTH),
        }
    }

    /// Initial limit of the size-driven carpet from an optional argument:
    /// absent gives 2, anything below 2 gives 0.
    #[must_use]
    pub fn size_driven_from_arg(arg: Option<i64>) -> Self {
        let limit = match arg {
            None => CARPET_DEFAULT_LIMIT,
            Some(value) if value < 2 => 0,
            Some(value) => i32::try_from(value).unwrap_or(i32::MAX),
        };

        Self::size_driven(limit)
    }

    /// Depth of the depth-driven carpet from an optional argument: absent
    /// gives 10, anything below 2 gives 0, the rest is capped at 12.
    #[must_use]
    pub fn depth_driven_from_arg(arg: Option<i64>) -> Self {
        let depth = match arg {
            None => CARPET_DEFAULT_DEPTH,
            Some(value) if value < 2 => 0,
            Some(value) => u32::try_from(value).unwrap_or(u32::MAX),
        };

        Self::depth_driven(depth)
    }

    /// `limit = (x / w) * (w / 4)` for the size-driven carpet; the
    /// depth-driven carpet does not follow the pointer.
    #[must_use]
    pub fn from_pointer(&self, viewport: Viewport, pointer: Point) -> Option<Self> {
        match self {
            Self::SizeDriven { .. } => {
                let width = f64::from(viewport.width.max(1));
                let limit = (f64::from(pointer.x) / width) * width / 4.0;

                Some(Self::size_driven(limit as i32))
            }
            Self::DepthDriven { .. } => None,
        }
    }

    /// Bounding box of the whole carpet for `viewport`.
    #[must_use]
    pub fn root_bounds(&self, viewport: Viewport) -> Rect {
        let w = viewport.width_i32();
        let h = viewport.height_i32();

        match self {
            Self::SizeDriven { .. } => Rect::new(w / 4, h / 4, w / 2, w / 2),
            Self::DepthDriven { .. } => Rect::new(w / 4, h / 2, 3 * w / 4, h / 2),
        }
    }
}
