use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;

/// A single primitive produced by a fractal generator.
///
/// Commands are regenerated from scratch for every frame and carry no
/// state beyond the call that produced them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        colour: Colour,
    },
    FilledRect {
        rect: Rect,
        colour: Colour,
    },
}

impl DrawCommand {
    #[must_use]
    pub fn line(from: Point, to: Point, colour: Colour) -> Self {
        Self::Line { from, to, colour }
    }

    #[must_use]
    pub fn filled_rect(rect: Rect, colour: Colour) -> Self {
        Self::FilledRect { rect, colour }
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        match self {
            Self::Line { colour, .. } | Self::FilledRect { colour, .. } => *colour,
        }
    }
}
