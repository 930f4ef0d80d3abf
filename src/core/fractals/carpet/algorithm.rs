use crate::core::data::draw_command::DrawCommand;
use crate::core::data::rect::Rect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::carpet::variant::CarpetVariant;
use crate::core::fractals::carpet::{depth_driven, size_driven};

/// Carpet rectangles inside `bounds` for either subdivision policy.
///
/// The size-driven policy only reads the width of `bounds` and treats the
/// cell as square; its root cell is not black, so an unsplit carpet is a
/// single white square.
#[must_use]
pub fn generate_carpet(bounds: Rect, variant: CarpetVariant) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    match variant {
        CarpetVariant::SizeDriven { limit } => {
            size_driven::subdivide(&mut commands, bounds.origin, bounds.width, limit.max(0), false);
        }
        CarpetVariant::DepthDriven { depth } => {
            depth_driven::subdivide(&mut commands, bounds, depth);
        }
    }

    commands
}

#[must_use]
pub fn generate_carpet_for_viewport(viewport: Viewport, variant: &CarpetVariant) -> Vec<DrawCommand> {
    generate_carpet(variant.root_bounds(viewport), *variant)
}
