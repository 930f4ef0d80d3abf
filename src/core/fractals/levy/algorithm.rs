use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::levy::params::{LevyParams, LEVY_MAX_DEPTH};

/// Lévy C curve between `from` and `to`, `2^depth` segments long.
#[must_use]
pub fn generate_levy(from: Point, to: Point, depth: u32) -> Vec<DrawCommand> {
    let depth = depth.min(LEVY_MAX_DEPTH);
    let mut commands = Vec::with_capacity(1 << depth);

    fold(&mut commands, from, to, depth);

    commands
}

/// The curve spans the middle half of the viewport at two thirds of its height.
#[must_use]
pub fn generate_levy_for_viewport(viewport: Viewport, params: &LevyParams) -> Vec<DrawCommand> {
    let w = viewport.width_i32();
    let h = viewport.height_i32();

    generate_levy(
        Point::new(w / 4, 2 * h / 3),
        Point::new(3 * w / 4, 2 * h / 3),
        params.depth,
    )
}

fn fold(commands: &mut Vec<DrawCommand>, from: Point, to: Point, depth: u32) {
    if depth == 0 {
        commands.push(DrawCommand::line(from, to, Colour::WHITE));
        return;
    }

    // Apex of the right isosceles triangle over the segment.
    let apex = Point {
        x: (from.x + to.x) / 2 + (to.y - from.y) / 2,
        y: (from.y + to.y) / 2 - (to.x - from.x) / 2,
    };

    fold(commands, from, apex, depth - 1);
    fold(commands, apex, to, depth - 1);
}
