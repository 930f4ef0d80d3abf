use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::rect::Rect;

/// Fractions of the current origin used for each of the eight drawn cells.
///
/// Offsets are computed from the absolute origin (`x/3`, `2x/3`, `x`) rather
/// than from the cell, which gives the static carpet its irregular layout.
const CELLS: [(Third, Third); 8] = [
    (Third::One, Third::One),
    (Third::Two, Third::One),
    (Third::Three, Third::One),
    (Third::One, Third::Two),
    (Third::Two, Third::Two),
    (Third::Three, Third::Two),
    (Third::One, Third::Three),
    (Third::Two, Third::Three),
];

#[derive(Copy, Clone)]
enum Third {
    One,
    Two,
    Three,
}

impl Third {
    fn of(self, value: i32) -> i32 {
        match self {
            Self::One => value / 3,
            Self::Two => 2 * value / 3,
            Self::Three => value,
        }
    }
}

pub(super) fn subdivide(commands: &mut Vec<DrawCommand>, bounds: Rect, level: u32) {
    if level == 0 || bounds.width <= 3 || bounds.height <= 3 {
        commands.push(DrawCommand::filled_rect(bounds, Colour::WHITE));
        return;
    }

    let width = bounds.width / 3;
    let height = bounds.height / 3;

    for (x_third, y_third) in CELLS {
        let cell = Rect::new(
            x_third.of(bounds.origin.x),
            y_third.of(bounds.origin.y),
            width,
            height,
        );

        subdivide(commands, cell, level - 1);
    }
}
