use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;

pub(super) fn subdivide(commands: &mut Vec<DrawCommand>, origin: Point, size: i32, limit: i32, black: bool) {
    if size <= limit {
        let colour = if black { Colour::BLACK } else { Colour::WHITE };
        commands.push(DrawCommand::filled_rect(
            Rect::new(origin.x, origin.y, size, size),
            colour,
        ));
        return;
    }

    let size = size / 3;

    for row in 0..3 {
        for column in 0..3 {
            let hole = row == 1 && column == 1;
            let cell = Point {
                x: origin.x + column * size,
                y: origin.y + row * size,
            };

            subdivide(commands, cell, size, limit, !hole);
        }
    }
}
