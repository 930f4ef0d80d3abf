use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use crate::core::data::viewport::Viewport;

/// Rasterises `commands` in order onto `buffer`. Pixels outside the buffer
/// are clipped; the rest of the buffer keeps its previous contents.
pub fn generate_pixel_buffer(commands: &[DrawCommand], buffer: &mut PixelBuffer) {
    for command in commands {
        match *command {
            DrawCommand::Line { from, to, colour } => draw_line(buffer, from, to, colour),
            DrawCommand::FilledRect { rect, colour } => buffer.fill_rect(rect, colour),
        }
    }
}

/// Bresenham line including both endpoints.
pub fn draw_line(buffer: &mut PixelBuffer, from: Point, to: Point, colour: Colour) {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = -(i64::from(to.y) - i64::from(from.y)).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut x = i64::from(from.x);
    let mut y = i64::from(from.y);

    loop {
        if let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) {
            // Off-buffer pixels are simply not drawn.
            let _ = buffer.set_pixel(Point { x: px, y: py }, colour);
        }

        if x == i64::from(to.x) && y == i64::from(to.y) {
            break;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

/// Turns a row-major field of per-pixel values into 1×1 filled rects.
#[must_use]
pub fn colour_field_to_commands<C: ColourMap>(
    viewport: Viewport,
    field: &[u32],
    colour_map: &C,
) -> Vec<DrawCommand> {
    let width = viewport.width.max(1) as usize;

    field
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let x = (index % width) as i32;
            let y = (index / width) as i32;

            DrawCommand::filled_rect(Rect::new(x, y, 1, 1), colour_map.map(value))
        })
        .collect()
}
