use crate::controllers::interactive::data::frame_status::FrameStatus;
use crate::controllers::interactive::ports::draw_backend::{BackendError, DrawBackend};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::draw_line;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use crate::core::data::viewport::Viewport;

/// In-memory screen: a backend that draws into an RGB buffer the size of
/// the viewport and remembers the last presented frame.
#[derive(Debug)]
pub struct RasterCanvas {
    screen: PixelBuffer,
    last_status: Option<FrameStatus>,
    frames_presented: u64,
}

impl RasterCanvas {
    pub fn new(viewport: Viewport) -> Result<Self, BackendError> {
        Ok(Self {
            screen: allocate_screen(viewport)?,
            last_status: None,
            frames_presented: 0,
        })
    }

    #[must_use]
    pub fn screen(&self) -> &PixelBuffer {
        &self.screen
    }

    #[must_use]
    pub fn last_status(&self) -> Option<&FrameStatus> {
        self.last_status.as_ref()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

fn allocate_screen(viewport: Viewport) -> Result<PixelBuffer, BackendError> {
    let pixel_rect =
        PixelRect::from_viewport(viewport).map_err(|err| BackendError::Allocation(err.to_string()))?;

    PixelBuffer::new(pixel_rect).map_err(|err| BackendError::Allocation(err.to_string()))
}

impl DrawBackend for RasterCanvas {
    fn resize(&mut self, viewport: Viewport) -> Result<(), BackendError> {
        self.screen = allocate_screen(viewport)?;

        Ok(())
    }

    fn clear(&mut self, colour: Colour) {
        self.screen.fill(colour);
    }

    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        draw_line(&mut self.screen, from, to, colour);
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.screen.fill_rect(rect, colour);
    }

    fn blit(&mut self, buffer: &PixelBuffer) {
        self.screen.copy_from(buffer);
    }

    fn present(&mut self, status: &FrameStatus) -> Result<(), BackendError> {
        self.last_status = Some(status.clone());
        self.frames_presented += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::draw_command::DrawCommand;
    use std::time::Duration;

    fn status(generation: u64) -> FrameStatus {
        FrameStatus {
            title: "Static Dragon",
            parameters: "depth 1".to_string(),
            viewport: Viewport::new(30, 20),
            generation,
            render_duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = RasterCanvas::new(Viewport::new(30, 20)).unwrap();

        assert_eq!(canvas.screen().buffer_size(), 30 * 20 * 3);
        assert!(canvas.screen().buffer().iter().all(|&b| b == 0));
        assert_eq!(canvas.frames_presented(), 0);
    }

    #[test]
    fn test_new_rejects_empty_viewport() {
        let result = RasterCanvas::new(Viewport::new(0, 20));

        assert!(matches!(result, Err(BackendError::Allocation(_))));
    }

    #[test]
    fn test_executes_commands() {
        let mut canvas = RasterCanvas::new(Viewport::new(30, 20)).unwrap();

        canvas.execute(&DrawCommand::line(Point::new(0, 0), Point::new(4, 0), Colour::WHITE));
        canvas.execute(&DrawCommand::filled_rect(Rect::new(10, 10, 2, 2), Colour::rgb(0, 0, 255)));

        assert_eq!(canvas.screen().pixel(Point::new(4, 0)), Some(Colour::WHITE));
        assert_eq!(canvas.screen().pixel(Point::new(5, 0)), Some(Colour::BLACK));
        assert_eq!(canvas.screen().pixel(Point::new(11, 11)), Some(Colour::rgb(0, 0, 255)));
    }

    #[test]
    fn test_clear_overwrites_previous_frame() {
        let mut canvas = RasterCanvas::new(Viewport::new(30, 20)).unwrap();
        canvas.fill_rect(Rect::new(0, 0, 30, 20), Colour::WHITE);

        canvas.clear(Colour::BLACK);

        assert!(canvas.screen().buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_resize_reallocates_screen() {
        let mut canvas = RasterCanvas::new(Viewport::new(30, 20)).unwrap();

        canvas.resize(Viewport::new(40, 25)).unwrap();

        assert_eq!(canvas.screen().pixel_rect().width(), 40);
        assert_eq!(canvas.screen().pixel_rect().height(), 25);
    }

    #[test]
    fn test_blit_copies_buffer() {
        let mut canvas = RasterCanvas::new(Viewport::new(30, 20)).unwrap();
        let mut buffer = PixelBuffer::new(PixelRect::new(30, 20).unwrap()).unwrap();
        buffer.fill(Colour::WHITE);

        canvas.blit(&buffer);

        assert_eq!(canvas.screen(), &buffer);
    }

    #[test]
    fn test_present_records_status() {
        let mut canvas = RasterCanvas::new(Viewport::new(30, 20)).unwrap();

        canvas.present(&status(1)).unwrap();
        canvas.present(&status(2)).unwrap();

        assert_eq!(canvas.frames_presented(), 2);
        assert_eq!(canvas.last_status().map(|status| status.generation), Some(2));
    }
}
