use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::interactive::data::frame_status::FrameStatus;
use crate::controllers::interactive::ports::draw_backend::{BackendError, DrawBackend};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::rect::Rect;
use crate::core::data::viewport::Viewport;
use crate::presenters::pixels::rgba::copy_rgb_to_rgba;
use crate::presenters::raster::canvas::RasterCanvas;

/// Window backend: draws into a software canvas, uploads finished frames to
/// the `pixels` framebuffer and composites the egui overlay on top.
pub struct PixelsBackend {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    canvas: RasterCanvas,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsBackend {
    pub fn new(window: &'static Window, viewport: Viewport) -> Result<Self, BackendError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(viewport.width, viewport.height, surface_texture)
            .map_err(|err| BackendError::Surface(err.to_string()))?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_renderer,
            canvas: RasterCanvas::new(viewport)?,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    /// Follows the window's size. Independent of the framebuffer, which only
    /// changes when a frame is drawn at the new size.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), BackendError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(|err| BackendError::Surface(err.to_string()))?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    /// Status of the frame currently on screen.
    #[must_use]
    pub fn status(&self) -> Option<&FrameStatus> {
        self.canvas.last_status()
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl DrawBackend for PixelsBackend {
    fn resize(&mut self, viewport: Viewport) -> Result<(), BackendError> {
        self.pixels
            .resize_buffer(viewport.width, viewport.height)
            .map_err(|err| BackendError::Surface(err.to_string()))?;

        self.canvas.resize(viewport)
    }

    fn clear(&mut self, colour: Colour) {
        self.canvas.clear(colour);
    }

    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        self.canvas.draw_line(from, to, colour);
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.canvas.fill_rect(rect, colour);
    }

    fn blit(&mut self, buffer: &PixelBuffer) {
        self.canvas.blit(buffer);
    }

    fn present(&mut self, status: &FrameStatus) -> Result<(), BackendError> {
        copy_rgb_to_rgba(self.canvas.screen().buffer(), self.pixels.frame_mut());
        self.canvas.present(status)?;
        self.window.request_redraw();

        Ok(())
    }
}
