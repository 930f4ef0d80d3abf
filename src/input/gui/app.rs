//! Window event loop driving the interactive controller.

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::{ControllerStatus, InteractiveController};
use crate::core::data::point::Point;
use crate::presenters::pixels::backend::PixelsBackend;

pub struct GuiApp {
    window: &'static Window,
    controller: InteractiveController<PixelsBackend>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        controller: InteractiveController<PixelsBackend>,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            controller,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes or a frame cannot be produced; the
    /// first fatal error is returned.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), Box<dyn std::error::Error>> {
        let mut fatal: Option<ControllerError> = None;

        self.controller.start()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        event_loop.run(|event, elwt| {
            let Event::WindowEvent { ref event, window_id } = event else {
                return;
            };
            if window_id != self.window.id() {
                return;
            }

            let egui_response = self.egui_state.on_window_event(self.window, event);

            let outcome = match event {
                WindowEvent::CloseRequested => self.controller.handle_event(InputEvent::Quit),
                WindowEvent::Resized(size) => self.resize(size.width, size.height),
                WindowEvent::CursorMoved { position, .. } if !egui_response.consumed => {
                    let pointer = Point::new(position.x as i32, position.y as i32);
                    self.controller.handle_event(InputEvent::PointerMove(pointer))
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = self.window.inner_size();
                    self.resize(size.width, size.height)
                }
                WindowEvent::RedrawRequested => {
                    self.redraw_window();
                    Ok(self.controller.status())
                }
                _ => {
                    if egui_response.repaint {
                        self.window.request_redraw();
                    }
                    Ok(self.controller.status())
                }
            };

            match outcome {
                Ok(ControllerStatus::Running) => {}
                Ok(ControllerStatus::Stopped) => {
                    debug!("window closed");
                    elwt.exit();
                }
                Err(err) => {
                    error!("{}", err);
                    fatal = Some(err);
                    elwt.exit();
                }
            }
        })?;

        match fatal {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<ControllerStatus, ControllerError> {
        self.controller.backend_mut().resize_surface(width, height)?;
        self.controller.handle_event(InputEvent::Resize { width, height })
    }

    fn redraw_window(&mut self) {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);

        self.egui_state.handle_platform_output(self.window, platform_output);

        if let Err(err) = self.controller.backend_mut().render(egui_output, &self.egui_ctx) {
            error!("render error: {}", err);
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let viewport = self.controller.viewport();
        let status = self.controller.backend().status().cloned();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    match &status {
                        Some(status) => {
                            ui.heading(status.title);
                            ui.label(status.parameters.as_str());
                            ui.separator();
                            ui.label(format!("Window size: {}x{}", viewport.width, viewport.height));
                            ui.label(format!("Frames drawn: {}", status.generation));
                            ui.label(format!(
                                "Last render: {} ms",
                                status.render_duration.as_millis()
                            ));
                        }
                        None => {
                            ui.label("No frame yet");
                        }
                    }

                    if !viewport.is_drawable() {
                        ui.colored_label(egui::Color32::LIGHT_RED, "Window too small to draw");
                    }
                });
        })
    }
}
