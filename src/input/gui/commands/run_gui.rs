use std::error::Error;

use log::info;
use winit::{dpi::PhysicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::controllers::interactive::data::settings::ProgramSettings;
use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::backend::PixelsBackend;

pub struct RunGuiCommand {
    settings: ProgramSettings,
}

impl RunGuiCommand {
    pub fn new(settings: ProgramSettings) -> Self {
        Self { settings }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let viewport = self.settings.viewport;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.settings.kind.display_name())
                .with_inner_size(PhysicalSize::new(viewport.width, viewport.height))
                .build(&event_loop)?,
        ));

        info!(
            "opening {} at {}x{} with {}",
            self.settings.kind.display_name(),
            viewport.width,
            viewport.height,
            self.settings.params
        );

        let backend = PixelsBackend::new(window, viewport)?;
        let controller = InteractiveController::new(backend, &self.settings);

        GuiApp::new(window, &event_loop, controller).run(event_loop)
    }
}
