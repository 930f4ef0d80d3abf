use std::error::Error;
use std::path::Path;

use log::info;

use crate::controllers::interactive::data::settings::ProgramSettings;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::InteractiveController;
use crate::controllers::snapshot::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::Point;
use crate::presenters::raster::canvas::RasterCanvas;

/// Runs the interactive controller without a window: the startup frame, an
/// optional scripted pointer move, then the resulting screen goes to a file.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    controller: InteractiveController<RasterCanvas>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, settings: &ProgramSettings) -> Result<Self, Box<dyn Error>> {
        let canvas = RasterCanvas::new(settings.viewport)?;

        Ok(Self {
            presenter,
            controller: InteractiveController::new(canvas, settings),
        })
    }

    pub fn generate(&mut self, pointer: Option<Point>) -> Result<(), Box<dyn Error>> {
        self.controller.start()?;

        if let Some(pointer) = pointer {
            self.controller.handle_event(InputEvent::PointerMove(pointer))?;
        }
        self.controller.handle_event(InputEvent::Quit)?;

        if let Some(status) = self.controller.backend().last_status() {
            info!(
                "{} ({}) at {}x{} in {:?}",
                status.title,
                status.parameters,
                status.viewport.width,
                status.viewport.height,
                status.render_duration
            );
        }

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        self.presenter.present(self.controller.backend().screen(), filepath)?;
        info!("wrote {}", filepath.display());

        Ok(())
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.controller.last_completed_generation()
    }
}
