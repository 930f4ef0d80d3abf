use std::time::Instant;

use log::{debug, trace};

use crate::controllers::interactive::data::frame_status::FrameStatus;
use crate::controllers::interactive::data::settings::ProgramSettings;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::hysteresis::PointerDamper;
use crate::controllers::interactive::ports::draw_backend::DrawBackend;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::colour::Colour;
use crate::core::data::fractal_params::{FractalParams, Surface};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControllerStatus {
    Running,
    Stopped,
}

/// Decides, event by event, when the fractal must be regenerated and drives
/// the backend through each redraw.
///
/// Everything runs on the caller's thread: a redraw triggered by one event
/// completes, or is skipped, before the next event is looked at.
pub struct InteractiveController<B: DrawBackend> {
    backend: B,
    kind: FractalKinds,
    viewport: Viewport,
    params: FractalParams,
    pointer: Point,
    damper: PointerDamper,
    frame_buffer: Option<PixelBuffer>,
    last_completed_generation: u64,
    status: ControllerStatus,
}

impl<B: DrawBackend> InteractiveController<B> {
    pub fn new(backend: B, settings: &ProgramSettings) -> Self {
        Self {
            backend,
            kind: settings.kind,
            viewport: settings.viewport,
            params: settings.params,
            pointer: settings.initial_pointer,
            damper: PointerDamper::default(),
            frame_buffer: None,
            last_completed_generation: 0,
            status: ControllerStatus::Running,
        }
    }

    /// Draws the first frame with the startup parameters.
    pub fn start(&mut self) -> Result<(), ControllerError> {
        debug!(
            "starting {} at {}x{} with {}",
            self.kind.display_name(),
            self.viewport.width,
            self.viewport.height,
            self.params
        );
        self.redraw().map(|_| ())
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<ControllerStatus, ControllerError> {
        if self.status == ControllerStatus::Stopped {
            return Ok(ControllerStatus::Stopped);
        }

        match event {
            InputEvent::Quit => {
                debug!("quit requested after {} frames", self.last_completed_generation);
                self.status = ControllerStatus::Stopped;
            }
            InputEvent::Resize { width, height } => self.resize(Viewport::new(width, height))?,
            InputEvent::PointerMove(pointer) => self.pointer_moved(pointer)?,
        }

        Ok(self.status)
    }

    #[must_use]
    pub fn status(&self) -> ControllerStatus {
        self.status
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// Number of frames drawn so far, the startup frame included.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), ControllerError> {
        self.viewport = viewport;
        // Sized to the old viewport; recreated on the next buffered redraw.
        self.frame_buffer = None;

        if self.params.follows_viewport() {
            if let Some(params) = self.params.from_pointer(viewport, self.pointer) {
                self.params = params;
            }
        }

        if !viewport.is_drawable() {
            debug!(
                "viewport {}x{} below drawable size, keeping previous frame",
                viewport.width, viewport.height
            );
            return Ok(());
        }

        self.backend.resize(viewport)?;
        self.redraw().map(|_| ())
    }

    fn pointer_moved(&mut self, pointer: Point) -> Result<(), ControllerError> {
        self.pointer = pointer;

        let Some(candidate) = self.params.from_pointer(self.viewport, pointer) else {
            trace!("{} ignores pointer at ({}, {})", self.kind.display_name(), pointer.x, pointer.y);
            return Ok(());
        };

        if self.params.damps_pointer() && !self.damper.accept(pointer.x, self.viewport) {
            trace!(
                "pointer x {} within damping band of {}",
                pointer.x,
                self.damper.last_accepted_x()
            );
            return Ok(());
        }

        self.params = candidate;
        self.redraw().map(|_| ())
    }

    /// Regenerates and presents a full frame. Returns whether a frame was
    /// drawn; undrawable viewports issue no backend calls at all.
    fn redraw(&mut self) -> Result<bool, ControllerError> {
        if !self.viewport.is_drawable() {
            debug!(
                "skipping redraw at {}x{}",
                self.viewport.width, self.viewport.height
            );
            return Ok(false);
        }

        let start = Instant::now();
        let commands = generate_fractal(self.viewport, &self.params);

        match self.params.surface() {
            Surface::Direct => {
                self.backend.clear(Colour::BLACK);
                for command in &commands {
                    self.backend.execute(command);
                }
            }
            Surface::Buffered => {
                if self.frame_buffer.is_none() {
                    let pixel_rect = PixelRect::from_viewport(self.viewport)?;
                    self.frame_buffer = Some(PixelBuffer::new(pixel_rect)?);
                }

                if let Some(buffer) = self.frame_buffer.as_mut() {
                    generate_pixel_buffer(&commands, buffer);
                    self.backend.blit(buffer);
                }
            }
        }

        let render_duration = start.elapsed();
        let generation = self.last_completed_generation + 1;

        self.backend.present(&FrameStatus {
            title: self.kind.display_name(),
            parameters: self.params.to_string(),
            viewport: self.viewport,
            generation,
            render_duration,
        })?;
        self.last_completed_generation = generation;

        debug!(
            "frame {} ({}, {} commands) in {:?}",
            generation,
            self.params,
            commands.len(),
            render_duration
        );

        Ok(true)
    }
}
