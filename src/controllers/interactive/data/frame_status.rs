use std::time::Duration;

use crate::core::data::viewport::Viewport;

/// Summary of a completed frame, handed to the backend along with it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStatus {
    pub title: &'static str,
    pub parameters: String,
    pub viewport: Viewport,
    pub generation: u64,
    pub render_duration: Duration,
}
