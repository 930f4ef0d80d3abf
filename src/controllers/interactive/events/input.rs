use crate::core::data::point::Point;

/// Input the controller reacts to. Anything else the platform reports is
/// dropped before it reaches the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Resize { width: u32, height: u32 },
    PointerMove(Point),
}
