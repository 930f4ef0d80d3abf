use crate::core::data::colour::Colour;

/// Maps a per-pixel value (an escape time) to a colour.
pub trait ColourMap {
    fn map(&self, value: u32) -> Colour;
}
