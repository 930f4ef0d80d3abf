//! Output adapters: where finished frames end up.

pub mod file;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod raster;
