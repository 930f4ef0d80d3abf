pub mod algorithm;
mod depth_driven;
mod size_driven;
pub mod variant;
