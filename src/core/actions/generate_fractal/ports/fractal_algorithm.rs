use crate::core::data::point::Point;

/// Per-pixel computation over a raster.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
