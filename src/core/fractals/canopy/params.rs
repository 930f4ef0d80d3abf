use std::f64::consts::PI;

use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

pub const CANOPY_MAX_DEPTH: u32 = 10;
pub const CANOPY_LENGTH_RATIO: f64 = 0.7;
pub const CANOPY_MIN_HALF_ANGLE: f64 = PI / 20.0;
pub const CANOPY_MAX_HALF_ANGLE: f64 = PI / 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanopyParams {
    pub max_depth: u32,
    pub branch_half_angle: f64,
    pub length_ratio: f64,
}

impl CanopyParams {
    #[must_use]
    pub fn new(max_depth: u32, branch_half_angle: f64) -> Self {
        Self {
            max_depth: max_depth.min(CANOPY_MAX_DEPTH),
            branch_half_angle: branch_half_angle.clamp(CANOPY_MIN_HALF_ANGLE, CANOPY_MAX_HALF_ANGLE),
            length_ratio: CANOPY_LENGTH_RATIO,
        }
    }

    /// Depth follows the pointer's height in elevenths of the viewport,
    /// the half angle narrows as the pointer moves right.
    #[must_use]
    pub fn from_pointer(viewport: Viewport, pointer: Point) -> Self {
        let depth_step = (viewport.height_i32() / 11).max(1);
        let max_depth = (pointer.y / depth_step).clamp(0, CANOPY_MAX_DEPTH as i32) as u32;

        let angle_step = f64::from(viewport.width.max(1)) / 18.0;
        let branch_half_angle = (PI / (2.0 + f64::from(pointer.x) / angle_step))
            .clamp(CANOPY_MIN_HALF_ANGLE, CANOPY_MAX_HALF_ANGLE);

        Self {
            max_depth,
            branch_half_angle,
            length_ratio: CANOPY_LENGTH_RATIO,
        }
    }

    /// Pointer position assumed before the first real pointer event.
    #[must_use]
    pub fn initial_pointer(viewport: Viewport) -> Point {
        Point {
            x: viewport.width_i32() / 10,
            y: viewport.height_i32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pointer_depth_uses_elevenths_of_height() {
        let viewport = Viewport::new(640, 400);

        // 400 / 11 = 36
        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, 0)).max_depth, 0);
        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, 35)).max_depth, 0);
        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, 36)).max_depth, 1);
        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, 200)).max_depth, 5);
        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, 400)).max_depth, 10);
    }

    #[test]
    fn test_from_pointer_depth_is_clamped() {
        let viewport = Viewport::new(640, 400);

        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, 5000)).max_depth, 10);
        assert_eq!(CanopyParams::from_pointer(viewport, Point::new(0, -500)).max_depth, 0);
    }

    #[test]
    fn test_from_pointer_angle_mapping() {
        let viewport = Viewport::new(720, 400);

        let at_left = CanopyParams::from_pointer(viewport, Point::new(0, 0));
        assert_eq!(at_left.branch_half_angle, PI / 2.0);

        // 720 / 18 = 40, so x = 80 gives pi / 4
        let quarter = CanopyParams::from_pointer(viewport, Point::new(80, 0));
        assert!((quarter.branch_half_angle - PI / 4.0).abs() < 1e-12);

        let far_right = CanopyParams::from_pointer(viewport, Point::new(100_000, 0));
        assert_eq!(far_right.branch_half_angle, PI / 20.0);

        let far_left = CanopyParams::from_pointer(viewport, Point::new(-30, 0));
        assert_eq!(far_left.branch_half_angle, PI / 2.0);
    }

    #[test]
    fn test_length_ratio_is_constant() {
        let params = CanopyParams::from_pointer(Viewport::new(640, 400), Point::new(64, 400));

        assert_eq!(params.length_ratio, 0.7);
        assert_eq!(CanopyParams::new(3, 0.5).length_ratio, 0.7);
    }

    #[test]
    fn test_initial_pointer() {
        assert_eq!(
            CanopyParams::initial_pointer(Viewport::new(640, 400)),
            Point::new(64, 400)
        );
    }
}
