use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::canopy::params::CanopyParams;

struct Branch {
    tip: Point,
    length: f64,
    angle: f64,
    level: u32,
}

/// Draws a vertical trunk of a quarter of the viewport height from the
/// bottom centre, then forks every tip into two branches per level.
#[must_use]
pub fn generate_canopy(viewport: Viewport, params: &CanopyParams) -> Vec<DrawCommand> {
    let capacity = (1usize << (params.max_depth + 1)) - 1;
    let mut commands = Vec::with_capacity(capacity);

    let root = Point {
        x: viewport.width_i32() / 2,
        y: viewport.height_i32(),
    };
    let length = f64::from(viewport.height) / 4.0;
    let trunk_tip = Point {
        x: root.x,
        y: (f64::from(root.y) - length) as i32,
    };

    commands.push(DrawCommand::line(root, trunk_tip, Colour::WHITE));

    // The first fork keeps the trunk length; the ratio applies from there on.
    grow(
        &mut commands,
        Branch {
            tip: trunk_tip,
            length,
            angle: 0.0,
            level: 1,
        },
        params,
    );

    commands
}

fn grow(commands: &mut Vec<DrawCommand>, branch: Branch, params: &CanopyParams) {
    if branch.level > params.max_depth {
        return;
    }

    let left_angle = branch.angle + params.branch_half_angle;
    let right_angle = branch.angle - params.branch_half_angle;
    let left = endpoint(branch.tip, branch.length, left_angle);
    let right = endpoint(branch.tip, branch.length, right_angle);

    commands.push(DrawCommand::line(branch.tip, left, Colour::WHITE));
    commands.push(DrawCommand::line(branch.tip, right, Colour::WHITE));

    let length = branch.length * params.length_ratio;

    grow(
        commands,
        Branch {
            tip: left,
            length,
            angle: left_angle,
            level: branch.level + 1,
        },
        params,
    );
    grow(
        commands,
        Branch {
            tip: right,
            length,
            angle: right_angle,
            level: branch.level + 1,
        },
        params,
    );
}

// y grows downward, so growing "up" subtracts.
fn endpoint(from: Point, length: f64, angle: f64) -> Point {
    Point {
        x: (f64::from(from.x) - length * angle.sin()) as i32,
        y: (f64::from(from.y) - length * angle.cos()) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn lines(commands: &[DrawCommand]) -> Vec<(Point, Point)> {
        commands
            .iter()
            .map(|command| match command {
                DrawCommand::Line { from, to, .. } => (*from, *to),
                DrawCommand::FilledRect { .. } => panic!("canopy only draws lines"),
            })
            .collect()
    }

    #[test]
    fn test_depth_zero_draws_only_the_trunk() {
        let viewport = Viewport::new(640, 400);
        let commands = generate_canopy(viewport, &CanopyParams::new(0, PI / 4.0));

        assert_eq!(
            lines(&commands),
            vec![(Point::new(320, 400), Point::new(320, 300))]
        );
    }

    #[test]
    fn test_segment_count_doubles_per_level() {
        let viewport = Viewport::new(640, 400);

        for depth in 0..=10 {
            let commands = generate_canopy(viewport, &CanopyParams::new(depth, PI / 6.0));

            // trunk + 2 + 4 + ... + 2^depth, the last level being the leaves
            assert_eq!(commands.len(), (1usize << (depth + 1)) - 1, "depth {}", depth);
        }
    }

    #[test]
    fn test_deepest_level_has_two_to_the_depth_leaves() {
        let viewport = Viewport::new(640, 400);
        let depth = 4;
        let shallower = generate_canopy(viewport, &CanopyParams::new(depth - 1, PI / 6.0));
        let deeper = generate_canopy(viewport, &CanopyParams::new(depth, PI / 6.0));

        assert_eq!(deeper.len() - shallower.len(), 1 << depth);
        assert!(shallower.iter().all(|command| deeper.contains(command)));
    }

    #[test]
    fn test_first_fork_keeps_trunk_length() {
        let viewport = Viewport::new(640, 400);
        let commands = generate_canopy(viewport, &CanopyParams::new(1, PI / 2.0));

        // Horizontal branches of length 100 from the trunk tip (320, 300).
        assert_eq!(
            lines(&commands),
            vec![
                (Point::new(320, 400), Point::new(320, 300)),
                (Point::new(320, 300), Point::new(220, 300)),
                (Point::new(320, 300), Point::new(420, 300)),
            ]
        );
    }

    #[test]
    fn test_second_fork_applies_length_ratio() {
        let viewport = Viewport::new(640, 400);
        let commands = generate_canopy(viewport, &CanopyParams::new(2, PI / 2.0));
        let segments = lines(&commands);

        // Left branch ends at (220, 300) heading at pi/2; its children turn
        // to pi (straight down) and 0 (straight up), each 70 long.
        assert_eq!(segments[3], (Point::new(220, 300), Point::new(220, 370)));
        assert_eq!(segments[4], (Point::new(220, 300), Point::new(220, 230)));
    }

    #[test]
    fn test_all_segments_are_white() {
        let commands = generate_canopy(Viewport::new(640, 400), &CanopyParams::new(5, 0.4));

        assert!(commands.iter().all(|command| command.colour() == Colour::WHITE));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let viewport = Viewport::new(640, 400);
        let params = CanopyParams::new(8, 0.37);

        assert_eq!(generate_canopy(viewport, &params), generate_canopy(viewport, &params));
    }
}
