use std::path::PathBuf;

use clap::{Args, Parser, ValueHint};

use crate::controllers::interactive::data::settings::ProgramSettings;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Options every sketch program accepts.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct SketchArgs {
    /// Which fractal to draw
    #[arg(long, value_enum, default_value_t = FractalKinds::Canopy)]
    pub fractal: FractalKinds,

    /// Recursion depth (static carpet, dragon) or initial cell limit
    /// (dynamic carpet); ignored by the canopy and Mandelbrot
    #[arg(allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Window width in pixels, overriding the fractal's default
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels, overriding the fractal's default
    #[arg(long)]
    pub height: Option<u32>,
}

impl SketchArgs {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let initial = self.fractal.initial_viewport();

        Viewport::new(
            self.width.unwrap_or(initial.width),
            self.height.unwrap_or(initial.height),
        )
    }

    #[must_use]
    pub fn settings(&self) -> ProgramSettings {
        ProgramSettings::with_viewport(self.fractal, self.depth, self.viewport())
    }
}

/// Renders one frame of a fractal sketch to a PPM file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct SnapshotCli {
    #[command(flatten)]
    pub sketch: SketchArgs,

    /// Pointer position to apply after the startup frame, as X,Y
    #[arg(long, value_parser = parse_pointer)]
    pub pointer: Option<Point>,

    /// Output file name
    #[arg(short, long, value_hint = ValueHint::FilePath, default_value = "output/fractal.ppm")]
    pub outfile: PathBuf,
}

/// Opens a window that redraws a fractal sketch as the pointer moves.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct GuiCli {
    #[command(flatten)]
    pub sketch: SketchArgs,
}

fn parse_pointer(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;

    let x = x.trim().parse::<i32>().map_err(|err| format!("invalid x '{}': {}", x, err))?;
    let y = y.trim().parse::<i32>().map_err(|err| format!("invalid y '{}': {}", y, err))?;

    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::fractal_params::FractalParams;
    use crate::core::fractals::carpet::variant::CarpetVariant;
    use crate::core::fractals::levy::params::LevyParams;

    #[test]
    fn test_defaults() {
        let cli = SnapshotCli::try_parse_from(["snapshot"]).unwrap();

        assert_eq!(cli.sketch.fractal, FractalKinds::Canopy);
        assert_eq!(cli.sketch.depth, None);
        assert_eq!(cli.sketch.viewport(), Viewport::new(640, 400));
        assert_eq!(cli.pointer, None);
        assert_eq!(cli.outfile, PathBuf::from("output/fractal.ppm"));
    }

    #[test]
    fn test_fractal_and_depth() {
        let cli = SnapshotCli::try_parse_from(["snapshot", "--fractal", "levy", "20"]).unwrap();

        assert_eq!(cli.sketch.settings().params, FractalParams::Levy(LevyParams::new(16)));
        assert_eq!(cli.sketch.viewport(), Viewport::new(500, 500));
    }

    #[test]
    fn test_negative_depth_is_accepted() {
        let cli = GuiCli::try_parse_from(["gui", "--fractal", "carpet-static", "-3"]).unwrap();

        assert_eq!(cli.sketch.depth, Some(-3));
        assert_eq!(
            cli.sketch.settings().params,
            FractalParams::Carpet(CarpetVariant::DepthDriven { depth: 0 })
        );
    }

    #[test]
    fn test_size_overrides() {
        let cli = GuiCli::try_parse_from(["gui", "--fractal", "mandelbrot", "--width", "320"]).unwrap();

        assert_eq!(cli.sketch.viewport(), Viewport::new(320, 400));
    }

    #[test]
    fn test_pointer_parsing() {
        let cli = SnapshotCli::try_parse_from(["snapshot", "--pointer", "120, 45"]).unwrap();

        assert_eq!(cli.pointer, Some(Point::new(120, 45)));
        assert!(SnapshotCli::try_parse_from(["snapshot", "--pointer", "120"]).is_err());
        assert!(SnapshotCli::try_parse_from(["snapshot", "--pointer", "a,1"]).is_err());
    }

    #[test]
    fn test_unknown_fractal_is_rejected() {
        assert!(SnapshotCli::try_parse_from(["snapshot", "--fractal", "julia"]).is_err());
    }
}
