//! CLI mode implementations

mod animate;
mod generate;
mod library;
mod simulate;
mod wheel;

pub use animate::run_animate;
pub use generate::{GenerateOptions, run_generate};
pub use library::{LibraryCommand, run_library};
pub use simulate::run_simulate;
pub use wheel::{WheelOptions, run_wheel};

use clap::Args;
use luxwheel::color::from_hex;
use luxwheel::config::Settings;
use luxwheel::engine::{
    AnchorPath, ColorSpacePoint, Palette, PositionFunction, PositionFunctions, generate,
};

use crate::output::print_error;

/// Options shared by every mode that builds a palette
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Anchor color as H,S,L (hue in degrees, saturation/lightness in 0-1). Repeatable.
    #[arg(short, long = "anchor", value_name = "H,S,L", allow_hyphen_values = true)]
    pub anchors: Vec<ColorSpacePoint>,

    /// Anchor color as hex (#rrggbb). Repeatable, appended after --anchor values.
    #[arg(long = "hex", value_name = "HEX")]
    pub hexes: Vec<String>,

    /// Interpolate from the last anchor back to the first
    #[arg(short, long)]
    pub closed: bool,

    /// Seed for random anchors (used when no anchors are given)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of palette colors [default: from settings]
    #[arg(short = 'n', long = "points", value_name = "N")]
    pub points: Option<usize>,

    /// Position function for hue
    #[arg(long, value_enum, default_value_t = PositionFunction::Linear)]
    pub hue_position: PositionFunction,

    /// Position function for saturation and lightness
    #[arg(long, value_enum, default_value_t = PositionFunction::Linear)]
    pub sat_light_position: PositionFunction,
}

impl PathArgs {
    pub fn positions(&self) -> PositionFunctions {
        PositionFunctions::new(self.hue_position, self.sat_light_position)
    }

    pub fn points(&self, settings: &Settings) -> usize {
        self.points.unwrap_or(settings.num_points)
    }

    /// Anchors from the command line, or random ones
    pub fn build_path(&self) -> Result<AnchorPath, String> {
        let mut anchors = self.anchors.clone();
        for hex in &self.hexes {
            anchors.push(from_hex(hex).map_err(|e| e.to_string())?);
        }

        if !anchors.is_empty() {
            return AnchorPath::new(anchors, self.closed).map_err(|e| e.to_string());
        }

        let mut path = match self.seed {
            Some(seed) => AnchorPath::random_seeded(seed),
            None => AnchorPath::random(&mut rand::rng()),
        };
        path.set_closed_loop(self.closed);
        Ok(path)
    }
}

/// Settings plus global flags, handed to every mode
pub struct Context {
    pub settings: Settings,
    pub quiet: bool,
}

/// Validate path options that clap cannot express
pub fn validate_path_args(args: &PathArgs) -> Result<(), String> {
    if args.seed.is_some() && (!args.anchors.is_empty() || !args.hexes.is_empty()) {
        return Err("--seed cannot be used with explicit anchors".to_string());
    }
    if args.points == Some(0) {
        return Err("--points must be at least 1".to_string());
    }
    Ok(())
}

/// Build the path and palette, or exit with an error
pub fn build_palette(args: &PathArgs, settings: &Settings) -> (AnchorPath, Palette) {
    let result = validate_path_args(args).and_then(|()| {
        let path = args.build_path()?;
        let palette =
            generate(&path, args.points(settings), args.positions()).map_err(|e| e.to_string())?;
        Ok((path, palette))
    });
    result.unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    })
}

/// Check that the parent directory of an image path exists
pub fn validate_image_path(path: &str) -> Result<(), String> {
    use std::path::Path;
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!("Directory does not exist: {}", parent.display()));
    }
    Ok(())
}
