mod mode;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luxwheel::color::Deficiency;
use luxwheel::config::Settings;
use tracing_subscriber::EnvFilter;

use mode::{
    Context, GenerateOptions, LibraryCommand, PathArgs, WheelOptions, validate_image_path,
};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "luxwheel",
    version,
    about = "Color palette generator with anchor interpolation and ring/segment color wheels",
    after_help = "Examples:
  luxwheel generate                                      Random 2-4 anchor palette
  luxwheel generate -a 0,1,0.5 -a 180,1,0.5 -n 8         Explicit anchors, 8 colors
  luxwheel generate --hex '#1d3557' --hex '#e63946' --closed
  luxwheel generate -s 42 --hue-position smooth-step --image palette.png
  luxwheel generate -s 42 --blend 0.3 --materials        Blended palette with materials
  luxwheel wheel -s 7 -n 40 --sections 12 --levels 4     Ring/segment wheel
  luxwheel animate -s 7 --frames 240 --speed 1.5         Hue cycling in the terminal
  luxwheel simulate -s 7 --deficiency protanopia         Color vision preview
  luxwheel library save Dusk -s 3                        Save to the palette library"
)]
struct Cli {
    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Render charts on a light background
    #[arg(long, global = true)]
    light: bool,

    /// Settings file [default: $LUXWHEEL_CONFIG_PATH or ./luxwheel.json]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a palette from anchors
    Generate {
        #[command(flatten)]
        path: PathArgs,

        /// Print the palette as JSON [hue, saturation, lightness] triples
        #[arg(long)]
        json: bool,

        /// Mix each color with the next one by RATIO (0-1)
        #[arg(long, value_name = "RATIO")]
        blend: Option<f64>,

        /// Suggest interior materials for each color
        #[arg(long)]
        materials: bool,

        /// Save a swatch chart (PNG, or SVG for *.svg paths)
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },
    /// Partition a palette into lightness rings x hue sections
    Wheel {
        #[command(flatten)]
        path: PathArgs,

        /// Number of hue sections
        #[arg(long, default_value = "10", value_name = "N")]
        sections: usize,

        /// Number of lightness rings
        #[arg(long, default_value = "3", value_name = "N")]
        levels: usize,

        /// Put the lightest ring first
        #[arg(long)]
        invert: bool,

        /// Save a wheel chart (PNG, or SVG for *.svg paths)
        #[arg(long, value_name = "PATH")]
        image: Option<String>,
    },
    /// Cycle anchor hues and redraw the palette every frame
    Animate {
        #[command(flatten)]
        path: PathArgs,

        /// Number of frames to draw
        #[arg(long, default_value = "120", value_name = "N")]
        frames: usize,

        /// Degrees of hue rotation per frame
        #[arg(long, default_value = "0.75", value_name = "DEGREES")]
        speed: f64,

        /// Rotate hues backwards
        #[arg(long)]
        reverse: bool,
    },
    /// Preview a palette under a color vision deficiency
    Simulate {
        #[command(flatten)]
        path: PathArgs,

        #[arg(long, value_enum)]
        deficiency: Deficiency,
    },
    /// Manage saved palettes
    Library {
        #[command(subcommand)]
        command: LibraryCommand,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    // Handle --no-color
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut settings = Settings::load(cli.config.as_deref());
    if cli.light {
        settings.dark_theme = false;
    }
    let ctx = Context {
        settings,
        quiet: cli.quiet,
    };

    // Validate options clap cannot express
    let image = match &cli.command {
        Command::Generate { image, .. } | Command::Wheel { image, .. } => image.as_deref(),
        _ => None,
    };
    if let Some(path) = image
        && let Err(e) = validate_image_path(path)
    {
        print_error(&e);
        std::process::exit(1);
    }

    if let Command::Wheel {
        sections, levels, ..
    } = &cli.command
    {
        if *sections == 0 {
            print_error("--sections must be at least 1");
            std::process::exit(1);
        }
        if *levels == 0 {
            print_error("--levels must be at least 1");
            std::process::exit(1);
        }
    }

    if let Command::Generate {
        blend: Some(ratio), ..
    } = &cli.command
        && !(0.0..=1.0).contains(ratio)
    {
        print_error("--blend must be between 0 and 1");
        std::process::exit(1);
    }

    if let Command::Animate { speed, .. } = &cli.command
        && !speed.is_finite()
    {
        print_error("--speed must be a finite number");
        std::process::exit(1);
    }

    // Dispatch to appropriate mode
    match &cli.command {
        Command::Generate {
            path,
            json,
            blend,
            materials,
            image,
        } => {
            let opts = GenerateOptions {
                json: *json,
                blend: *blend,
                materials: *materials,
                image_path: image.as_deref(),
            };
            mode::run_generate(&ctx, path, &opts);
        }
        Command::Wheel {
            path,
            sections,
            levels,
            invert,
            image,
        } => {
            let opts = WheelOptions {
                sections: *sections,
                levels: *levels,
                invert: *invert,
                image_path: image.as_deref(),
            };
            mode::run_wheel(&ctx, path, &opts);
        }
        Command::Animate {
            path,
            frames,
            speed,
            reverse,
        } => mode::run_animate(&ctx, path, *frames, *speed, *reverse),
        Command::Simulate { path, deficiency } => mode::run_simulate(&ctx, path, *deficiency),
        Command::Library { command } => mode::run_library(&ctx, command),
    }
}
