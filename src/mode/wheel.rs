//! Color wheel mode (lightness rings x hue sections)

use luxwheel::chart;
use luxwheel::engine::{ColorSpacePoint, WheelPartitioner};

use super::{Context, PathArgs, build_palette};
use crate::output::{print_anchors, print_error, print_wheel, print_wheel_summary};

/// Terminal cell width of one hue section
const CELL_WIDTH: usize = 2;

/// Empty-bucket color matching the chart background
fn placeholder(dark_theme: bool) -> luxwheel::Result<ColorSpacePoint> {
    let lightness = if dark_theme { 0.04 } else { 0.95 };
    ColorSpacePoint::new(40.0, 0.1, lightness)
}

/// Wheel layout options
pub struct WheelOptions<'a> {
    pub sections: usize,
    pub levels: usize,
    pub invert: bool,
    pub image_path: Option<&'a str>,
}

/// Partition a palette into a wheel and print it
pub fn run_wheel(ctx: &Context, args: &PathArgs, opts: &WheelOptions<'_>) {
    let (path, palette) = build_palette(args, &ctx.settings);

    let partitioner = placeholder(ctx.settings.dark_theme)
        .and_then(|background| {
            WheelPartitioner::new(opts.sections, opts.levels, opts.invert, background)
        })
        .unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        });
    let wheel = partitioner.partition(&palette);

    if !ctx.quiet {
        print_anchors(&path);
    }
    println!("[Wheel]");
    print_wheel(&wheel, CELL_WIDTH);

    if !ctx.quiet {
        println!();
        print_wheel_summary(&wheel, palette.len());
    }

    // Output chart if requested
    if let Some(path) = opts.image_path {
        if let Err(e) = chart::render_wheel_chart(&wheel, "Color Wheel", ctx.settings.dark_theme, path)
        {
            print_error(&e.to_string());
            std::process::exit(1);
        }
        eprintln!("Chart saved to: {}", path);
    }
}
