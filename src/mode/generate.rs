//! Palette generation mode

use luxwheel::chart;
use luxwheel::engine::blend;

use super::{Context, PathArgs, build_palette};
use crate::output::{
    print_anchors, print_error, print_legend, print_materials, print_palette,
    print_palette_header, print_palette_json,
};

/// Generate output options
pub struct GenerateOptions<'a> {
    pub json: bool,
    pub blend: Option<f64>,
    pub materials: bool,
    pub image_path: Option<&'a str>,
}

/// Generate a palette and print it (and optionally save a chart)
pub fn run_generate(ctx: &Context, args: &PathArgs, opts: &GenerateOptions<'_>) {
    let (path, palette) = build_palette(args, &ctx.settings);

    let palette = match opts.blend {
        Some(ratio) => blend(&palette, ratio).unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        }),
        None => palette,
    };

    if opts.json {
        if let Err(e) = print_palette_json(&palette) {
            print_error(&e);
            std::process::exit(1);
        }
    } else {
        if !ctx.quiet {
            print_anchors(&path);
        }
        match opts.blend {
            Some(ratio) => println!("[Palette, blended {:.0}%]", ratio * 100.0),
            None => println!("[Palette]"),
        }
        print_palette_header();
        print_palette(&palette);

        if opts.materials {
            println!();
            print_materials(&palette);
        }

        if !ctx.quiet {
            println!();
            print_legend();
        }
    }

    // Output chart if requested
    if let Some(path) = opts.image_path {
        if let Err(e) =
            chart::render_palette_chart(&palette, "Palette", ctx.settings.dark_theme, path)
        {
            print_error(&e.to_string());
            std::process::exit(1);
        }
        eprintln!("Chart saved to: {}", path);
    }
}
