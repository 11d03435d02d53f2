//! Hue cycling animation in the terminal

use std::io::{self, Write};

use luxwheel::animation::{FRAME_INTERVAL, HueAnimator};

use super::{Context, PathArgs, build_palette};
use crate::output::{palette_strip, print_anchors, print_error, print_warning};

/// Terminal cell width of one palette color
const CELL_WIDTH: usize = 4;

/// Animate the palette by rotating anchor hues every frame
pub fn run_animate(ctx: &Context, args: &PathArgs, frames: usize, speed: f64, reverse: bool) {
    let (path, first) = build_palette(args, &ctx.settings);

    if !ctx.quiet {
        print_anchors(&path);
    }

    if ctx.settings.reduce_motion {
        print_warning("reduce_motion is set; showing a single frame");
        println!("{}", palette_strip(&first, CELL_WIDTH));
        return;
    }

    let mut animator =
        HueAnimator::new(path, first.len(), args.positions(), speed, reverse).unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        });

    let mut stdout = io::stdout();
    let result = animator.run(frames, FRAME_INTERVAL, |_, palette| {
        // Stop quietly if stdout goes away (e.g. piped into head)
        write!(stdout, "\r{}", palette_strip(palette, CELL_WIDTH))
            .and_then(|()| stdout.flush())
            .is_ok()
    });
    println!();

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
