//! Color vision deficiency preview

use luxwheel::color::{Deficiency, simulate};
use luxwheel::engine::Palette;

use super::{Context, PathArgs, build_palette};
use crate::output::{print_anchors, print_simulation};

/// Print each palette color next to how it appears with `deficiency`
pub fn run_simulate(ctx: &Context, args: &PathArgs, deficiency: Deficiency) {
    let (path, palette) = build_palette(args, &ctx.settings);

    if !ctx.quiet {
        print_anchors(&path);
    }

    let simulated = Palette::new(palette.iter().map(|c| simulate(*c, deficiency)).collect());
    let label = match deficiency {
        Deficiency::Protanopia => "Protanopia",
        Deficiency::Deuteranopia => "Deuteranopia",
    };
    print_simulation(&palette, &simulated, label);
}
