use colored::*;
use luxwheel::color::{contrast_text, material_suggestion, to_hex, to_srgb};
use luxwheel::engine::{AnchorPath, ColorSpacePoint, Palette, Wheel};
use luxwheel::store::SavedPalette;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Text painted on a background of `color`, in a contrasting foreground
fn swatch(text: &str, color: ColorSpacePoint) -> ColoredString {
    let bg = to_srgb(color);
    let fg = to_srgb(contrast_text(color));
    text.truecolor(fg.red, fg.green, fg.blue)
        .on_truecolor(bg.red, bg.green, bg.blue)
}

/// Solid block of `color`
fn block(width: usize, color: ColorSpacePoint) -> ColoredString {
    let bg = to_srgb(color);
    " ".repeat(width).on_truecolor(bg.red, bg.green, bg.blue)
}

pub(crate) fn format_hsl(color: &ColorSpacePoint) -> String {
    format!(
        "{:>6.1}° {:>5.1}% {:>5.1}%",
        color.hue(),
        color.saturation() * 100.0,
        color.lightness() * 100.0
    )
}

pub(crate) fn print_anchors(path: &AnchorPath) {
    println!(
        "Anchors ({}):",
        if path.closed_loop() { "closed loop" } else { "open" }
    );
    for (i, anchor) in path.anchors().iter().enumerate() {
        println!("  {:>2}: {}  {}", i + 1, format_hsl(anchor), to_hex(*anchor));
    }
    println!();
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn print_palette_header() {
    println!("{}", style_label("  #   swatch     hex        hue    sat   light"));
    print_separator(48);
}

pub(crate) fn print_palette(palette: &Palette) {
    for (i, color) in palette.iter().enumerate() {
        let hex = to_hex(*color);
        println!(
            "{:>3}   {}  {}  {}",
            i + 1,
            swatch(&format!(" {} ", hex), *color),
            hex,
            format_hsl(color)
        );
    }
}

pub(crate) fn print_materials(palette: &Palette) {
    println!("{}", style_label("[Materials]"));
    for (i, color) in palette.iter().enumerate() {
        println!(
            "{:>3}   {}  {}",
            i + 1,
            block(4, *color),
            material_suggestion(*color)
        );
    }
}

/// Compact one-line rendering, used for animation frames
pub(crate) fn palette_strip(palette: &Palette, cell_width: usize) -> String {
    palette
        .iter()
        .map(|c| block(cell_width, *c).to_string())
        .collect()
}

pub(crate) fn print_palette_json(palette: &Palette) -> Result<(), String> {
    let json = serde_json::to_string_pretty(palette).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

/// One text row per ring, one block per hue section
pub(crate) fn print_wheel(wheel: &Wheel, cell_width: usize) {
    for (ring, slots) in wheel.rings.iter().zip(wheel.slots()) {
        let label = format!(
            "R{:<2} {:>3.0}-{:>3.0}% ",
            ring.index,
            ring.lightness_range_start * 100.0,
            ring.lightness_range_end * 100.0
        );
        let cells: String = slots
            .into_iter()
            .map(|c| block(cell_width, c).to_string())
            .collect();
        let filled = ring.buckets.iter().filter(|b| !b.colors.is_empty()).count();
        println!(
            "{}{} {}/{}",
            style_label(&label),
            cells,
            filled,
            ring.buckets.len()
        );
    }
}

pub(crate) fn print_wheel_summary(wheel: &Wheel, palette_len: usize) {
    let sections = wheel.rings.first().map_or(0, |r| r.buckets.len());
    println!(
        "{} rings x {} hue sections, {} of {} colors placed",
        wheel.rings.len(),
        sections,
        wheel.assigned_count(),
        palette_len
    );
}

pub(crate) fn print_saved(palettes: &[SavedPalette]) {
    if palettes.is_empty() {
        println!("No saved palettes.");
        return;
    }
    for saved in palettes {
        println!(
            "{}  {}  {}",
            style_label(&saved.name),
            palette_strip(&saved.palette(), 3),
            saved.id.dimmed()
        );
    }
}

pub(crate) fn print_simulation(original: &Palette, simulated: &Palette, label: &str) {
    println!("{}", style_label(&format!("Original    {}", label)));
    for (before, after) in original.iter().zip(simulated) {
        println!(
            "  {} {}   {} {}",
            block(4, *before),
            to_hex(*before),
            block(4, *after),
            to_hex(*after)
        );
    }
}

pub(crate) fn print_legend() {
    println!("Samples are taken at u = k/n along the anchor path (k = 0..n-1).");
    println!("Hue follows the shortest arc between anchors; S/L interpolate linearly.");
    println!("Wheel rows are lightness rings; empty hue sections show the background color.");
}
