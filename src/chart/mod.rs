//! Chart rendering for palettes and color wheels

mod colors;
mod swatches;
mod wheel;

pub use swatches::render_palette_chart;
pub use wheel::render_wheel_chart;

use std::path::Path;

use charming::{Chart, ImageRenderer, renderer::ImageFormat};

use crate::error::{LuxError, Result};

/// Palette chart dimensions (2x for Retina quality)
pub(super) const SWATCH_CHART_WIDTH: u32 = 2400;
pub(super) const SWATCH_CHART_HEIGHT: u32 = 900;

/// Wheel charts are square
pub(super) const WHEEL_CHART_SIZE: u32 = 1600;

/// Save as SVG when the path ends in `.svg`, PNG otherwise
pub(super) fn save_chart(chart: &Chart, width: u32, height: u32, output_path: &str) -> Result<()> {
    let is_svg = Path::new(output_path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let mut renderer = ImageRenderer::new(width, height);
    let saved = if is_svg {
        renderer.save(chart, output_path)
    } else {
        renderer.save_format(ImageFormat::Png, chart, output_path)
    };
    saved.map_err(|e| LuxError::Chart(e.to_string()))
}
