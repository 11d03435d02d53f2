//! Palette swatch chart (one bar per color)

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, Color, ItemStyle, SplitLine, TextStyle},
    series::Bar,
};

use super::colors::theme;
use super::{SWATCH_CHART_HEIGHT, SWATCH_CHART_WIDTH, save_chart};
use crate::color::to_hex;
use crate::engine::Palette;
use crate::error::{LuxError, Result};

/// Render `palette` as a row of swatches labelled with their hex codes
pub fn render_palette_chart(
    palette: &Palette,
    title: &str,
    dark_theme: bool,
    output_path: &str,
) -> Result<()> {
    if palette.is_empty() {
        return Err(LuxError::Chart("no colors to render".to_string()));
    }
    let theme = theme(dark_theme);
    let hexes: Vec<String> = palette.iter().map(|c| to_hex(*c)).collect();

    let swatches: Vec<DataPointItem> = hexes
        .iter()
        .map(|hex| {
            DataPointItem::new(1)
                .name(hex.as_str())
                .item_style(ItemStyle::new().color(hex.as_str()))
        })
        .collect();

    let chart = Chart::new()
        .background_color(Color::Value(theme.background.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(format!("{} colors", hexes.len()))
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(theme.text).font_size(36))
                .subtext_style(TextStyle::new().color(theme.text).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("8%")
                .top("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(hexes)
                .axis_label(AxisLabel::new().color(theme.text).font_size(22)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .max(1)
                .axis_label(AxisLabel::new().show(false))
                .split_line(SplitLine::new().show(false)),
        )
        .series(Bar::new().name("swatches").data(swatches));

    save_chart(&chart, SWATCH_CHART_WIDTH, SWATCH_CHART_HEIGHT, output_path)
}
