//! Color wheel chart: one doughnut per lightness ring, one slice per hue section

use charming::{
    Chart,
    component::Title,
    datatype::DataPointItem,
    element::{Color, ItemStyle, Label, LabelLine, TextStyle},
    series::Pie,
};

use super::colors::theme;
use super::{WHEEL_CHART_SIZE, save_chart};
use crate::color::to_hex;
use crate::engine::Wheel;
use crate::error::{LuxError, Result};

/// Radius (percent) of the hole in the middle of the wheel
const INNER_RADIUS_PCT: f64 = 12.0;
/// Radius (percent) of the outermost ring edge
const OUTER_RADIUS_PCT: f64 = 85.0;

/// Render `wheel` with ring 0 innermost
pub fn render_wheel_chart(
    wheel: &Wheel,
    title: &str,
    dark_theme: bool,
    output_path: &str,
) -> Result<()> {
    if wheel.rings.is_empty() {
        return Err(LuxError::Chart("wheel has no rings".to_string()));
    }
    let theme = theme(dark_theme);
    let ring_width = (OUTER_RADIUS_PCT - INNER_RADIUS_PCT) / wheel.rings.len() as f64;

    let mut chart = Chart::new()
        .background_color(Color::Value(theme.background.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(format!(
                    "{} hue sections x {} lightness rings",
                    wheel.rings[0].buckets.len(),
                    wheel.rings.len()
                ))
                .left("center")
                .top("2%")
                .text_style(TextStyle::new().color(theme.text).font_size(36))
                .subtext_style(TextStyle::new().color(theme.text).font_size(24)),
        );

    for ring in &wheel.rings {
        let inner = INNER_RADIUS_PCT + ring.index as f64 * ring_width;
        let outer = inner + ring_width;
        let inner_pct = format!("{:.1}%", inner);
        let outer_pct = format!("{:.1}%", outer);

        let slices: Vec<DataPointItem> = wheel
            .ring_slots(ring)
            .into_iter()
            .zip(&ring.buckets)
            .map(|(color, bucket)| {
                let hex = to_hex(color);
                DataPointItem::new(1)
                    .name(format!(
                        "{:.0}-{:.0}",
                        bucket.hue_range_start, bucket.hue_range_end
                    ))
                    .item_style(ItemStyle::new().color(hex.as_str()))
            })
            .collect();

        chart = chart.series(
            Pie::new()
                .name(format!("ring {}", ring.index))
                .radius(vec![inner_pct.as_str(), outer_pct.as_str()])
                .center(vec!["50%", "54%"])
                .avoid_label_overlap(false)
                .label(Label::new().show(false))
                .label_line(LabelLine::new().show(false))
                .item_style(ItemStyle::new().border_color(theme.grid).border_width(1))
                .data(slices),
        );
    }

    save_chart(&chart, WHEEL_CHART_SIZE, WHEEL_CHART_SIZE, output_path)
}
