//! Conversions between engine colors and sRGB, plus contrast helpers

use palette::{FromColor, Hsl, Srgb, encoding};
use serde::{Deserialize, Serialize};

use crate::engine::ColorSpacePoint;
use crate::error::{LuxError, Result};

type SrgbHsl = Hsl<encoding::Srgb, f64>;

/// Color vision deficiency to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Deficiency {
    Protanopia,
    Deuteranopia,
}

impl Deficiency {
    /// Row-major matrix applied to gamma-encoded RGB
    fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            Deficiency::Protanopia => [
                [0.567, 0.433, 0.000],
                [0.558, 0.442, 0.000],
                [0.000, 0.242, 0.758],
            ],
            Deficiency::Deuteranopia => [
                [0.625, 0.375, 0.000],
                [0.700, 0.300, 0.000],
                [0.000, 0.300, 0.700],
            ],
        }
    }
}

/// Gamma-encoded sRGB with float components in [0, 1]
pub fn to_srgb_f64(point: ColorSpacePoint) -> Srgb<f64> {
    let hsl = SrgbHsl::new(point.hue(), point.saturation(), point.lightness());
    Srgb::from_color(hsl)
}

/// 8-bit sRGB
pub fn to_srgb(point: ColorSpacePoint) -> Srgb<u8> {
    to_srgb_f64(point).into_format()
}

/// Lowercase `#rrggbb`
pub fn to_hex(point: ColorSpacePoint) -> String {
    let rgb = to_srgb(point);
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

pub fn from_srgb(rgb: Srgb<f64>) -> ColorSpacePoint {
    let hsl = SrgbHsl::from_color(rgb);
    ColorSpacePoint::normalized(
        hsl.hue.into_positive_degrees(),
        hsl.saturation,
        hsl.lightness,
    )
}

/// Parse `#rrggbb`, `rrggbb` or the 3-digit short forms
pub fn from_hex(hex: &str) -> Result<ColorSpacePoint> {
    let rgb: Srgb<u8> = hex
        .trim()
        .parse()
        .map_err(|e| LuxError::invalid(format!("'{}' is not a hex color: {}", hex, e)))?;
    Ok(from_srgb(rgb.into_format()))
}

/// WCAG 2.x relative luminance
pub fn relative_luminance(point: ColorSpacePoint) -> f64 {
    let lin = to_srgb_f64(point).into_linear();
    0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
}

/// WCAG contrast ratio between two colors, in [1, 21]
pub fn contrast_ratio(a: ColorSpacePoint, b: ColorSpacePoint) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Black or white, whichever reads better on `background` (YIQ brightness)
pub fn contrast_text(background: ColorSpacePoint) -> ColorSpacePoint {
    let rgb = to_srgb(background);
    let yiq = (f64::from(rgb.red) * 299.0 + f64::from(rgb.green) * 587.0 + f64::from(rgb.blue) * 114.0)
        / 1000.0;
    if yiq >= 128.0 {
        ColorSpacePoint::normalized(0.0, 0.0, 0.0)
    } else {
        ColorSpacePoint::normalized(0.0, 0.0, 1.0)
    }
}

/// Interior materials that suit a color of this lightness
pub fn material_suggestion(point: ColorSpacePoint) -> &'static str {
    match point.lightness() {
        l if l < 0.2 => "Dark Wood, Slate",
        l if l < 0.5 => "Concrete, Leather",
        l if l < 0.8 => "Light Wood, Fabric",
        _ => "Marble, Linen",
    }
}

/// Approximate how `point` looks to someone with the given deficiency
pub fn simulate(point: ColorSpacePoint, deficiency: Deficiency) -> ColorSpacePoint {
    let rgb = to_srgb_f64(point);
    let input = [rgb.red, rgb.green, rgb.blue];
    let m = deficiency.matrix();
    let mut out = [0.0f64; 3];
    for (value, row) in out.iter_mut().zip(&m) {
        *value = row
            .iter()
            .zip(&input)
            .map(|(w, c)| w * c)
            .sum::<f64>()
            .clamp(0.0, 1.0);
    }
    from_srgb(Srgb::new(out[0], out[1], out[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(h: f64, s: f64, l: f64) -> ColorSpacePoint {
        ColorSpacePoint::new(h, s, l).unwrap()
    }

    #[test]
    fn test_primaries_to_hex() {
        assert_eq!(to_hex(point(0.0, 1.0, 0.5)), "#ff0000");
        assert_eq!(to_hex(point(120.0, 1.0, 0.5)), "#00ff00");
        assert_eq!(to_hex(point(240.0, 1.0, 0.5)), "#0000ff");
        assert_eq!(to_hex(point(0.0, 0.0, 1.0)), "#ffffff");
        assert_eq!(to_hex(point(0.0, 0.0, 0.0)), "#000000");
    }

    #[test]
    fn test_from_hex_primaries() {
        let red = from_hex("#ff0000").unwrap();
        assert!(red.hue().abs() < 1e-9);
        assert!((red.saturation() - 1.0).abs() < 1e-9);
        assert!((red.lightness() - 0.5).abs() < 1e-9);

        let blue = from_hex("0000ff").unwrap();
        assert!((blue.hue() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(from_hex("#zzzzzz"), Err(LuxError::InvalidArgument(_))));
        assert!(from_hex("").is_err());
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio(point(0.0, 0.0, 0.0), point(0.0, 0.0, 1.0));
        assert!((ratio - 21.0).abs() < 1e-9, "got {}", ratio);
        let same = contrast_ratio(point(200.0, 0.5, 0.5), point(200.0, 0.5, 0.5));
        assert!((same - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_text_picks_readable_color() {
        // Yellow is bright, navy is dark
        assert_eq!(contrast_text(point(60.0, 1.0, 0.5)).lightness(), 0.0);
        assert_eq!(contrast_text(point(240.0, 1.0, 0.2)).lightness(), 1.0);
    }

    #[test]
    fn test_material_suggestion_band_edges() {
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.0)), "Dark Wood, Slate");
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.199)), "Dark Wood, Slate");
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.2)), "Concrete, Leather");
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.499)), "Concrete, Leather");
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.5)), "Light Wood, Fabric");
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.799)), "Light Wood, Fabric");
        assert_eq!(material_suggestion(point(0.0, 0.5, 0.8)), "Marble, Linen");
        assert_eq!(material_suggestion(point(0.0, 0.5, 1.0)), "Marble, Linen");
    }

    #[test]
    fn test_simulation_keeps_grays() {
        let gray = point(0.0, 0.0, 0.5);
        for deficiency in [Deficiency::Protanopia, Deficiency::Deuteranopia] {
            let seen = simulate(gray, deficiency);
            assert!((seen.lightness() - 0.5).abs() < 1e-9);
            assert!(seen.saturation() < 1e-9);
        }
    }

    #[test]
    fn test_protanopia_merges_red_and_green() {
        let red = simulate(point(0.0, 1.0, 0.5), Deficiency::Protanopia);
        let green = simulate(point(120.0, 1.0, 0.5), Deficiency::Protanopia);
        // Red and green collapse toward the same hue family
        assert!(crate::engine::hue_delta(red.hue(), green.hue()).abs() < 60.0);
    }
}
