//! Palette sampling along an anchor path

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::path::{AnchorPath, interpolate, interpolate_with};
use super::point::ColorSpacePoint;
use super::position::PositionFunctions;
use crate::error::{LuxError, Result};

/// Ordered colors sampled from an [`AnchorPath`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<ColorSpacePoint>);

impl Palette {
    pub fn new(colors: Vec<ColorSpacePoint>) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[ColorSpacePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSpacePoint> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<ColorSpacePoint> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorSpacePoint;
    type IntoIter = std::slice::Iter<'a, ColorSpacePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sample `n` colors from `path`.
///
/// Samples sit at `u = k / n` for `k = 0..n`. The final anchor of an open path
/// is therefore never reached exactly, and a closed loop never repeats its
/// first color. Pure: equal inputs always give equal palettes.
pub fn generate(path: &AnchorPath, n: usize, positions: PositionFunctions) -> Result<Palette> {
    if n < 1 {
        return Err(LuxError::invalid("sample count must be at least 1"));
    }

    let colors: Vec<ColorSpacePoint> = (0..n)
        .map(|k| {
            let u = k as f64 / n as f64;
            match path.locate(u) {
                Some((index, t)) => {
                    let (a, b) = path.segment(index);
                    interpolate_with(a, b, positions.hue.apply(t), positions.sat_light.apply(t))
                }
                None => path.anchors()[0],
            }
        })
        .collect();

    debug!(
        anchors = path.anchors().len(),
        closed_loop = path.closed_loop(),
        samples = n,
        ?positions,
        "generated palette"
    );

    Ok(Palette(colors))
}

/// Mix every color with its successor by `ratio` in [0, 1].
///
/// `ratio = 0` keeps the palette, `ratio = 1` moves each color onto the next one.
/// The last color has no successor and is kept as is. Hue follows the shortest arc.
pub fn blend(palette: &Palette, ratio: f64) -> Result<Palette> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(LuxError::invalid(format!(
            "blend ratio must be between 0 and 1, got {}",
            ratio
        )));
    }

    let colors = palette.colors();
    let blended = colors
        .iter()
        .enumerate()
        .map(|(i, &color)| match colors.get(i + 1) {
            Some(&next) => interpolate(color, next, ratio),
            None => color,
        })
        .collect();

    debug!(colors = colors.len(), ratio, "blended palette");
    Ok(Palette(blended))
}
