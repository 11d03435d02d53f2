//! Anchor paths and shortest-arc interpolation between anchors

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::{ColorSpacePoint, hue_delta};
use crate::error::{LuxError, Result};

/// Random paths get between this many anchors...
const MIN_RANDOM_ANCHORS: usize = 2;
/// ...and this many (inclusive)
const MAX_RANDOM_ANCHORS: usize = 4;

/// Interpolate between two colors with the same `t` on every axis.
///
/// Hue travels the shortest arc around the wheel, so 350° → 10° passes
/// through 0° rather than 180°. `t` outside [0, 1] extrapolates.
pub fn interpolate(a: ColorSpacePoint, b: ColorSpacePoint, t: f64) -> ColorSpacePoint {
    interpolate_with(a, b, t, t)
}

/// Interpolate with separate parameters for hue and for saturation/lightness
pub fn interpolate_with(
    a: ColorSpacePoint,
    b: ColorSpacePoint,
    hue_t: f64,
    sat_light_t: f64,
) -> ColorSpacePoint {
    debug_assert!(hue_t.is_finite() && sat_light_t.is_finite());
    let hue = a.hue() + hue_delta(a.hue(), b.hue()) * hue_t;
    let saturation = a.saturation() + (b.saturation() - a.saturation()) * sat_light_t;
    let lightness = a.lightness() + (b.lightness() - a.lightness()) * sat_light_t;
    ColorSpacePoint::normalized(hue, saturation, lightness)
}

/// Ordered anchors a palette is sampled from.
///
/// Consecutive anchors form segments; a closed loop adds a final segment from
/// the last anchor back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPath {
    anchors: Vec<ColorSpacePoint>,
    closed_loop: bool,
}

impl AnchorPath {
    /// Build a path from explicit anchors. At least one anchor is required.
    pub fn new(anchors: Vec<ColorSpacePoint>, closed_loop: bool) -> Result<Self> {
        if anchors.is_empty() {
            return Err(LuxError::invalid("anchor path needs at least one anchor"));
        }
        Ok(Self {
            anchors,
            closed_loop,
        })
    }

    /// Open path of 2 to 4 anchors with uniformly random components
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.random_range(MIN_RANDOM_ANCHORS..=MAX_RANDOM_ANCHORS);
        let anchors = (0..count)
            .map(|_| {
                ColorSpacePoint::normalized(
                    rng.random_range(0.0..360.0),
                    rng.random::<f64>(),
                    rng.random::<f64>(),
                )
            })
            .collect();
        Self {
            anchors,
            closed_loop: false,
        }
    }

    /// Reproducible [`AnchorPath::random`]
    pub fn random_seeded(seed: u64) -> Self {
        Self::random(&mut StdRng::seed_from_u64(seed))
    }

    pub fn anchors(&self) -> &[ColorSpacePoint] {
        &self.anchors
    }

    pub fn closed_loop(&self) -> bool {
        self.closed_loop
    }

    pub fn set_closed_loop(&mut self, closed_loop: bool) {
        self.closed_loop = closed_loop;
    }

    /// Append an anchor at the end of the path
    pub fn add_anchor(&mut self, anchor: ColorSpacePoint) {
        self.anchors.push(anchor);
    }

    /// Remove and return the anchor at `index`. The last remaining anchor
    /// cannot be removed.
    pub fn remove_anchor(&mut self, index: usize) -> Result<ColorSpacePoint> {
        if index >= self.anchors.len() {
            return Err(LuxError::invalid(format!(
                "anchor index {} out of range (path has {})",
                index,
                self.anchors.len()
            )));
        }
        if self.anchors.len() == 1 {
            return Err(LuxError::invalid("cannot remove the only anchor"));
        }
        Ok(self.anchors.remove(index))
    }

    /// Number of interpolated segments
    pub fn segment_count(&self) -> usize {
        if self.closed_loop {
            self.anchors.len()
        } else {
            self.anchors.len() - 1
        }
    }

    /// Locate global parameter `u` in [0, 1]: segment index and local `t`.
    /// Returns `None` for a single-anchor path.
    pub(crate) fn locate(&self, u: f64) -> Option<(usize, f64)> {
        let segments = self.segment_count();
        if self.anchors.len() == 1 || segments == 0 {
            return None;
        }
        let scaled = u.clamp(0.0, 1.0) * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        Some((index, scaled - index as f64))
    }

    /// Endpoints of segment `index`
    pub(crate) fn segment(&self, index: usize) -> (ColorSpacePoint, ColorSpacePoint) {
        let next = (index + 1) % self.anchors.len();
        (self.anchors[index], self.anchors[next])
    }

    /// Color at global parameter `u` in [0, 1] with linear spacing
    pub fn point_at(&self, u: f64) -> ColorSpacePoint {
        match self.locate(u) {
            Some((index, t)) => {
                let (a, b) = self.segment(index);
                interpolate(a, b, t)
            }
            None => self.anchors[0],
        }
    }

    /// Rotate every anchor's hue by `delta` degrees, in place
    pub fn shift_hue(&mut self, delta: f64) -> Result<()> {
        if !delta.is_finite() {
            return Err(LuxError::invalid(format!(
                "hue shift must be finite, got {}",
                delta
            )));
        }
        for anchor in &mut self.anchors {
            *anchor = anchor.rotated(delta);
        }
        Ok(())
    }

    /// Copy of this path with every hue rotated by `delta` degrees
    pub fn shifted(&self, delta: f64) -> Result<Self> {
        let mut path = self.clone();
        path.shift_hue(delta)?;
        Ok(path)
    }
}
