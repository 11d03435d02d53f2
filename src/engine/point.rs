//! Points in hue/saturation/lightness space

use serde::{Deserialize, Serialize};

use crate::error::{LuxError, Result};

/// Full turn of the hue axis in degrees
pub const HUE_TURN: f64 = 360.0;

/// Wrap a finite hue into [0, 360)
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(HUE_TURN);
    // rem_euclid of a tiny negative value rounds up to exactly 360, and -0.0 stays -0.0
    if wrapped >= HUE_TURN || wrapped == 0.0 { 0.0 } else { wrapped }
}

/// Signed shortest angular distance from `from` to `to`, in (-180, 180]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(HUE_TURN);
    if delta > HUE_TURN / 2.0 {
        delta - HUE_TURN
    } else {
        delta
    }
}

/// A color expressed as hue (degrees), saturation and lightness.
///
/// Values are normalized on construction: hue wraps into [0, 360) and
/// saturation/lightness are clamped into [0, 1]. Serialized as the 3-tuple
/// `[hue, saturation, lightness]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct ColorSpacePoint {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl ColorSpacePoint {
    /// Build a point, rejecting non-finite hue and NaN saturation/lightness.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        if !hue.is_finite() {
            return Err(LuxError::invalid(format!("hue must be finite, got {}", hue)));
        }
        if saturation.is_nan() {
            return Err(LuxError::invalid("saturation is NaN"));
        }
        if lightness.is_nan() {
            return Err(LuxError::invalid("lightness is NaN"));
        }
        Ok(Self::normalized(hue, saturation, lightness))
    }

    /// Normalize already-validated components
    pub(crate) fn normalized(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Same saturation and lightness, hue rotated by `delta` degrees
    pub(crate) fn rotated(self, delta: f64) -> Self {
        Self {
            hue: wrap_hue(self.hue + delta),
            ..self
        }
    }
}

impl TryFrom<[f64; 3]> for ColorSpacePoint {
    type Error = LuxError;

    fn try_from([h, s, l]: [f64; 3]) -> Result<Self> {
        Self::new(h, s, l)
    }
}

impl From<ColorSpacePoint> for [f64; 3] {
    fn from(p: ColorSpacePoint) -> Self {
        [p.hue, p.saturation, p.lightness]
    }
}

impl std::str::FromStr for ColorSpacePoint {
    type Err = LuxError;

    /// Parse `"H,S,L"`, e.g. `"210,0.8,0.45"`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(LuxError::invalid(format!(
                "expected H,S,L but got '{}'",
                s
            )));
        }
        let mut values = [0.0f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| LuxError::invalid(format!("'{}' is not a number", part)))?;
        }
        Self::try_from(values)
    }
}
