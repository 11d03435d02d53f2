//! Position functions: reparameterization curves applied along each segment

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Curve mapping a segment parameter `t` in [0, 1] onto [0, 1].
///
/// Every curve fixes both endpoints (`f(0) = 0`, `f(1) = 1`); they differ in
/// where samples cluster. Convex curves (`Exponential` .. `Quartic`) bunch
/// samples near the start anchor, concave ones (`Sinusoidal`, `Arc`) near the
/// end anchor, and `SmoothStep` near both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PositionFunction {
    #[default]
    Linear,
    Exponential,
    Quadratic,
    Cubic,
    Quartic,
    Sinusoidal,
    Asinusoidal,
    Arc,
    SmoothStep,
}

impl PositionFunction {
    /// All curves, in declaration order
    pub const ALL: [PositionFunction; 9] = [
        PositionFunction::Linear,
        PositionFunction::Exponential,
        PositionFunction::Quadratic,
        PositionFunction::Cubic,
        PositionFunction::Quartic,
        PositionFunction::Sinusoidal,
        PositionFunction::Asinusoidal,
        PositionFunction::Arc,
        PositionFunction::SmoothStep,
    ];

    /// Warp `t`. Inputs are clamped to [0, 1] first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            PositionFunction::Linear => t,
            PositionFunction::Exponential => t.powi(2),
            PositionFunction::Quadratic => t.powi(3),
            PositionFunction::Cubic => t.powi(4),
            PositionFunction::Quartic => t.powi(5),
            PositionFunction::Sinusoidal => (t * FRAC_PI_2).sin(),
            PositionFunction::Asinusoidal => t.asin() / FRAC_PI_2,
            PositionFunction::Arc => (1.0 - (1.0 - t).powi(2)).sqrt(),
            PositionFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Position function per axis: one for hue, one shared by saturation and lightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionFunctions {
    pub hue: PositionFunction,
    pub sat_light: PositionFunction,
}

impl PositionFunctions {
    pub fn new(hue: PositionFunction, sat_light: PositionFunction) -> Self {
        Self { hue, sat_light }
    }

    /// Same curve on every axis
    pub fn uniform(f: PositionFunction) -> Self {
        Self::new(f, f)
    }
}
