//! Hue cycling: rotate the anchors a little every frame and resample

use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::engine::{AnchorPath, Palette, PositionFunctions, generate};
use crate::error::{LuxError, Result};

/// About 60 frames per second
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Owns an anchor path and rotates it by `speed * direction` degrees per tick
#[derive(Debug, Clone)]
pub struct HueAnimator {
    path: AnchorPath,
    size: usize,
    positions: PositionFunctions,
    step: f64,
}

impl HueAnimator {
    /// `speed` is degrees per tick; a negative `speed` or `reverse` turns the other way.
    pub fn new(
        path: AnchorPath,
        size: usize,
        positions: PositionFunctions,
        speed: f64,
        reverse: bool,
    ) -> Result<Self> {
        if size < 1 {
            return Err(LuxError::invalid("sample count must be at least 1"));
        }
        if !speed.is_finite() {
            return Err(LuxError::invalid(format!("speed must be finite, got {}", speed)));
        }
        let direction = if reverse { -1.0 } else { 1.0 };
        Ok(Self {
            path,
            size,
            positions,
            step: speed * direction,
        })
    }

    pub fn path(&self) -> &AnchorPath {
        &self.path
    }

    /// Palette for the current anchors
    pub fn current(&self) -> Result<Palette> {
        generate(&self.path, self.size, self.positions)
    }

    /// Advance one frame and return the new palette
    pub fn tick(&mut self) -> Result<Palette> {
        self.path.shift_hue(self.step)?;
        trace!(step = self.step, "hue tick");
        self.current()
    }

    /// Drive `frames` ticks, sleeping `interval` between them.
    ///
    /// `on_frame` receives the frame number and palette; the loop stops early when
    /// it returns `false`.
    pub fn run<F>(&mut self, frames: usize, interval: Duration, mut on_frame: F) -> Result<()>
    where
        F: FnMut(usize, &Palette) -> bool,
    {
        for frame in 0..frames {
            let palette = self.tick()?;
            if !on_frame(frame, &palette) {
                break;
            }
            if frame + 1 < frames && !interval.is_zero() {
                thread::sleep(interval);
            }
        }
        Ok(())
    }
}
