//! Ring/segment partitioning of a palette for radial wheels
//!
//! A wheel is a grid of lightness rings × hue sections. Each palette color
//! lands in exactly one bucket: a value sitting on the boundary between two
//! bands belongs to the lower band (the first one whose inclusive range
//! `upper - width ..= upper` contains it).

use tracing::debug;

use super::point::{ColorSpacePoint, HUE_TURN};
use super::sampler::Palette;
use crate::error::{LuxError, Result};

/// One hue section of one lightness ring
#[derive(Debug, Clone, PartialEq)]
pub struct WheelBucket {
    pub hue_range_start: f64,
    pub hue_range_end: f64,
    pub lightness_ring_index: usize,
    /// Palette colors in this bucket, in palette order
    pub colors: Vec<ColorSpacePoint>,
}

impl WheelBucket {
    /// First palette color that fell into this bucket
    pub fn representative(&self) -> Option<ColorSpacePoint> {
        self.colors.first().copied()
    }
}

/// A lightness band with its hue buckets
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub index: usize,
    pub lightness_range_start: f64,
    pub lightness_range_end: f64,
    /// One bucket per hue section, ordered by hue
    pub buckets: Vec<WheelBucket>,
}

/// Output of [`WheelPartitioner::partition`]
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub rings: Vec<Ring>,
    /// Color used for buckets no palette color fell into
    pub placeholder: ColorSpacePoint,
}

impl Wheel {
    /// One color per bucket for every ring: the bucket's first color, or the placeholder
    pub fn slots(&self) -> Vec<Vec<ColorSpacePoint>> {
        self.rings.iter().map(|ring| self.ring_slots(ring)).collect()
    }

    /// One color per bucket of `ring`
    pub fn ring_slots(&self, ring: &Ring) -> Vec<ColorSpacePoint> {
        ring.buckets
            .iter()
            .map(|b| b.representative().unwrap_or(self.placeholder))
            .collect()
    }

    /// Total number of palette colors across all buckets
    pub fn assigned_count(&self) -> usize {
        self.rings
            .iter()
            .flat_map(|r| &r.buckets)
            .map(|b| b.colors.len())
            .sum()
    }
}

/// Partition parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPartitioner {
    hue_sections: usize,
    lightness_levels: usize,
    invert_lightness: bool,
    placeholder: ColorSpacePoint,
}

impl WheelPartitioner {
    /// `invert_lightness = false` puts the darkest band in ring 0, `true` the lightest.
    pub fn new(
        hue_sections: usize,
        lightness_levels: usize,
        invert_lightness: bool,
        placeholder: ColorSpacePoint,
    ) -> Result<Self> {
        if hue_sections < 1 {
            return Err(LuxError::invalid("hue section count must be at least 1"));
        }
        if lightness_levels < 1 {
            return Err(LuxError::invalid("lightness level count must be at least 1"));
        }
        Ok(Self {
            hue_sections,
            lightness_levels,
            invert_lightness,
            placeholder,
        })
    }

    pub fn hue_sections(&self) -> usize {
        self.hue_sections
    }

    pub fn lightness_levels(&self) -> usize {
        self.lightness_levels
    }

    /// Bucket `palette` into rings × hue sections
    pub fn partition(&self, palette: &Palette) -> Wheel {
        let hue_slice = HUE_TURN / self.hue_sections as f64;
        let lightness_slice = 1.0 / self.lightness_levels as f64;

        let mut rings: Vec<Ring> = (0..self.lightness_levels)
            .map(|index| {
                let band = self.band_for_ring(index);
                let lightness_range_end = (band + 1) as f64 * lightness_slice;
                Ring {
                    index,
                    lightness_range_start: lightness_range_end - lightness_slice,
                    lightness_range_end,
                    buckets: (0..self.hue_sections)
                        .map(|section| {
                            let hue_range_end = (section + 1) as f64 * hue_slice;
                            WheelBucket {
                                hue_range_start: hue_range_end - hue_slice,
                                hue_range_end,
                                lightness_ring_index: index,
                                colors: Vec::new(),
                            }
                        })
                        .collect(),
                }
            })
            .collect();

        for color in palette {
            let band = band_index(color.lightness(), lightness_slice, self.lightness_levels);
            let section = band_index(color.hue(), hue_slice, self.hue_sections);
            let ring = self.band_for_ring(band);
            rings[ring].buckets[section].colors.push(*color);
        }

        debug!(
            colors = palette.len(),
            hue_sections = self.hue_sections,
            lightness_levels = self.lightness_levels,
            invert = self.invert_lightness,
            "partitioned palette"
        );

        Wheel {
            rings,
            placeholder: self.placeholder,
        }
    }

    /// Lightness band shown in ring `index` (the mapping is its own inverse)
    fn band_for_ring(&self, index: usize) -> usize {
        if self.invert_lightness {
            self.lightness_levels - 1 - index
        } else {
            index
        }
    }
}

/// First band whose inclusive upper edge reaches `value`
pub(super) fn band_index(value: f64, slice: f64, count: usize) -> usize {
    (0..count)
        .position(|i| value <= (i + 1) as f64 * slice)
        .unwrap_or(count - 1)
}
