//! Palette generation engine: anchors, interpolation, sampling and wheel partitioning

mod path;
mod point;
mod position;
mod sampler;
mod wheel;

pub use path::{AnchorPath, interpolate, interpolate_with};
pub use point::{ColorSpacePoint, HUE_TURN, hue_delta, wrap_hue};
pub use position::{PositionFunction, PositionFunctions};
pub use sampler::{Palette, blend, generate};
pub use wheel::{Ring, Wheel, WheelBucket, WheelPartitioner};
