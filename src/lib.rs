//! Anchor-interpolated color palettes and ring/segment color wheels.
//!
//! ```
//! use luxwheel::engine::{AnchorPath, ColorSpacePoint, PositionFunctions, WheelPartitioner, generate};
//!
//! let path = AnchorPath::new(
//!     vec![
//!         ColorSpacePoint::new(0.0, 1.0, 0.5)?,
//!         ColorSpacePoint::new(180.0, 1.0, 0.5)?,
//!     ],
//!     false,
//! )?;
//! let palette = generate(&path, 5, PositionFunctions::default())?;
//! assert_eq!(palette.len(), 5);
//!
//! let background = ColorSpacePoint::new(0.0, 0.0, 0.05)?;
//! let wheel = WheelPartitioner::new(10, 3, false, background)?.partition(&palette);
//! assert_eq!(wheel.assigned_count(), 5);
//! # Ok::<(), luxwheel::LuxError>(())
//! ```

pub mod animation;
pub mod chart;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;

pub use error::{LuxError, Result};
