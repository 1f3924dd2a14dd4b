//! Spline-to-pixel rasterization for lane-marking annotations.
//!
//! An annotation line is a whitespace-separated sequence of `x y`
//! control points describing one lane line. [`mask_from_spline`]
//! interpolates the points with a Catmull-Rom spline and burns the
//! curve into an integer label mask.

mod error;
pub use error::*;

pub mod spline;
pub use spline::*;

pub mod raster;
pub use raster::*;
