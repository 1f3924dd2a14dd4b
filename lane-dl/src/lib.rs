//! Batch data loading for lane-marking semantic segmentation.
//!
//! The crate turns a CULane-style dataset layout, a lookup manifest of
//! image paths plus one spline annotation sidecar per image, into an
//! endless stream of training batches. Each batch pairs decoded RGB
//! images with dense integer label masks rasterized on demand from the
//! spline annotations.

mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod processor;

pub use config::*;
pub use dataset::*;
pub use error::*;
pub use processor::*;
