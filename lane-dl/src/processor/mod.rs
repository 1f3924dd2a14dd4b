//! Per-sample processing building blocks.

pub mod augment;
pub mod decode;
pub mod mask;

pub use augment::*;
pub use decode::*;
pub use mask::*;
