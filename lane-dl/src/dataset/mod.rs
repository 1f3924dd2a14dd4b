//! Lookup table and epoch-aware batch iteration.

mod iterator;
mod lookup;
mod record;

pub use iterator::*;
pub use lookup::*;
pub use record::*;
