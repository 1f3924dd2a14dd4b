use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterError>;

/// Rasterization errors.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A coordinate token could not be parsed as a float.
    #[error("invalid coordinate '{text}'")]
    InvalidCoordinate {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// The annotation line does not decompose into `x y` pairs.
    #[error("annotation line has {count} coordinates, expected an even count of x y pairs")]
    OddCoordinateCount { count: usize },

    /// The lane id would be indistinguishable from background.
    #[error("lane id must be positive, but got {id}")]
    NonPositiveLaneId { id: i64 },
}
