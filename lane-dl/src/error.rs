//! Data loading error types.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while constructing the iterator or producing a batch.
///
/// There is no internal recovery: a failing sample aborts the whole
/// in-progress batch and the error surfaces to the caller.
#[derive(Debug, Error)]
pub enum DataError {
    /// The lookup manifest is missing at construction time.
    #[error("could not find lookup file {path:?}")]
    LookupFileNotFound { path: PathBuf },

    /// A referenced image file is missing or undecodable.
    #[error("failed to decode image {path:?}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A referenced annotation file is missing or unreadable.
    #[error("failed to read annotation file {path:?}")]
    AnnotationRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An annotation line could not be rasterized.
    #[error("failed to rasterize lane line {lane_id} of {path:?}")]
    Raster {
        path: PathBuf,
        lane_id: i64,
        #[source]
        source: lane_raster::RasterError,
    },
}
