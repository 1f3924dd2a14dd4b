//! Annotation-file to label-mask assembly.

use crate::{common::*, error::DataError};

/// The seam to the spline rasterization collaborator.
///
/// Implementations must preserve the mask shape and dtype and write
/// only `lane_id` (non-zero) pixels. Calls accumulate: the returned
/// mask feeds the next call, so later lines may overwrite earlier
/// pixels where they overlap.
pub trait SplineRaster
where
    Self: Debug + Send,
{
    /// Rasterize one annotation line onto `mask`.
    fn rasterize(
        &self,
        mask: Array2<i64>,
        line: &str,
        lane_id: i64,
    ) -> lane_raster::Result<Array2<i64>>;
}

/// The stock rasterizer backed by Catmull-Rom spline sampling.
#[derive(Debug, Clone)]
pub struct CatmullRomRaster {
    thickness: usize,
}

impl CatmullRomRaster {
    /// Build a rasterizer with the given stroke width in pixels.
    pub fn new(thickness: usize) -> Self {
        Self { thickness }
    }
}

impl Default for CatmullRomRaster {
    fn default() -> Self {
        Self::new(lane_raster::DEFAULT_THICKNESS)
    }
}

impl SplineRaster for CatmullRomRaster {
    fn rasterize(
        &self,
        mask: Array2<i64>,
        line: &str,
        lane_id: i64,
    ) -> lane_raster::Result<Array2<i64>> {
        lane_raster::mask_from_spline(mask, line, lane_id, self.thickness)
    }
}

/// Build the label mask for one sample.
///
/// The mask starts all-zero at the decoded image's `(height, width)`.
/// Annotation lines are rasterized in file order; the n-th non-empty
/// line is written with lane id `n`. An empty annotation file yields
/// the all-zero mask.
pub fn build_mask(
    size: (usize, usize),
    annotation_path: &Path,
    rasterizer: &dyn SplineRaster,
) -> Result<Array2<i64>, DataError> {
    let text = fs::read_to_string(annotation_path).map_err(|source| DataError::AnnotationRead {
        path: annotation_path.to_owned(),
        source,
    })?;

    let mut mask = Array2::zeros(size);
    let lines = text.lines().filter(|line| !line.trim().is_empty());

    for (index, line) in lines.enumerate() {
        let lane_id = (index + 1) as i64;
        mask = rasterizer
            .rasterize(mask, line, lane_id)
            .map_err(|source| DataError::Raster {
                path: annotation_path.to_owned(),
                lane_id,
                source,
            })?;
    }

    Ok(mask)
}
