//! Image decoding and channel-order normalization.

use crate::{common::*, dataset::SampleRecord, error::DataError};

/// Decode the record's image into an HWC `u8` array in RGB order.
///
/// The codec hands back BGR-like channel order, so the first and third
/// channels are swapped on every sample. No resizing, cropping, or
/// value scaling happens here.
pub fn load_image(base_dir: &Path, record: &SampleRecord) -> Result<Array3<u8>, DataError> {
    let path = record.resolve_image(base_dir);
    let image = image::open(&path)
        .map_err(|source| DataError::ImageDecode {
            path: path.clone(),
            source,
        })?
        .into_rgb8();

    let (width, height) = image.dimensions();
    let array = Array3::from_shape_fn(
        (height as usize, width as usize, 3),
        |(y, x, channel)| image.get_pixel(x as u32, y as u32)[2 - channel],
    );

    Ok(array)
}
