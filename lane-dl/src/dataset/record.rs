use crate::common::*;

/// The extension of the annotation sidecar derived from an image path.
pub const ANNOTATION_SUFFIX: &str = "lines.txt";

/// The record with an image path, but without pixel data.
///
/// Records are immutable after the manifest is parsed; reshuffling a
/// lookup table permutes the records without touching them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleRecord {
    pub image_path: PathBuf,
}

impl SampleRecord {
    /// Derive the annotation sidecar path from the image path.
    ///
    /// Purely textual; the file may not exist.
    pub fn annotation_path(&self) -> PathBuf {
        self.image_path.with_extension(ANNOTATION_SUFFIX)
    }

    /// Resolve the image path against the dataset root.
    pub fn resolve_image(&self, base_dir: &Path) -> PathBuf {
        resolve(base_dir, &self.image_path)
    }

    /// Resolve the derived annotation path against the dataset root.
    pub fn resolve_annotation(&self, base_dir: &Path) -> PathBuf {
        resolve(base_dir, &self.annotation_path())
    }
}

/// Manifest entries use forward slashes and may carry a leading
/// separator; both are normalized so the entry always resolves inside
/// `base_dir`.
fn resolve(base_dir: &Path, entry: &Path) -> PathBuf {
    let text = entry.to_string_lossy();
    let relative = text
        .trim_start_matches(['/', '\\'])
        .replace(['/', '\\'], std::path::MAIN_SEPARATOR_STR);
    base_dir.join(relative)
}

/// The batch of aligned image and mask pairs produced per step.
#[derive(Debug)]
pub struct Batch {
    /// Decoded RGB images in HWC order, one per record in the slice.
    pub images: Vec<Array3<u8>>,
    /// Per-pixel lane id masks, aligned index-for-index with `images`.
    /// Background pixels are zero.
    pub masks: Vec<Array2<i64>>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_path_swaps_extension() {
        let record = SampleRecord {
            image_path: PathBuf::from("driver_23/frame_00000.jpg"),
        };
        assert_eq!(
            record.annotation_path(),
            PathBuf::from("driver_23/frame_00000.lines.txt")
        );
    }

    #[test]
    fn leading_separator_stays_dataset_relative() {
        let record = SampleRecord {
            image_path: PathBuf::from("/driver_23/frame_00000.jpg"),
        };
        let resolved = record.resolve_image(Path::new("/data/culane"));
        assert_eq!(
            resolved,
            Path::new("/data/culane")
                .join("driver_23")
                .join("frame_00000.jpg")
        );
    }
}
