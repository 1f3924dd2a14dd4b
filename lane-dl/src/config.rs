//! Loader configuration format.

use crate::common::*;

/// The batch loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// The root directory all manifest entries resolve against.
    pub dataset_dir: PathBuf,
    /// The lookup manifest file name, relative to `dataset_dir`.
    pub lookup_name: String,
    /// The number of samples per produced batch.
    pub batch_size: NonZeroUsize,
    /// Enables the augmentation extension point.
    #[serde(default)]
    pub augment: bool,
}

impl LoaderConfig {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn open_json5_config() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                dataset_dir: "/data/culane",
                lookup_name: "train.txt",
                batch_size: 8,
            }}"#
        )?;

        let config = LoaderConfig::open(file.path())?;
        assert_eq!(config.dataset_dir, PathBuf::from("/data/culane"));
        assert_eq!(config.lookup_name, "train.txt");
        assert_eq!(config.batch_size.get(), 8);
        assert!(!config.augment);
        Ok(())
    }
}
