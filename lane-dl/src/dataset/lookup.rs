use super::*;
use crate::{common::*, error::DataError};

/// The ordered, shuffle-able table of sample records.
///
/// The length is fixed after load; reshuffling returns a fresh
/// permutation of the same records, never a resample.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    records: Vec<Arc<SampleRecord>>,
}

impl LookupTable {
    /// Load the lookup manifest at `base_dir/lookup_name` and return
    /// the table already shuffled once.
    ///
    /// The manifest holds one dataset-relative image path per line.
    /// Entries are not deduplicated and their existence is not checked
    /// here; missing files surface when a batch reads them.
    pub fn load<P>(base_dir: P, lookup_name: &str, rng: &mut impl Rng) -> Result<Self, DataError>
    where
        P: AsRef<Path>,
    {
        let path = base_dir.as_ref().join(lookup_name);
        let text = fs::read_to_string(&path)
            .map_err(|_| DataError::LookupFileNotFound { path: path.clone() })?;

        let records = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                Arc::new(SampleRecord {
                    image_path: PathBuf::from(line),
                })
            })
            .collect_vec();
        info!("loaded {} records from {}", records.len(), path.display());

        Ok(Self { records }.shuffled(rng))
    }

    /// Return a fresh uniform permutation of the same records.
    pub fn shuffled(mut self, rng: &mut impl Rng) -> Self {
        self.records.shuffle(rng);
        self
    }

    pub fn records(&self) -> &[Arc<SampleRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
