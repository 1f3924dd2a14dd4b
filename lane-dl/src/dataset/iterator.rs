use super::*;
use crate::{
    common::*,
    config::LoaderConfig,
    error::DataError,
    processor::{build_mask, load_image, Augment, CatmullRomRaster, Identity, SplineRaster},
};

/// The epoch-aware batch iterator over a lane-marking dataset.
///
/// Each step reads `batch_size` consecutive records of the current
/// lookup permutation, decodes their images and rasterizes their
/// annotation files into label masks. When the cursor would overrun
/// the table, the table is replaced with a fresh permutation and the
/// cursor resets, which starts the next epoch.
///
/// Stepping performs blocking file reads in slice order; the `&mut
/// self` receiver serializes callers statically.
#[derive(Debug, getset::CopyGetters)]
pub struct BatchIterator {
    config: LoaderConfig,
    lookup: LookupTable,
    /// The position of the next slice in the current permutation.
    #[getset(get_copy = "pub")]
    cursor: usize,
    /// The number of epoch boundaries crossed so far.
    #[getset(get_copy = "pub")]
    epochs: usize,
    rng: StdRng,
    rasterizer: Box<dyn SplineRaster>,
    augmentor: Box<dyn Augment>,
}

impl BatchIterator {
    /// Build an iterator over the dataset described by `config`.
    ///
    /// The lookup manifest is loaded and shuffled here; image and
    /// annotation files are only touched when a batch reads them.
    pub fn new(config: LoaderConfig) -> Result<Self, DataError> {
        Self::with_strategies(
            config,
            Box::new(CatmullRomRaster::default()),
            Box::new(Identity),
        )
    }

    /// Build an iterator with explicit rasterization and augmentation
    /// strategies.
    pub fn with_strategies(
        config: LoaderConfig,
        rasterizer: Box<dyn SplineRaster>,
        augmentor: Box<dyn Augment>,
    ) -> Result<Self, DataError> {
        let mut rng = StdRng::from_entropy();
        let lookup = LookupTable::load(&config.dataset_dir, &config.lookup_name, &mut rng)?;

        if config.batch_size.get() > lookup.len() {
            warn!(
                "batch size {} exceeds the {} records in the lookup table; \
                 every step reshuffles and yields the whole table",
                config.batch_size,
                lookup.len()
            );
        }

        Ok(Self {
            config,
            lookup,
            cursor: 0,
            epochs: 0,
            rng,
            rasterizer,
            augmentor,
        })
    }

    /// The records of the current permutation, in iteration order.
    pub fn records(&self) -> &[Arc<SampleRecord>] {
        self.lookup.records()
    }

    /// Produce the next batch of decoded images and label masks.
    ///
    /// A failing sample aborts the whole batch; partial batches are
    /// never returned.
    pub fn next_batch(&mut self) -> Result<Batch, DataError> {
        let batch_size = self.config.batch_size.get();

        // reshuffle and reset before slicing on epoch end
        if self.cursor + batch_size > self.lookup.len() {
            self.cursor = 0;
            self.epochs += 1;
            let table = mem::take(&mut self.lookup);
            self.lookup = table.shuffled(&mut self.rng);
        }

        let end = (self.cursor + batch_size).min(self.lookup.len());
        let slice = self.lookup.records()[self.cursor..end].to_vec();
        self.cursor += batch_size;

        let mut images = Vec::with_capacity(slice.len());
        let mut masks = Vec::with_capacity(slice.len());

        for record in slice {
            let image = load_image(&self.config.dataset_dir, &record)?;
            let (height, width, _) = image.dim();

            let annotation = record.resolve_annotation(&self.config.dataset_dir);
            let mask = build_mask((height, width), &annotation, self.rasterizer.as_ref())?;

            let (image, mask) = if self.config.augment {
                self.augmentor.augment(image, mask)
            } else {
                (image, mask)
            };

            images.push(image);
            masks.push(mask);
        }

        Ok(Batch { images, masks })
    }
}

/// The stream is endless; `next` never returns `None`.
impl Iterator for BatchIterator {
    type Item = Result<Batch, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_batch())
    }
}
