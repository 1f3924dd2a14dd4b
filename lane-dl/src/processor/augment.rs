//! The augmentation extension point.

use crate::common::*;

/// The pluggable (image, mask) augmentation strategy.
///
/// Implementations keep the pair shape-aligned: the returned image and
/// mask share the same height and width, though those may differ from
/// the input's.
pub trait Augment
where
    Self: Debug + Send,
{
    fn augment(&self, image: Array3<u8>, mask: Array2<i64>) -> (Array3<u8>, Array2<i64>);
}

/// The default pass-through augmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Augment for Identity {
    fn augment(&self, image: Array3<u8>, mask: Array2<i64>) -> (Array3<u8>, Array2<i64>) {
        (image, mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_through() {
        let image = Array3::<u8>::zeros((2, 3, 3));
        let mask = Array2::<i64>::ones((2, 3));

        let (out_image, out_mask) = Identity.augment(image.clone(), mask.clone());
        assert_eq!(out_image, image);
        assert_eq!(out_mask, mask);
    }
}
