// torchex-data/src/ops/random_subset.rs

use crate::datasets::Dataset;
use crate::subset::Subset;
use log::{debug, warn};
use std::sync::Arc;
use torchex_core::{GlobalRng, RandomSource, TorchexError};

/// How many samples a random subset should hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubsetSize {
    /// A fraction of the dataset, strictly between 0 and 1. The count is floored.
    Fraction(f64),
    /// An absolute number of samples.
    Absolute(usize),
}

impl SubsetSize {
    /// Builds a size from the two optional selectors, exactly one of which must be set.
    ///
    /// # Errors
    ///
    /// * `TorchexError::MissingSelector` if neither is given.
    /// * `TorchexError::AmbiguousSelector` if both are given.
    pub fn from_selectors(
        percentage: Option<f64>,
        absolute_size: Option<usize>,
    ) -> Result<Self, TorchexError> {
        match (percentage, absolute_size) {
            (Some(percentage), None) => Ok(SubsetSize::Fraction(percentage)),
            (None, Some(absolute_size)) => Ok(SubsetSize::Absolute(absolute_size)),
            (None, None) => Err(TorchexError::MissingSelector),
            (Some(percentage), Some(absolute_size)) => Err(TorchexError::AmbiguousSelector {
                percentage,
                absolute_size,
            }),
        }
    }

    /// Validates the size against a dataset of `dataset_len` items and
    /// returns the number of samples to draw.
    ///
    /// An absolute size larger than the dataset is only accepted with replacement.
    ///
    /// # Errors
    ///
    /// * `TorchexError::PercentageOutOfRange` if the fraction is not in `(0, 1)` (NaN included).
    /// * `TorchexError::OversizedAbsoluteSize` if the absolute size exceeds `dataset_len` without replacement.
    pub fn num_samples(&self, dataset_len: usize, replace: bool) -> Result<usize, TorchexError> {
        match *self {
            SubsetSize::Fraction(percentage) => {
                if !(percentage > 0.0 && percentage < 1.0) {
                    return Err(TorchexError::PercentageOutOfRange { percentage });
                }
                Ok((percentage * dataset_len as f64).floor() as usize)
            }
            SubsetSize::Absolute(absolute_size) => {
                if absolute_size > dataset_len && !replace {
                    return Err(TorchexError::OversizedAbsoluteSize {
                        requested: absolute_size,
                        available: dataset_len,
                    });
                }
                Ok(absolute_size)
            }
        }
    }
}

/// Draws a random subset of `dataset` using the process-wide generator.
///
/// Exactly one of `percentage` and `absolute_size` must be given. The
/// returned subset keeps the indices in draw order and shares `dataset`.
///
/// `absolute_size` is capped at `dataset.len()` only when `replace` is false;
/// with replacement a larger size is allowed, unlike an unconditional bound.
///
/// # Example
///
/// ```rust
/// # use std::sync::Arc;
/// # use torchex_data::datasets::{Dataset, VecDataset};
/// # use torchex_data::ops::random_subset;
/// let dataset = Arc::new(VecDataset::new((0..10).collect::<Vec<i32>>()));
/// let subset = random_subset(&dataset, None, Some(3), false).unwrap();
/// assert_eq!(subset.len(), 3);
/// ```
pub fn random_subset<D: Dataset>(
    dataset: &Arc<D>,
    percentage: Option<f64>,
    absolute_size: Option<usize>,
    replace: bool,
) -> Result<Subset<D>, TorchexError> {
    let size = SubsetSize::from_selectors(percentage, absolute_size)?;
    random_subset_with(dataset, size, replace, &mut GlobalRng)
}

/// Same as [`random_subset`] with an explicit size and random source.
///
/// Passing a seeded generator gives reproducible subsets without touching
/// the process-wide generator.
pub fn random_subset_with<D, R>(
    dataset: &Arc<D>,
    size: SubsetSize,
    replace: bool,
    source: &mut R,
) -> Result<Subset<D>, TorchexError>
where
    D: Dataset,
    R: RandomSource + ?Sized,
{
    let dataset_len = dataset.len();
    let n_samples = size.num_samples(dataset_len, replace)?;
    if n_samples == 0 && matches!(size, SubsetSize::Fraction(_)) {
        warn!(
            "random_subset: {:?} of {} items floors to an empty subset",
            size, dataset_len
        );
    }

    let indices = source.choose(dataset_len, n_samples, replace)?;
    debug!(
        "random_subset: drew {} of {} indices (replace = {})",
        indices.len(),
        dataset_len,
        replace
    );
    Subset::new(Arc::clone(dataset), indices)
}

#[cfg(test)]
#[path = "random_subset_test.rs"]
mod tests;
