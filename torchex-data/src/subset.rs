// torchex-data/src/subset.rs

use crate::datasets::{Dataset, LabeledDataset};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use torchex_core::TorchexError;

/// A view over a dataset restricted to an explicit list of indices.
///
/// The underlying dataset is shared through an `Arc`, never copied. Item `i`
/// of the subset is item `indices[i]` of the dataset. Indices may repeat and
/// may appear in any order.
pub struct Subset<D: Dataset> {
    dataset: Arc<D>,
    indices: Vec<usize>,
}

impl<D: Dataset> Subset<D> {
    /// Creates a new `Subset`.
    ///
    /// # Errors
    ///
    /// Returns `TorchexError::IndexOutOfBounds` for the first index that is
    /// not smaller than `dataset.len()`.
    pub fn new(dataset: Arc<D>, indices: Vec<usize>) -> Result<Self, TorchexError> {
        let len = dataset.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(TorchexError::IndexOutOfBounds { index, len });
        }
        Ok(Self { dataset, indices })
    }

    /// The indices into the underlying dataset, in subset order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The shared underlying dataset.
    pub fn dataset(&self) -> &Arc<D> {
        &self.dataset
    }

    pub fn into_parts(self) -> (Arc<D>, Vec<usize>) {
        (self.dataset, self.indices)
    }
}

impl<D: Dataset> Clone for Subset<D> {
    fn clone(&self) -> Self {
        Self {
            dataset: Arc::clone(&self.dataset),
            indices: self.indices.clone(),
        }
    }
}

impl<D: Dataset> fmt::Debug for Subset<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subset")
            .field("dataset_len", &self.dataset.len())
            .field("indices", &self.indices)
            .finish()
    }
}

impl<D: Dataset> Dataset for Subset<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item, TorchexError> {
        let inner = self
            .indices
            .get(index)
            .ok_or(TorchexError::IndexOutOfBounds {
                index,
                len: self.indices.len(),
            })?;
        self.dataset.get(*inner)
    }

    fn len(&self) -> usize {
        self.indices.len()
    }
}

impl<D: LabeledDataset> LabeledDataset for Subset<D> {
    type Label = D::Label;

    /// Gathers the underlying targets through the subset indices.
    ///
    /// Returns `None` only if the underlying dataset has no targets. Indices
    /// past the end of short underlying targets are skipped, so the result is
    /// then shorter than the subset and reads as misaligned.
    fn targets(&self) -> Option<Cow<'_, [Self::Label]>> {
        let targets = self.dataset.targets()?;
        let gathered: Vec<Self::Label> = self
            .indices
            .iter()
            .filter_map(|&i| targets.get(i).cloned())
            .collect();
        Some(Cow::Owned(gathered))
    }
}

#[cfg(test)]
#[path = "subset_test.rs"]
mod tests;
