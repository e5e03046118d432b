use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;
use torchex_core::TorchexError;
use super::traits::{Dataset, LabeledDataset};

/// A simple dataset that wraps a `Vec` of items, optionally with targets.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + 'static`.
/// * `L`: The label type. Defaults to `()` for datasets built without targets.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static, L = ()> {
    data: Vec<T>,
    targets: Option<Vec<L>>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` without targets.
    ///
    /// # Arguments
    ///
    /// * `data` - A vector of items that will constitute the dataset.
    pub fn new(data: Vec<T>) -> Self {
        Self { data, targets: None }
    }
}

impl<T: Clone + Send + 'static, L> VecDataset<T, L> {
    /// Creates a new `VecDataset` where `targets[i]` labels `data[i]`.
    ///
    /// # Errors
    ///
    /// Returns `TorchexError::TargetsLengthMismatch` if the two vectors differ in length.
    pub fn with_targets(data: Vec<T>, targets: Vec<L>) -> Result<Self, TorchexError> {
        if data.len() != targets.len() {
            return Err(TorchexError::TargetsLengthMismatch {
                targets: targets.len(),
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            targets: Some(targets),
        })
    }
}

impl<T: Clone + Send + 'static, L> Dataset for VecDataset<T, L> {
    type Item = T;

    /// Returns a clone of the item at the given index.
    fn get(&self, index: usize) -> Result<Self::Item, TorchexError> {
        self.data.get(index).cloned().ok_or(TorchexError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T, L> LabeledDataset for VecDataset<T, L>
where
    T: Clone + Send + 'static,
    L: Clone + Eq + Hash + Debug,
{
    type Label = L;

    fn targets(&self) -> Option<Cow<'_, [L]>> {
        self.targets.as_deref().map(Cow::Borrowed)
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
