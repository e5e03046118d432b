use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;
use torchex_core::TorchexError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a single value,
/// a tuple (e.g., (features, label)), or any other custom type
/// that implements `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Arguments
    ///
    /// * `index` - The index of the item to retrieve.
    ///
    /// # Errors
    ///
    /// Returns `TorchexError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, TorchexError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dataset that may carry one label per sample.
///
/// `targets` is a capability probe: `None` means the dataset has no labels,
/// which label based operations report as a missing capability.
pub trait LabeledDataset: Dataset {
    /// The label type stored in the targets.
    type Label: Clone + Eq + Hash + Debug;

    /// Returns the per-sample labels, aligned with the dataset indices.
    fn targets(&self) -> Option<Cow<'_, [Self::Label]>>;
}
