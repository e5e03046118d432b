//! Operations producing [`Subset`](crate::subset::Subset) views of a dataset.

pub mod label_filter;
pub mod random_subset;

pub use label_filter::label_filter;
pub use random_subset::{random_subset, random_subset_with, SubsetSize};
