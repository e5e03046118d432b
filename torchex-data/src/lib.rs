//! # torchex-data
//!
//! Dataset abstractions and the operations that carve [`Subset`] views out of them.
//!
//! ```rust
//! use std::sync::Arc;
//! use torchex_data::datasets::{Dataset, VecDataset};
//! use torchex_data::ops::{label_filter, random_subset};
//!
//! let targets = vec![0, 1, 0, 1, 2, 0, 1, 2, 2, 0];
//! let dataset = Arc::new(VecDataset::with_targets((0..10).collect::<Vec<u32>>(), targets).unwrap());
//!
//! let twos = label_filter(&dataset, &[2]).unwrap();
//! assert_eq!(twos.indices(), &[4, 7, 8]);
//!
//! let half = random_subset(&dataset, Some(0.5), None, false).unwrap();
//! assert_eq!(half.len(), 5);
//! ```

pub mod datasets;
pub mod ops;
pub mod subset;

// Re-export main components
pub use datasets::{Dataset, LabeledDataset, VecDataset};
pub use ops::{label_filter, random_subset, random_subset_with, SubsetSize};
pub use subset::Subset;
pub use torchex_core::TorchexError;
