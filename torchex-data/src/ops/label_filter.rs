// torchex-data/src/ops/label_filter.rs

use crate::datasets::LabeledDataset;
use crate::subset::Subset;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;
use torchex_core::TorchexError;

/// Keeps the samples of `dataset` whose target is one of `labels`.
///
/// The selected indices are in ascending order, so the filter never
/// reorders samples. The order of `labels` does not matter.
///
/// # Errors
///
/// Checked in this order, before any filtering:
///
/// * `TorchexError::DuplicateLabels` if `labels` repeats an element.
/// * `TorchexError::MissingCapability` if the dataset has no targets.
/// * `TorchexError::TargetsLengthMismatch` if the targets are not aligned with the dataset.
/// * `TorchexError::UnknownLabel` if a requested label never occurs in the targets.
///
/// # Example
///
/// ```rust
/// # use std::sync::Arc;
/// # use torchex_data::datasets::VecDataset;
/// # use torchex_data::ops::label_filter;
/// let targets = vec![0, 1, 0, 1, 2, 0, 1, 2, 2, 0];
/// let dataset = Arc::new(VecDataset::with_targets((0..10).collect::<Vec<i32>>(), targets).unwrap());
/// let subset = label_filter(&dataset, &[2]).unwrap();
/// assert_eq!(subset.indices(), &[4, 7, 8]);
/// ```
pub fn label_filter<D: LabeledDataset>(
    dataset: &Arc<D>,
    labels: &[D::Label],
) -> Result<Subset<D>, TorchexError> {
    let mut wanted = HashSet::with_capacity(labels.len());
    for label in labels {
        if !wanted.insert(label) {
            return Err(TorchexError::DuplicateLabels {
                label: format!("{:?}", label),
            });
        }
    }

    let targets = dataset.targets().ok_or(TorchexError::MissingCapability {
        capability: "targets",
    })?;
    if targets.len() != dataset.len() {
        return Err(TorchexError::TargetsLengthMismatch {
            targets: targets.len(),
            len: dataset.len(),
        });
    }

    let present: HashSet<&D::Label> = targets.iter().collect();
    if let Some(unknown) = labels.iter().find(|label| !present.contains(label)) {
        return Err(TorchexError::UnknownLabel {
            label: format!("{:?}", unknown),
        });
    }

    let indices: Vec<usize> = targets
        .iter()
        .enumerate()
        .filter(|(_, target)| wanted.contains(target))
        .map(|(i, _)| i)
        .collect();
    debug!(
        "label_filter: kept {} of {} samples for {} label(s)",
        indices.len(),
        dataset.len(),
        labels.len()
    );
    Subset::new(Arc::clone(dataset), indices)
}

#[cfg(test)]
#[path = "label_filter_test.rs"]
mod tests;
