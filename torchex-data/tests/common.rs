use std::sync::Arc;
use torchex_data::VecDataset;

// Shared by several integration test files; not every file uses every helper.
#[allow(dead_code)]
pub(crate) fn labeled_dataset(targets: Vec<i64>) -> Arc<VecDataset<usize, i64>> {
    let data: Vec<usize> = (0..targets.len()).collect();
    Arc::new(VecDataset::with_targets(data, targets).expect("Test dataset creation failed"))
}

#[allow(dead_code)]
pub(crate) fn cyclic_targets(len: usize, classes: i64) -> Vec<i64> {
    (0..len as i64).map(|i| i % classes).collect()
}
