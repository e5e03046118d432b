// torchex-data/src/ops/random_subset_test.rs

use super::*;
use crate::datasets::VecDataset;
use torchex_core::rand::rngs::StdRng;
use torchex_core::rand::SeedableRng;
use std::collections::HashSet;

fn dataset_of_len(len: usize) -> Arc<VecDataset<usize>> {
    Arc::new(VecDataset::new((0..len).collect()))
}

#[test]
fn test_from_selectors() {
    assert_eq!(
        SubsetSize::from_selectors(Some(0.5), None),
        Ok(SubsetSize::Fraction(0.5))
    );
    assert_eq!(
        SubsetSize::from_selectors(None, Some(4)),
        Ok(SubsetSize::Absolute(4))
    );
    assert_eq!(
        SubsetSize::from_selectors(None, None),
        Err(TorchexError::MissingSelector)
    );
    assert_eq!(
        SubsetSize::from_selectors(Some(0.5), Some(4)),
        Err(TorchexError::AmbiguousSelector { percentage: 0.5, absolute_size: 4 })
    );
}

#[test]
fn test_num_samples_floors_fraction() {
    assert_eq!(SubsetSize::Fraction(0.5).num_samples(10, false), Ok(5));
    assert_eq!(SubsetSize::Fraction(0.25).num_samples(10, false), Ok(2));
    assert_eq!(SubsetSize::Fraction(0.99).num_samples(10, false), Ok(9));
    assert_eq!(SubsetSize::Fraction(0.05).num_samples(10, false), Ok(0));
}

#[test]
fn test_num_samples_rejects_out_of_range_fraction() {
    for percentage in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
        let result = SubsetSize::Fraction(percentage).num_samples(10, false);
        match result {
            Err(TorchexError::PercentageOutOfRange { .. }) => {}
            other => panic!("Expected PercentageOutOfRange for {}, got {:?}", percentage, other),
        }
    }
}

#[test]
fn test_num_samples_absolute_bounds() {
    assert_eq!(SubsetSize::Absolute(0).num_samples(10, false), Ok(0));
    assert_eq!(SubsetSize::Absolute(10).num_samples(10, false), Ok(10));
    assert_eq!(
        SubsetSize::Absolute(11).num_samples(10, false),
        Err(TorchexError::OversizedAbsoluteSize { requested: 11, available: 10 })
    );
    assert_eq!(SubsetSize::Absolute(11).num_samples(10, true), Ok(11));
}

#[test]
fn test_random_subset_absolute_without_replacement() {
    let dataset = dataset_of_len(10);
    let subset = random_subset(&dataset, None, Some(3), false).unwrap();
    assert_eq!(subset.len(), 3);
    let unique: HashSet<usize> = subset.indices().iter().cloned().collect();
    assert_eq!(unique.len(), 3);
    assert!(subset.indices().iter().all(|&i| i < 10));
}

#[test]
fn test_random_subset_percentage_length() {
    let dataset = dataset_of_len(37);
    for percentage in [0.1, 0.3, 0.5, 0.75, 0.999] {
        let subset = random_subset(&dataset, Some(percentage), None, false).unwrap();
        assert_eq!(subset.len(), (percentage * 37.0).floor() as usize);
    }
}

#[test]
fn test_random_subset_items_come_from_dataset() {
    let dataset = dataset_of_len(20);
    let subset = random_subset(&dataset, Some(0.5), None, false).unwrap();
    for (position, &index) in subset.indices().iter().enumerate() {
        // Items equal their index in this dataset
        assert_eq!(subset.get(position).unwrap(), index);
    }
}

#[test]
fn test_random_subset_with_replacement_larger_than_dataset() {
    let dataset = dataset_of_len(4);
    let subset = random_subset(&dataset, None, Some(12), true).unwrap();
    assert_eq!(subset.len(), 12);
    assert!(subset.indices().iter().all(|&i| i < 4));
}

#[test]
fn test_random_subset_argument_errors() {
    let dataset = dataset_of_len(10);
    assert_eq!(
        random_subset(&dataset, None, None, false).err(),
        Some(TorchexError::MissingSelector)
    );
    assert!(matches!(
        random_subset(&dataset, Some(0.2), Some(2), false),
        Err(TorchexError::AmbiguousSelector { .. })
    ));
    assert!(matches!(
        random_subset(&dataset, Some(1.0), None, false),
        Err(TorchexError::PercentageOutOfRange { .. })
    ));
    assert!(matches!(
        random_subset(&dataset, None, Some(11), false),
        Err(TorchexError::OversizedAbsoluteSize { requested: 11, available: 10 })
    ));
}

#[test]
fn test_random_subset_with_replacement_on_empty_dataset() {
    let dataset = dataset_of_len(0);
    assert_eq!(
        random_subset(&dataset, None, Some(2), true).err(),
        Some(TorchexError::EmptyPopulation { count: 2 })
    );
    let subset = random_subset(&dataset, Some(0.5), None, false).unwrap();
    assert!(subset.is_empty());
}

#[test]
fn test_random_subset_with_seeded_source_is_reproducible() {
    let dataset = dataset_of_len(100);
    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);
    let a = random_subset_with(&dataset, SubsetSize::Absolute(15), false, &mut rng_a).unwrap();
    let b = random_subset_with(&dataset, SubsetSize::Absolute(15), false, &mut rng_b).unwrap();
    assert_eq!(a.indices(), b.indices());
}

#[test]
fn test_random_subset_shares_dataset() {
    let dataset = dataset_of_len(10);
    let subset = random_subset(&dataset, Some(0.5), None, false).unwrap();
    assert!(Arc::ptr_eq(subset.dataset(), &dataset));
}
