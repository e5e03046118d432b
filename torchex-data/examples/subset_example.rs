//! Building subsets of a labeled dataset with `random_subset` and `label_filter`.

use std::sync::Arc;
use torchex_core::manual_seed;
use torchex_data::datasets::{Dataset, VecDataset};
use torchex_data::ops::{label_filter, random_subset};
use torchex_data::TorchexError;

fn main() -> Result<(), TorchexError> {
    // Ten samples with three classes
    let features: Vec<[f32; 2]> = (0..10).map(|i| [i as f32, (i * i) as f32]).collect();
    let targets = vec![0, 1, 0, 1, 2, 0, 1, 2, 2, 0];
    let dataset = Arc::new(VecDataset::with_targets(features, targets)?);

    manual_seed(42);
    let subset = random_subset(&dataset, Some(0.3), None, false)?;
    println!("\n--- random_subset (30%) ---");
    for i in 0..subset.len() {
        println!("  {} -> index {} : {:?}", i, subset.indices()[i], subset.get(i)?);
    }

    let bootstrap = random_subset(&dataset, None, Some(15), true)?;
    println!("\n--- random_subset (15, with replacement) ---");
    println!("  indices: {:?}", bootstrap.indices());

    let twos = label_filter(&dataset, &[2])?;
    println!("\n--- label_filter([2]) ---");
    println!("  indices: {:?}", twos.indices());

    match label_filter(&dataset, &[1, 1]) {
        Err(e) => println!("\nRejected duplicate labels: {}", e),
        Ok(subset) => println!("\nUnexpectedly accepted: {:?}", subset.indices()),
    }
    Ok(())
}
