//! Process-wide random source used by the dataset operations.
//!
//! The global generator is seeded from OS entropy on first use and can be
//! reseeded with [`manual_seed`] to make subsequent draws reproducible.
//! Callers that want sampling independent of the global state can pass any
//! `rand` generator instead, since every [`RngCore`] is a [`RandomSource`].

use crate::error::TorchexError;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Mutex, OnceLock};

static GLOBAL_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// A source of uniformly distributed index draws.
pub trait RandomSource {
    /// Draws `count` indices uniformly from `0..population`.
    ///
    /// Without replacement the indices are pairwise distinct and returned in
    /// random order. With replacement every draw is independent.
    ///
    /// # Errors
    ///
    /// * `TorchexError::OversizedAbsoluteSize` if `count > population` without replacement.
    /// * `TorchexError::EmptyPopulation` if `count > 0` is drawn with replacement from nothing.
    fn choose(
        &mut self,
        population: usize,
        count: usize,
        replace: bool,
    ) -> Result<Vec<usize>, TorchexError>;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn choose(
        &mut self,
        population: usize,
        count: usize,
        replace: bool,
    ) -> Result<Vec<usize>, TorchexError> {
        choose_with(self, population, count, replace)
    }
}

/// Handle on the process-wide generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalRng;

impl RandomSource for GlobalRng {
    fn choose(
        &mut self,
        population: usize,
        count: usize,
        replace: bool,
    ) -> Result<Vec<usize>, TorchexError> {
        // One lock for the whole draw keeps a seeded sequence contiguous.
        with_global_rng(|rng| choose_with(rng, population, count, replace))
    }
}

/// Runs `f` with exclusive access to the process-wide generator.
pub fn with_global_rng<T, F>(f: F) -> T
where
    F: FnOnce(&mut StdRng) -> T,
{
    let lock = GLOBAL_RNG.get_or_init(|| Mutex::new(StdRng::from_entropy()));
    let mut guard = match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Mutex for the global generator was poisoned. Recovering.");
            poisoned.into_inner()
        }
    };
    f(&mut guard)
}

/// Reseeds the process-wide generator.
pub fn manual_seed(seed: u64) {
    with_global_rng(|rng| *rng = StdRng::seed_from_u64(seed));
    log::debug!("manual_seed: global generator reseeded with {}", seed);
}

fn choose_with<R: Rng + ?Sized>(
    rng: &mut R,
    population: usize,
    count: usize,
    replace: bool,
) -> Result<Vec<usize>, TorchexError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    if replace {
        if population == 0 {
            return Err(TorchexError::EmptyPopulation { count });
        }
        Ok((0..count).map(|_| rng.gen_range(0..population)).collect())
    } else {
        if count > population {
            return Err(TorchexError::OversizedAbsoluteSize {
                requested: count,
                available: population,
            });
        }
        Ok(rand::seq::index::sample(rng, population, count).into_vec())
    }
}

#[cfg(test)]
#[path = "random_test.rs"]
mod tests;
