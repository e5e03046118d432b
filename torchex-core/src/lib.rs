// Core pieces shared by the torchex crates
pub mod error;
pub mod random;

pub use error::TorchexError;
pub use random::{manual_seed, with_global_rng, GlobalRng, RandomSource};

// Re-export so downstream crates seed generators with the same `rand` version
pub use rand;
