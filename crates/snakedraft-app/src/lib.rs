// Library root: re-exports the app modules so integration tests and the
// binary share one API.

pub mod cli;
pub mod config;
pub mod rankings;
pub mod report;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pick-order RNG: seeded and reproducible when a seed is configured, thread
/// RNG otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}
