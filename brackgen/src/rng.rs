//! Seeding of the per-call random source.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where a generation call gets its random source from.
///
/// Every call builds a fresh RNG, so a fixed seed plus identical parameters
/// reproduces the identical output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Reproducible: seed the RNG from this value.
    Fixed(u64),
    /// Non-reproducible: seed the RNG from OS entropy.
    Entropy,
}

impl SeedSource {
    /// Map an optional caller-supplied seed onto a source.
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SeedSource::Fixed(seed),
            None => SeedSource::Entropy,
        }
    }

    /// Build a fresh RNG from this source.
    pub fn rng(self) -> StdRng {
        match self {
            SeedSource::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedSource::Entropy => StdRng::from_entropy(),
        }
    }
}
