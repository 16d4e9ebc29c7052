//! Local randomness used when the random source cannot be reached.

use rand::Rng;
use spinwheel_branding::SOURCE_LOCAL_FALLBACK;
use spinwheel_rng_api::RandomSample;

/// Generates uniform fractions in `[0, 1)` without touching the network.
pub trait LocalRng: Send + Sync {
    fn next_fraction(&self) -> f64;

    /// A sample labelled so it can never be mistaken for external randomness.
    fn fallback_sample(&self) -> RandomSample {
        RandomSample::new(self.next_fraction(), SOURCE_LOCAL_FALLBACK)
    }
}

/// Production generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRng;

impl LocalRng for SystemRng {
    fn next_fraction(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Always returns the same fraction.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub f64);

impl LocalRng for FixedRng {
    fn next_fraction(&self) -> f64 {
        self.0
    }
}
