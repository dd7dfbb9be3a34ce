//! Confidence jitter: bounded random perturbation, then a hard clamp
//!
//! `jittered = clamp(base + (U - 0.5) * 0.1, 0.65, 0.95)` with `U` uniform in
//! `[0, 1)`. The clamp bounds do not depend on the base value, so a base
//! outside `[0.65, 0.95]` is pulled into range.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::defaults::{CONFIDENCE_CEILING, CONFIDENCE_FLOOR, CONFIDENCE_JITTER_SPAN};

/// Jitter `base` with an explicit uniform draw `u` in `[0, 1)`.
pub fn apply_draw(base: f64, u: f64) -> f64 {
    (base + (u - 0.5) * CONFIDENCE_JITTER_SPAN).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

/// Jitter `base` with one draw from `rng`.
pub fn apply<R: Rng + ?Sized>(rng: &mut R, base: f64) -> f64 {
    apply_draw(base, rng.gen::<f64>())
}

/// Process-wide random source for confidence jitter.
///
/// `Thread` draws from the thread-local RNG. `Seeded` shares one seeded
/// generator behind a mutex so a fixed seed gives a reproducible sequence.
#[derive(Debug, Default)]
pub enum EntropySource {
    #[default]
    Thread,
    Seeded(Mutex<StdRng>),
}

impl EntropySource {
    /// Seeded source when `seed` is set, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => Self::Thread,
        }
    }

    /// Apply jitter to `base` using this source.
    pub fn jitter(&self, base: f64) -> f64 {
        match self {
            Self::Thread => apply(&mut rand::thread_rng(), base),
            Self::Seeded(rng) => {
                // A panic while holding the lock cannot leave the RNG invalid
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                apply(&mut *rng, base)
            }
        }
    }
}
