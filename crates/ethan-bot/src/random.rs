//! Injectable randomness.

use rand::Rng;

/// Source of uniform draws and probability gates.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;

    /// True with the given probability.
    fn chance(&self, probability: f64) -> bool;
}

/// Thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }

    fn chance(&self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        rand::thread_rng().gen_bool(probability)
    }
}

/// Uniform choice from a slice.
pub fn choose<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.pick(items.len()).min(items.len() - 1))
}
