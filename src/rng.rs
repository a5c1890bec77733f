use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let v = lo + self.next_f64() * (hi - lo);
        // lo + r * (hi - lo) can round up to hi when r is just below 1
        if v < hi { v } else { lo }
    }
}

/// Browser `Math.random()`.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Reproducible generator for seeded runs and tests.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
