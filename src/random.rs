//! Sources of secret numbers.
//!
//! The engine only needs one capability: an integer drawn uniformly from a
//! closed range. Production code uses [`RngSource`] over a `rand` generator,
//! tests use [`ScriptedSource`] to pin the secret.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Produces uniformly distributed integers in `[min, max]`.
pub trait RandomSource {
    /// Draw a value in `[min, max]`, inclusive on both ends.
    ///
    /// # Panics
    ///
    /// Implementations backed by `rand` panic when `min > max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_int(min, max)
    }
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator seeded by the OS.
    pub fn system() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator for `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

/// Deterministic source that replays a fixed script, cycling when exhausted.
///
/// Values are returned as written, even outside the requested range. An empty
/// script always answers `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<i32>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    /// Always returns `value`.
    pub fn fixed(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, min: i32, _max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(42));
        for _ in 0..1000 {
            let v = source.next_int(0, 10);
            assert!((0..=10).contains(&v));
        }
    }

    #[test]
    fn test_rng_source_hits_both_bounds() {
        let mut source = RngSource::new(ChaCha8Rng::seed_from_u64(7));
        let draws: Vec<i32> = (0..500).map(|_| source.next_int(1, 3)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&2));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.next_int(0, 100), b.next_int(0, 100));
        }
    }

    #[test]
    fn test_system_source_in_range() {
        let mut source = RngSource::system();
        for _ in 0..100 {
            let v = source.next_int(-5, 5);
            assert!((-5..=5).contains(&v));
        }
    }

    #[test]
    fn test_scripted_replays_in_order_and_cycles() {
        let mut source = ScriptedSource::new(vec![7, 3]);
        assert_eq!(source.next_int(0, 10), 7);
        assert_eq!(source.next_int(0, 10), 3);
        assert_eq!(source.next_int(0, 10), 7);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_scripted_fixed() {
        let mut source = ScriptedSource::fixed(42);
        assert_eq!(source.next_int(0, 100), 42);
        assert_eq!(source.next_int(0, 100), 42);
    }

    #[test]
    fn test_scripted_empty_returns_min() {
        let mut source = ScriptedSource::default();
        assert_eq!(source.next_int(-3, 8), -3);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ScriptedSource::fixed(5));
        assert_eq!(boxed.next_int(0, 10), 5);
    }
}
