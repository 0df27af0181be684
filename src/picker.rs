//! Word selection sources.
//!
//! The game never calls into `rand` directly; it asks a [`WordPicker`] for an
//! index so tests and scripted runs can substitute a deterministic choice.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Chooses which word of a pool becomes the next target.
pub trait WordPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniformly random selection backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl RandomPicker<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomPicker<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible selection: the same seed yields the same word sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> WordPicker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Always picks the same index (wrapped to the pool size by the caller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl WordPicker for FixedPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}

impl<P: WordPicker + ?Sized> WordPicker for &mut P {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<P: WordPicker + ?Sized> WordPicker for Box<P> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_stays_in_range() {
        let mut picker = RandomPicker::new();
        for len in 1..50 {
            assert!(picker.pick_index(len) < len);
        }
    }

    #[test]
    fn test_random_picker_zero_len() {
        let mut picker = RandomPicker::seeded(1);
        assert_eq!(picker.pick_index(0), 0);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let first: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_picker_covers_pool() {
        let mut picker = RandomPicker::seeded(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[picker.pick_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fixed_picker() {
        let mut picker = FixedPicker(3);
        assert_eq!(picker.pick_index(10), 3);
        assert_eq!(picker.pick_index(2), 3);
    }

    #[test]
    fn test_boxed_picker() {
        let mut picker: Box<dyn WordPicker> = Box::new(FixedPicker(1));
        assert_eq!(picker.pick_index(5), 1);
    }
}
