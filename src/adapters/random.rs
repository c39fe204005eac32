//! Random source adapters.
//!
//! - `ThreadRngSource` - uniform indices from the thread-local rng
//! - `SequenceSource` - scripted indices for tests and demos

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::RandomSource;

/// `RandomSource` backed by `rand::thread_rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn index_below(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced modulo `upper`, so any script is valid.
#[derive(Debug, Default)]
pub struct SequenceSource {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always yields `value`.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn index_below(&self, upper: usize) -> usize {
        if upper == 0 || self.values.is_empty() {
            return 0;
        }
        let at = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[at] % upper
    }
}
