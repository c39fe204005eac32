//! Random Source Port - injectable randomness for suggestion picking.

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn index_below(&self, upper: usize) -> usize;
}
