//! Parallel iterator implementation.
//!
//! Rayon splits the slice across its worker pool; each worker accumulates a
//! private partial sum and partials are combined pairwise with `+`.

use rayon::prelude::*;

/// Parallel sum with identity `0.0`, so an empty slice yields positive zero.
pub fn sum_rayon(values: &[f64]) -> f64 {
    values.par_iter().copied().reduce(|| 0.0, |a, b| a + b)
}
