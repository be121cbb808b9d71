//! Explicit map-reduce over fixed-size partitions.

use rayon::prelude::*;

use crate::math::CHUNK_LEN;

/// Sum each `CHUNK_LEN` partition sequentially on a worker, then combine the
/// partial sums.
pub fn sum_rayon_chunked(values: &[f64]) -> f64 {
    values
        .par_chunks(CHUNK_LEN)
        .map(|chunk| chunk.iter().fold(0.0, |acc, &x| acc + x))
        .reduce(|| 0.0, |a, b| a + b)
}
