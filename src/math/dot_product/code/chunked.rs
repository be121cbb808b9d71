//! Explicit map-reduce over fixed-size partitions.

use rayon::prelude::*;

use crate::math::CHUNK_LEN;

/// Pair up `CHUNK_LEN` partitions of both inputs, compute each partial dot
/// product sequentially on a worker, then combine the partials.
pub fn dot_product_rayon_chunked(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    a.par_chunks(CHUNK_LEN)
        .zip(b.par_chunks(CHUNK_LEN))
        .map(|(xs, ys)| xs.iter().zip(ys).fold(0.0, |acc, (x, y)| acc + x * y))
        .reduce(|| 0.0, |acc, p| acc + p)
}
