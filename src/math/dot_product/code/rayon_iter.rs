//! Parallel iterator implementation.

use rayon::prelude::*;

/// Zip both slices as indexed parallel iterators so matching elements land on
/// the same worker, multiply, and reduce the products with `+`.
pub fn dot_product_rayon(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    a.par_iter()
        .zip(b.par_iter())
        .map(|(x, y)| x * y)
        .reduce(|| 0.0, |acc, p| acc + p)
}
