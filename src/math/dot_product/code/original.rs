//! Original (reference) implementation of dot product.

/// Compute the dot product of two vectors sequentially.
///
/// Returns `0.0` if the vectors have different lengths.
///
/// # Example
/// ```
/// use par_reduce::math::dot_product::dot_product_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert!((dot_product_original(&a, &b) - 32.0).abs() < 1e-9);
/// assert_eq!(dot_product_original(&a, &b[..2]), 0.0);
/// ```
pub fn dot_product_original(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
}
