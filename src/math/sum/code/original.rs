//! Original (reference) implementation of the sum reduction.

/// Sum all values sequentially, left to right.
///
/// # Example
/// ```
/// use par_reduce::math::sum::sum_original;
///
/// assert_eq!(sum_original(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum_original(&[]), 0.0);
/// ```
pub fn sum_original(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &x| acc + x)
}
