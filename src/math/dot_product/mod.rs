//! # Dot Product Reduction
//!
//! The dot product (also known as scalar product) computes the sum of products
//! of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Length mismatch
//!
//! [`parallel_dot_product`] returns `0.0` when the inputs differ in length,
//! which is indistinguishable from a genuine zero. Callers that need to tell
//! the two apart use [`try_parallel_dot_product`].

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use std::sync::Arc;

use rand::Rng;

use crate::error::{Error, Result};
use crate::math::{check_variants, CHUNK_LEN};
use crate::measure;
use crate::registry::AlgorithmRunner;
use crate::utils::{SeededRng, Variant};

/// Dot product of `a` and `b` computed in parallel.
///
/// Returns `0.0` if the lengths differ.
///
/// # Example
/// ```
/// let dot = par_reduce::parallel_dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
/// assert!((dot - 32.0).abs() < 1e-9);
/// ```
pub fn parallel_dot_product(a: &[f64], b: &[f64]) -> f64 {
    dot_product_rayon(a, b)
}

/// Dot product of `a` and `b`, rejecting inputs of different length.
///
/// # Example
/// ```
/// use par_reduce::{try_parallel_dot_product, Error};
///
/// assert_eq!(try_parallel_dot_product(&[2.0], &[3.0]), Ok(6.0));
/// assert_eq!(
///     try_parallel_dot_product(&[1.0, 2.0], &[1.0]),
///     Err(Error::LengthMismatch { left: 2, right: 1 })
/// );
/// ```
pub fn try_parallel_dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(dot_product_rayon(a, b))
}

/// Runner for the dot product algorithm
pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Computes the sum of products of corresponding vector elements"
    }

    fn category(&self) -> &'static str {
        "reduction"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'static>> {
        let mut rng = SeededRng::new(seed);
        let a: Arc<Vec<f64>> = Arc::new(rng.vec_f64(size));
        let b: Arc<Vec<f64>> = Arc::new(rng.vec_f64(size));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = measure!(func(&a, &b));
                        (elapsed, Some(result))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        let variants = code::available_variants();
        let mut rng = rand::rng();

        // Use non-aligned sizes to hit partial chunks
        for size in [0, 1, 1023, 2 * CHUNK_LEN + 1] {
            let a: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            let b: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            check_variants(self.name(), &variants, |f| f(&a, &b))?;
        }

        // Mismatched lengths must collapse to zero everywhere
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0];
        check_variants(self.name(), &variants, |f| f(&a, &b))?;

        Ok(())
    }
}
