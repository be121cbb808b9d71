//! # Sum Reduction
//!
//! Computes the total of a sequence of `f64` values:
//!
//! `sum(v) = Σ v[i]`
//!
//! ## Parallel strategy
//!
//! The slice is partitioned across rayon's worker pool, each worker folds its
//! partition into a private accumulator, and partial sums are combined with
//! `+`. Combination order depends on scheduling, so results are only
//! reproducible up to floating-point rounding.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use std::sync::Arc;

use rand::Rng;

use crate::error::Result;
use crate::math::{check_variants, CHUNK_LEN};
use crate::measure;
use crate::registry::AlgorithmRunner;
use crate::utils::{SeededRng, Variant};

/// Sum `values` in parallel.
///
/// Returns `0.0` for an empty slice. `values` is only borrowed for the call.
///
/// # Example
/// ```
/// let sum = par_reduce::parallel_sum(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
/// assert!((sum - 36.0).abs() < 1e-9);
/// ```
pub fn parallel_sum(values: &[f64]) -> f64 {
    sum_rayon(values)
}

/// Runner for the sum reduction
pub struct SumRunner;

impl AlgorithmRunner for SumRunner {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn description(&self) -> &'static str {
        "Computes the total of a sequence of floating-point values"
    }

    fn category(&self) -> &'static str {
        "reduction"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'static>> {
        let values: Arc<Vec<f64>> = Arc::new(SeededRng::new(seed).vec_f64(size));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let values = Arc::clone(&values);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = measure!(func(&values));
                        (elapsed, Some(result))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        let variants = code::available_variants();
        let mut rng = rand::rng();

        // Empty, single, non-aligned and just past a chunk boundary
        for size in [0, 1, 1023, 2 * CHUNK_LEN + 1] {
            let values: Vec<f64> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
            check_variants(self.name(), &variants, |f| f(&values))?;
        }

        Ok(())
    }
}
