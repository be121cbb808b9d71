//! Sum implementations.
//!
//! This module contains all implementation variants of the sum reduction.

pub mod c_impl;
mod chunked;
mod original;
mod rayon_iter;

pub use c_impl::{c_runtime_openmp, sum_c};
pub use chunked::sum_rayon_chunked;
pub use original::sum_original;
pub use rayon_iter::sum_rayon;

use crate::utils::{c_variant_name, VariantInfo, C_IMPL_AVAILABLE, C_OPENMP_ACTIVE};

/// Type alias for sum function signature
pub type SumFn = fn(&[f64]) -> f64;

/// Get all available variants, reference first
pub fn available_variants() -> Vec<VariantInfo<SumFn>> {
    let mut variants: Vec<VariantInfo<SumFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Sequential left fold (reference)",
            function: sum_original,
        },
        VariantInfo {
            name: "rayon",
            description: "Rayon parallel iterator reduce",
            function: sum_rayon,
        },
        VariantInfo {
            name: "rayon-chunked",
            description: "Fixed-size chunks summed in parallel, partials combined",
            function: sum_rayon_chunked,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: c_variant_name(),
            description: if C_OPENMP_ACTIVE {
                "C loop with omp parallel for reduction"
            } else {
                "C loop built without OpenMP"
            },
            function: sum_c,
        });
    }

    variants
}
