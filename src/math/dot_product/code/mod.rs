//! Dot product implementations.
//!
//! This module contains all implementation variants of the dot product.
//! Every variant returns `0.0` when the input lengths differ.

pub mod c_impl;
mod chunked;
mod original;
mod rayon_iter;

pub use c_impl::dot_product_c;
pub use chunked::dot_product_rayon_chunked;
pub use original::dot_product_original;
pub use rayon_iter::dot_product_rayon;

use crate::utils::{c_variant_name, VariantInfo, C_IMPL_AVAILABLE, C_OPENMP_ACTIVE};

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> f64;

/// Get all available variants, reference first
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Sequential zip-multiply-fold (reference)",
            function: dot_product_original,
        },
        VariantInfo {
            name: "rayon",
            description: "Rayon zipped parallel iterators, products reduced",
            function: dot_product_rayon,
        },
        VariantInfo {
            name: "rayon-chunked",
            description: "Paired fixed-size chunks multiplied in parallel, partials combined",
            function: dot_product_rayon_chunked,
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
            function: dot_product_c,
        });
    }

    variants
}
