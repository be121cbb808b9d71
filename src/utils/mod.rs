//! Utility modules for verification, benchmarking and output.

pub mod bench;
pub mod cli;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{approx_eq, shuffle, shuffle_with_rng, time_seed, SeededRng, TOLERANCE};
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Whether the C variants were built and linked
pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);

/// Whether the C variants were built with OpenMP enabled
pub const C_OPENMP_ACTIVE: bool = cfg!(c_openmp_active);

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "rayon")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

/// Name of the C variant, reflecting whether OpenMP is compiled in.
pub const fn c_variant_name() -> &'static str {
    if C_OPENMP_ACTIVE {
        "c-openmp"
    } else {
        "c-serial"
    }
}
