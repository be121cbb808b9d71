//! # Par-Reduce
//!
//! Parallel sum and dot product reductions over `f64` slices, each available
//! as several implementation variants (sequential reference, rayon, chunked
//! map-reduce, C with OpenMP) that can be verified and benchmarked against
//! each other.

pub mod driver;
pub mod error;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};
pub use math::dot_product::{parallel_dot_product, try_parallel_dot_product};
pub use math::sum::parallel_sum;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::math::{dot_product, sum};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::{parallel_dot_product, parallel_sum, try_parallel_dot_product};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();

        println!("Verifying {} algorithms...", algorithms.len());

        for algo in algorithms {
            println!("Verifying algorithm: {}", algo.name());
            match algo.verify() {
                Ok(_) => println!("  ✅ Algorithm '{}' passed verification", algo.name()),
                Err(e) => panic!(
                    "  ❌ Algorithm '{}' failed verification: {}",
                    algo.name(),
                    e
                ),
            }
        }
    }

    #[test]
    fn test_top_level_reexports() {
        assert_eq!(crate::parallel_sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(crate::parallel_dot_product(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
        assert!(crate::try_parallel_dot_product(&[1.0], &[]).is_err());
    }
}
