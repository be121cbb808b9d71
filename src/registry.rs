//! Algorithm registry for reduction discovery, verification and benchmarking.
//!
//! Every reduction registers a runner here so the benchmark CLI and the test
//! suite can iterate over all algorithms without knowing their signatures.

use crate::error::Result;
use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// Name of the sequential reference variant every algorithm must provide
pub const REFERENCE_VARIANT: &str = "original";

/// Trait that all reduction runners must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "reduction")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant over inputs of `size` elements generated
    /// from `seed`. Each closure does ONE execution and returns its result.
    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'static>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<()>;
}

/// Registry of all reductions
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all reductions
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::sum::SumRunner);
    registry.register(crate::math::dot_product::DotProductRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_registry_names() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["sum", "dot_product"]);
    }

    #[test]
    fn test_find() {
        let registry = build_registry();
        assert_eq!(registry.find("sum").map(|a| a.name()), Some("sum"));
        assert!(registry.find("matmul").is_none());
    }

    #[test]
    fn test_every_algorithm_has_reference_first() {
        let registry = build_registry();
        for algo in registry.all() {
            let variants = algo.available_variants();
            assert_eq!(variants.first().copied(), Some(REFERENCE_VARIANT), "{}", algo.name());
        }
    }

    #[test]
    fn test_variant_closures_match_variant_list() {
        let registry = build_registry();
        for algo in registry.all() {
            let closures = algo.get_variant_closures(100, 9);
            let names: Vec<_> = closures.iter().map(|c| c.name).collect();
            assert_eq!(names, algo.available_variants());
        }
    }
}
