//! Timing system for reduction benchmarks.
//!
//! Every variant is warmed up, then samples from all variants are taken in a
//! shuffled order so no variant systematically runs on a colder or hotter
//! machine state. Raw per-sample measurements are reduced to summary
//! statistics at the end.

use std::hint::black_box;
use std::time::Duration;

use tracing::debug;

use super::bench::{shuffle, to_nanos, Measurement};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for timing measurements
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs one reduction and returns (measurement, result value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Precise average in nanoseconds as f64
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of measured runs
    pub runs: usize,
    /// Result of the last run, for cross-variant comparison
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Creates a shuffled (variant, sample) schedule from `seed`
/// 3. Returns one `VariantResult` per input variant, in input order
pub fn measure_variants(
    mut variants: Vec<Variant>,
    config: &TimingConfig,
    seed: u64,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        debug!(variant = variant.name, iterations = config.warmup_iterations, "warming up");
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    shuffle(&mut tasks, seed);

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for variant_idx in tasks {
        let (elapsed_time, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed_time);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            let result_sample = result_samples[idx].take();
            compute_variant_result(variant.name, variant.description, times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: Vec<Measurement>,
    result_sample: Option<f64>,
) -> VariantResult {
    if measurements.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            runs: 0,
            result_sample: None,
        };
    }

    let nanos: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();

    let mut sorted = nanos.clone();
    sorted.sort_unstable();

    let min_ns = sorted[0];
    let max_ns = sorted[sorted.len() - 1];
    let median_ns = sorted[sorted.len() / 2];

    let sum: u64 = nanos.iter().sum();
    let avg_nanos_f64 = sum as f64 / nanos.len() as f64;

    let variance: f64 = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median_ns),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        runs: nanos.len(),
        result_sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_variants_empty() {
        let results = measure_variants(vec![], &TimingConfig::default(), 1);
        assert!(results.is_empty());
    }

    #[test]
    fn test_measure_variants_single() {
        use crate::measure;

        let variants = vec![Variant {
            name: "test",
            description: "Test variant",
            run: Box::new(|| {
                let (elapsed, value) = measure!(21.0 * 2.0);
                (elapsed, Some(value))
            }),
        }];

        let config = TimingConfig {
            runs_per_variant: 5,
            warmup_iterations: 2,
        };

        let results = measure_variants(variants, &config, 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "test");
        assert_eq!(results[0].runs, 5);
        assert_eq!(results[0].result_sample, Some(42.0));
        assert!(results[0].min_time <= results[0].max_time);
    }

    #[test]
    fn test_measure_variants_keeps_input_order() {
        use crate::measure;

        let variants = vec![
            Variant {
                name: "first",
                description: "First variant",
                run: Box::new(|| {
                    let (elapsed, _) = measure!(1);
                    (elapsed, Some(1.0))
                }),
            },
            Variant {
                name: "second",
                description: "Second variant",
                run: Box::new(|| {
                    let (elapsed, _) = measure!(vec![0u8; 1000]);
                    (elapsed, None::<f64>)
                }),
            },
        ];

        let results = measure_variants(variants, &TimingConfig::default(), 11);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "first");
        assert_eq!(results[1].name, "second");
        assert_eq!(results[0].result_sample, Some(1.0));
        assert_eq!(results[1].result_sample, None);
    }

    #[test]
    fn test_warmup_runs_are_not_counted() {
        let mut calls = 0usize;
        {
            let variants = vec![Variant {
                name: "counted",
                description: "Counts calls",
                run: Box::new(|| {
                    calls += 1;
                    (Duration::from_nanos(10), None::<f64>)
                }),
            }];
            let config = TimingConfig {
                runs_per_variant: 4,
                warmup_iterations: 3,
            };
            let results = measure_variants(variants, &config, 5);
            assert_eq!(results[0].runs, 4);
            assert_eq!(results[0].avg_time, Duration::from_nanos(10));
            assert_eq!(results[0].std_dev, Duration::ZERO);
        }
        assert_eq!(calls, 7);
    }
}
