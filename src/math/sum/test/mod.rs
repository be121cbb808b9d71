use super::code::*;
use super::parallel_sum;
use crate::math::CHUNK_LEN;
use crate::utils::TOLERANCE;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn assert_close(got: f64, expected: f64, msg: &str) {
    let diff = (got - expected).abs();
    assert!(
        diff < TOLERANCE,
        "{}: expected {}, got {}, diff = {}",
        msg,
        expected,
        got,
        diff
    );
}

#[test]
fn test_reference_values() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    for variant in available_variants() {
        assert_close((variant.function)(&values), 36.0, variant.name);
    }
}

#[test]
fn test_empty_is_positive_zero() {
    for variant in available_variants() {
        let result = (variant.function)(&[]);
        assert_eq!(result, 0.0, "{}", variant.name);
        assert!(result.is_sign_positive(), "{} returned -0.0", variant.name);
    }
}

#[test]
fn test_single_element() {
    assert_eq!(parallel_sum(&[-2.5]), -2.5);
}

#[test]
fn test_permutation_invariance() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<f64> = (0..5000).map(|_| rng.random_range(-100.0..100.0)).collect();
    let before = parallel_sum(&values);

    for _ in 0..5 {
        values.shuffle(&mut rng);
        // Partial sums reach ~5e5, so rounding noise exceeds TOLERANCE
        let after = parallel_sum(&values);
        assert!(
            (after - before).abs() < 1e-6,
            "permuted sum drifted: {} vs {}",
            before,
            after
        );
    }
}

#[test]
fn test_idempotent() {
    let values: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.25).collect();
    let snapshot = values.clone();
    let first = parallel_sum(&values);
    let second = parallel_sum(&values);
    assert_close(first, second, "repeat call");
    assert_eq!(values, snapshot);
}

#[test]
fn test_chunk_boundaries() {
    for len in [CHUNK_LEN - 1, CHUNK_LEN, CHUNK_LEN + 1, 3 * CHUNK_LEN] {
        let values = vec![1.0; len];
        assert_eq!(sum_rayon_chunked(&values), len as f64, "len {}", len);
        assert_eq!(sum_rayon(&values), len as f64, "len {}", len);
    }
}

#[test]
fn test_c_runtime_matches_build_flags() {
    if crate::utils::C_IMPL_AVAILABLE {
        assert_eq!(c_runtime_openmp(), crate::utils::C_OPENMP_ACTIVE);
    }
}
