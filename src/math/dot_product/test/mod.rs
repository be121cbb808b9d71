use super::code::*;
use super::{parallel_dot_product, try_parallel_dot_product};
use crate::error::Error;
use crate::math::CHUNK_LEN;
use crate::utils::TOLERANCE;

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
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    // 1*4 + 2*5 + 3*6 = 4 + 10 + 18 = 32
    for variant in available_variants() {
        assert_close((variant.function)(&a, &b), 32.0, variant.name);
    }
}

#[test]
fn test_length_mismatch_returns_zero() {
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, 2.0];
    for variant in available_variants() {
        assert_eq!((variant.function)(&a, &b), 0.0, "{}", variant.name);
        assert_eq!((variant.function)(&b, &a), 0.0, "{}", variant.name);
        assert_eq!((variant.function)(&a, &[]), 0.0, "{}", variant.name);
    }
}

#[test]
fn test_empty() {
    for variant in available_variants() {
        let result = (variant.function)(&[], &[]);
        assert_eq!(result, 0.0, "{}", variant.name);
        assert!(result.is_sign_positive(), "{} returned -0.0", variant.name);
    }
}

#[test]
fn test_orthogonal_vectors_give_true_zero() {
    let a = [1.0, 0.0];
    let b = [0.0, 1.0];
    assert_eq!(parallel_dot_product(&a, &b), 0.0);
    assert_eq!(try_parallel_dot_product(&a, &b), Ok(0.0));
}

#[test]
fn test_strict_rejects_mismatch() {
    assert_eq!(
        try_parallel_dot_product(&[1.0, 2.0, 3.0], &[4.0]),
        Err(Error::LengthMismatch { left: 3, right: 1 })
    );
    assert_eq!(
        try_parallel_dot_product(&[], &[4.0]),
        Err(Error::LengthMismatch { left: 0, right: 1 })
    );
}

#[test]
fn test_idempotent() {
    let a: Vec<f64> = (0..10_000).map(|i| (i % 17) as f64).collect();
    let b: Vec<f64> = (0..10_000).map(|i| (i % 5) as f64 - 2.0).collect();
    let first = parallel_dot_product(&a, &b);
    let second = parallel_dot_product(&a, &b);
    assert_close(first, second, "repeat call");
}

#[test]
fn test_chunk_boundaries() {
    for len in [CHUNK_LEN - 1, CHUNK_LEN, CHUNK_LEN + 1, 3 * CHUNK_LEN] {
        let a = vec![2.0; len];
        let b = vec![0.5; len];
        assert_eq!(dot_product_rayon_chunked(&a, &b), len as f64, "len {}", len);
        assert_eq!(dot_product_rayon(&a, &b), len as f64, "len {}", len);
    }
}
