//! Fixed smoke checks run by the `smoke` binary.
//!
//! Each check runs one parallel reducer on literal inputs and pairs the result
//! with a hand-computed expected value.

use std::fmt;

use crate::utils::{approx_eq, TOLERANCE};

/// One computed-vs-expected comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub label: &'static str,
    pub computed: f64,
    pub expected: f64,
}

impl Check {
    /// True if `computed` is within `TOLERANCE` of `expected`
    pub fn passed(&self) -> bool {
        approx_eq(self.computed, self.expected, TOLERANCE)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (expected: {})",
            self.label, self.computed, self.expected
        )
    }
}

/// Sum of 1..=8
pub fn sum_check() -> Check {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    Check {
        label: "Sum",
        computed: crate::parallel_sum(&values),
        expected: 36.0,
    }
}

/// [1, 2, 3] · [4, 5, 6] = 4 + 10 + 18
pub fn dot_product_check() -> Check {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    Check {
        label: "Dot product",
        computed: crate::parallel_dot_product(&a, &b),
        expected: 32.0,
    }
}

/// Checks in the order the smoke binary runs them
pub const CHECKS: [fn() -> Check; 2] = [sum_check, dot_product_check];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        for run in CHECKS {
            let check = run();
            assert!(check.passed(), "{}", check);
        }
    }

    #[test]
    fn test_output_format() {
        assert_eq!(sum_check().to_string(), "Sum: 36 (expected: 36)");
        assert_eq!(
            dot_product_check().to_string(),
            "Dot product: 32 (expected: 32)"
        );
    }

    #[test]
    fn test_failing_check() {
        let check = Check {
            label: "Sum",
            computed: 36.001,
            expected: 36.0,
        };
        assert!(!check.passed());
    }
}
