//! Numeric reductions.

pub mod dot_product;
pub mod sum;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::registry::REFERENCE_VARIANT;
use crate::utils::{VariantInfo, TOLERANCE};

/// Elements per partition in the chunked map-reduce variants
pub const CHUNK_LEN: usize = 4096;

/// Evaluate every variant with `eval` and compare against the reference variant.
pub(crate) fn check_variants<F: Copy>(
    algorithm: &'static str,
    variants: &[VariantInfo<F>],
    eval: impl Fn(F) -> f64,
) -> Result<()> {
    let reference = variants
        .iter()
        .find(|v| v.name == REFERENCE_VARIANT)
        .ok_or(Error::MissingReference(REFERENCE_VARIANT))?;

    let expected = eval(reference.function);

    for variant in variants.iter().filter(|v| v.name != REFERENCE_VARIANT) {
        let got = eval(variant.function);
        let diff = (got - expected).abs();

        // NaN diffs fail too
        if !(diff < TOLERANCE) {
            warn!(algorithm, variant = variant.name, expected, got, "variant diverged");
            return Err(Error::Divergence {
                variant: variant.name,
                expected,
                got,
                diff,
            });
        }
        debug!(algorithm, variant = variant.name, diff, "variant verified");
    }

    Ok(())
}
