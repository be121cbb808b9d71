//! Option value parsing for the benchmark CLI.

use crate::error::{Error, Result};

/// Parse a comma-separated list of input sizes.
///
/// Every entry must parse; an empty list is rejected.
pub fn parse_sizes(raw: &str) -> Result<Vec<usize>> {
    let sizes = raw
        .split(',')
        .map(|s| {
            s.trim().parse().map_err(|_| Error::InvalidOption {
                option: "--sizes",
                value: s.trim().to_string(),
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    if sizes.is_empty() {
        return Err(Error::InvalidOption {
            option: "--sizes",
            value: raw.to_string(),
        });
    }
    Ok(sizes)
}

/// Parse a count that must be at least 1 (runs, threads).
pub fn parse_nonzero(option: &'static str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidOption {
            option,
            value: raw.to_string(),
        }),
    }
}
