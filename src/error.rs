//! Error type shared by the strict reducers and the variant verifier.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid value '{value}' for option {option}")]
    InvalidOption { option: &'static str, value: String },

    #[error("no '{0}' reference variant registered")]
    MissingReference(&'static str),

    #[error("variant '{variant}' diverged from reference: expected {expected}, got {got}, diff {diff:e}")]
    Divergence {
        variant: &'static str,
        expected: f64,
        got: f64,
        diff: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = Error::LengthMismatch { left: 3, right: 2 };
        assert_eq!(
            err.to_string(),
            "length mismatch: left has 3 elements, right has 2"
        );
    }

    #[test]
    fn test_missing_reference_message() {
        let err = Error::MissingReference("original");
        assert_eq!(err.to_string(), "no 'original' reference variant registered");
    }

    #[test]
    fn test_invalid_option_message() {
        let err = Error::InvalidOption {
            option: "--runs",
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value '0' for option --runs");
    }
}
