//! Core error types.

use thiserror::Error;

/// Errors produced by the quality evaluator.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The image carried zero pixel samples, so mean and dispersion
    /// are undefined. Surfaced instead of a placeholder value.
    #[error("invalid input: image contains no pixel samples")]
    InvalidInput,
}
