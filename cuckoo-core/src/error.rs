//! Error types for Cuckoo Cycle search and verification.

use thiserror::Error;

/// Errors that can surface from `cuckoo-core`.
///
/// Note what is deliberately absent: there is no "no solution found" variant.
/// An exhausted search is a normal outcome of a probabilistic algorithm, not
/// a failure, so `solve` reports it as `Ok(vec![])`. Likewise `verify` never
/// returns an error; a malformed proof is simply not a proof, so it returns
/// `false`.
#[derive(Debug, Error)]
pub enum CuckooError {
    /// A [`crate::Params`] value failed validation.
    #[error("invalid params: {reason}")]
    InvalidParams {
        /// Human-readable reason the params were rejected.
        reason: String,
    },

    /// The header byte slice was empty.
    #[error("header must be non-empty")]
    EmptyHeader,
}

/// Result type for Cuckoo Cycle operations.
pub type Result<T> = std::result::Result<T, CuckooError>;
