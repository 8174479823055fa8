//! # Noise Error Types
//!
//! All errors that can occur while wiring up the noise core. Once a
//! `GradientNoise` exists, sampling cannot fail.

use thiserror::Error;

/// Errors from permutation-table construction and sampler wiring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// A permutation table cannot be empty.
    #[error("permutation table size must be at least 1")]
    EmptyTable,

    /// An explicit table was rejected because its first half is not a
    /// permutation of `0..len`.
    #[error("sequence of length {len} is not a permutation of 0..{len}")]
    NotAPermutation {
        /// Length of the rejected sequence.
        len: usize,
    },

    /// The requested wrap size cannot be served by the table.
    #[error("wrap size {wrap} must be between 1 and the table size {size}")]
    InvalidWrap {
        /// Requested wrap size.
        wrap: usize,
        /// Size of the table that was supposed to back it.
        size: usize,
    },
}

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
