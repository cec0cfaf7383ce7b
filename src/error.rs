//! Typed failure conditions shared by every transform variant.
//!
//! All of these are deterministic properties of the input; nothing here is
//! retryable. Callers either fix the input or give up.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input violates a construction precondition: empty sequence, or a
    /// sentinel that is not the unique lexicographic minimum occurring
    /// exactly once at the end.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Inversion walked the LF-mapping for a full sequence length without
    /// ever reading the sentinel, or the transform does not contain exactly
    /// one sentinel.
    #[error("malformed transform: LF walk never reached the sentinel")]
    MalformedTransform,

    /// The sequence is too long for the internal `u32` rank space used by
    /// the induced-sort recursion.
    #[error("sequence length exceeds the representable rank range")]
    AlphabetOverflow,
}
