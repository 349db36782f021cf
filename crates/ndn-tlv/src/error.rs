//! Error types for TLV encoding and decoding.

use thiserror::Error;

/// Errors produced by the VarNum codec and TLV element framing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvError {
    /// The input ended before a complete field could be read.
    #[error("truncated input: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// A VarNum used a wider form than its value requires.
    #[error("non-minimal VarNum: {value} encoded in {width} bytes")]
    NonMinimal { value: u64, width: usize },

    /// A declared TLV length does not match the bytes that follow it.
    #[error("length mismatch: declared {declared}, actual {actual}")]
    LengthMismatch { declared: u64, actual: usize },

    /// The element carries a different TLV type than the caller expected.
    #[error("unexpected TLV type: expected {expected}, got {actual}")]
    UnexpectedType { expected: u64, actual: u64 },

    /// The output buffer cannot hold the encoded value.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

impl TlvError {
    /// Returns `true` for failures raised while reading wire bytes.
    pub fn is_decode(&self) -> bool {
        !self.is_encode()
    }

    /// Returns `true` for failures raised while producing wire bytes.
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. })
    }
}

/// Convenience type alias for TLV operations.
pub type TlvResult<T> = std::result::Result<T, TlvError>;
