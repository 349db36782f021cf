//! Error types for component and name operations.

use ndn_tlv::TlvError;
use thiserror::Error;

/// Errors produced while encoding, decoding, or parsing names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Malformed or unwritable wire bytes.
    #[error("tlv error: {0}")]
    Tlv(#[from] TlvError),

    /// A component segment contains a literal `/`.
    #[error("unescaped '/' in component: {0:?}")]
    UnescapedSeparator(String),

    /// The segment uses a URI convention this codec does not implement.
    #[error("unsupported component: {0:?}")]
    UnsupportedSegment(String),

    /// A `%` is not followed by exactly two hex digits.
    #[error("invalid percent-escape at byte {position} in {segment:?}")]
    InvalidEscape { segment: String, position: usize },

    /// The text before `=` is not a base-10 component type.
    #[error("invalid component type {prefix:?}")]
    InvalidTypePrefix { prefix: String },

    /// The segment contains more than one unescaped `=`.
    #[error("unexpected '=' in component: {0:?}")]
    ExtraSeparator(String),

    /// A digest component carries malformed hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A numeric component has an empty value.
    #[error("numeric component has an empty value")]
    EmptyNumber,

    /// A numeric component value does not fit in 64 bits.
    #[error("numeric component value is {len} significant bytes, max 8")]
    NumberTooWide { len: usize },
}

impl NameError {
    /// Returns `true` for failures raised while reading bytes or text.
    pub fn is_decode(&self) -> bool {
        !self.is_encode()
    }

    /// Returns `true` for failures raised while producing wire bytes.
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Tlv(e) if e.is_encode())
    }
}

/// Convenience type alias for name operations.
pub type Result<T> = std::result::Result<T, NameError>;
