//! Error types for cursor-based RLP decoding.

use alloc::boxed::Box;

use crate::prefix::ElementKind;

/// Prefix used when a hash decode fails while parsing its header.
pub const PARSE_HASH_ERROR_PREFIX: &str = "parse hash payload";

/// Result alias for RLP parse operations.
pub type RlpParseResult<T> = Result<T, RlpParseError>;

/// Errors returned while decoding an RLP element from a buffer.
///
/// Every variant carries the byte offsets or lengths needed to report the failure precisely.
/// Nothing in this crate recovers from these errors; they are always returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RlpParseError {
    /// A length field or integer payload starts with a zero byte.
    #[error("integer encoding for RLP must not have leading zeros: {len} bytes at offset {offset}")]
    NonCanonicalInteger {
        /// Offset of the offending leading zero byte.
        offset: usize,
        /// Length of the integer window.
        len: usize,
    },
    /// The element has the wrong kind for the requested value.
    #[error("expected RLP {expected} at offset {offset}, found {}", .expected.other())]
    WrongElementKind {
        /// The kind the decoder required.
        expected: ElementKind,
        /// Offset of the element's first byte.
        offset: usize,
    },
    /// The element claims more bytes than the buffer holds.
    #[error("unexpected end of payload: element ends at {end}, buffer length is {len}")]
    UnexpectedEndOfPayload {
        /// Offset one past the last byte the element needs.
        end: usize,
        /// Length of the buffer.
        len: usize,
    },
    /// The integer payload is wider than the target type.
    #[error("integer must not be more than {max} bytes long, got {len}")]
    IntegerTooLarge {
        /// Payload length in bytes.
        len: usize,
        /// Maximum width of the target type in bytes.
        max: usize,
    },
    /// A hash payload is not exactly 32 bytes.
    #[error("hash must be 32 bytes long, got {len}")]
    InvalidHashLength {
        /// Payload length in bytes.
        len: usize,
    },
    /// The header of a hash element could not be parsed.
    #[error("{prefix}: hash len: {0}", prefix = PARSE_HASH_ERROR_PREFIX)]
    Hash(#[source] Box<RlpParseError>),
}

impl RlpParseError {
    /// Returns the underlying error, looking through [`RlpParseError::Hash`] wrappers.
    pub fn root(&self) -> &Self {
        let mut err = self;
        while let Self::Hash(inner) = err {
            err = inner;
        }
        err
    }

    /// Returns `true` if this error, or the error it wraps, is a canonical-form violation.
    pub fn is_non_canonical(&self) -> bool {
        matches!(self.root(), Self::NonCanonicalInteger { .. })
    }

    pub(crate) const fn unexpected_end(end: usize, len: usize) -> Self {
        Self::UnexpectedEndOfPayload { end, len }
    }
}
