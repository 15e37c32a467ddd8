//! RLP prefix classification.
//!
//! The leading byte of an element (plus, for long forms, a big-endian length field) fully
//! determines whether it is a string or a list, where its payload starts and how long it is:
//!
//! | first byte    | kind   | header length          | payload length            |
//! |---------------|--------|------------------------|---------------------------|
//! | `0x00..=0x7f` | string | 0                      | 1 (the byte itself)       |
//! | `0x80..=0xb7` | string | 1                      | `first - 0x80`            |
//! | `0xb8..=0xbf` | string | `1 + (first - 0xb7)`   | big-endian length field   |
//! | `0xc0..=0xf7` | list   | 1                      | `first - 0xc0`            |
//! | `0xf8..=0xff` | list   | `1 + (first - 0xf7)`   | big-endian length field   |

use core::fmt;

use tracing::trace;

use crate::{
    error::{RlpParseError, RlpParseResult},
    integer::read_be_int,
};

/// First byte of a string with a 0..=55 byte payload.
pub const SHORT_STRING_OFFSET: u8 = 0x80;
/// Base of the first byte of a string with a long-form length field.
pub const LONG_STRING_OFFSET: u8 = 0xb7;
/// First byte of a list with a 0..=55 byte payload.
pub const SHORT_LIST_OFFSET: u8 = 0xc0;
/// Base of the first byte of a list with a long-form length field.
pub const LONG_LIST_OFFSET: u8 = 0xf7;

/// Kind of an RLP element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A byte string, including single bytes below `0x80`.
    String,
    /// A list of RLP elements.
    List,
}

impl ElementKind {
    /// Returns the opposite kind.
    pub const fn other(self) -> Self {
        match self {
            Self::String => Self::List,
            Self::List => Self::String,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::List => f.write_str("list"),
        }
    }
}

/// Location of an element's payload relative to the buffer it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadSpan {
    /// Offset immediately after the header, where the payload begins.
    pub header_end: usize,
    /// Number of payload bytes.
    pub payload_len: usize,
}

impl PayloadSpan {
    /// Creates a new span.
    pub const fn new(header_end: usize, payload_len: usize) -> Self {
        Self { header_end, payload_len }
    }

    /// Offset one past the last payload byte, or `None` on overflow.
    pub const fn payload_end(&self) -> Option<usize> {
        self.header_end.checked_add(self.payload_len)
    }

    /// Returns the payload bytes if the whole span lies within `buf`.
    pub fn payload<'a>(&self, buf: &'a [u8]) -> RlpParseResult<&'a [u8]> {
        let end = self.checked_end(buf.len())?;
        Ok(&buf[self.header_end..end])
    }

    /// Returns the payload end, failing if it lies past `len`.
    pub(crate) const fn checked_end(&self, len: usize) -> RlpParseResult<usize> {
        match self.payload_end() {
            Some(end) if end <= len => Ok(end),
            Some(end) => Err(RlpParseError::unexpected_end(end, len)),
            None => Err(RlpParseError::unexpected_end(usize::MAX, len)),
        }
    }
}

/// A classified RLP header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// A string element.
    String(PayloadSpan),
    /// A list element.
    List(PayloadSpan),
}

impl Prefix {
    /// Returns the payload span regardless of kind.
    pub const fn span(&self) -> PayloadSpan {
        match self {
            Self::String(span) | Self::List(span) => *span,
        }
    }

    /// Returns the element kind.
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::String(_) => ElementKind::String,
            Self::List(_) => ElementKind::List,
        }
    }

    /// Returns `true` for list elements.
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Offset where the payload begins.
    pub const fn header_end(&self) -> usize {
        self.span().header_end
    }

    /// Number of payload bytes.
    pub const fn payload_len(&self) -> usize {
        self.span().payload_len
    }

    /// Offset one past the last payload byte, or `None` on overflow.
    pub const fn payload_end(&self) -> Option<usize> {
        self.span().payload_end()
    }

    /// Returns the string span, or [`RlpParseError::WrongElementKind`] if this is a list
    /// starting at `offset`.
    pub const fn into_string(self, offset: usize) -> RlpParseResult<PayloadSpan> {
        match self {
            Self::String(span) => Ok(span),
            Self::List(_) => {
                Err(RlpParseError::WrongElementKind { expected: ElementKind::String, offset })
            }
        }
    }
}

/// Classifies the RLP element starting at `buf[pos]`.
///
/// Only the header is validated against the buffer: a missing first byte or a truncated
/// long-form length field yields [`RlpParseError::UnexpectedEndOfPayload`]. Whether the
/// payload itself fits is left to the caller, see [`PayloadSpan::payload`].
///
/// Long-form length fields must be canonical, so a leading zero byte in the length field
/// yields [`RlpParseError::NonCanonicalInteger`].
pub fn parse_prefix(buf: &[u8], pos: usize) -> RlpParseResult<Prefix> {
    let Some(&first) = buf.get(pos) else {
        trace!(target: "rlp::parse", pos, len = buf.len(), "prefix past end of buffer");
        return Err(RlpParseError::unexpected_end(pos.saturating_add(1), buf.len()))
    };

    let prefix = match first {
        // single byte, it is its own payload
        0x00..=0x7f => Prefix::String(PayloadSpan::new(pos, 1)),
        0x80..=0xb7 => {
            Prefix::String(PayloadSpan::new(pos + 1, (first - SHORT_STRING_OFFSET) as usize))
        }
        0xb8..=0xbf => Prefix::String(long_span(buf, pos, first - LONG_STRING_OFFSET)?),
        0xc0..=0xf7 => Prefix::List(PayloadSpan::new(pos + 1, (first - SHORT_LIST_OFFSET) as usize)),
        0xf8..=0xff => Prefix::List(long_span(buf, pos, first - LONG_LIST_OFFSET)?),
    };

    Ok(prefix)
}

/// Reads the `be_len`-byte length field that follows the first byte at `pos`.
fn long_span(buf: &[u8], pos: usize, be_len: u8) -> RlpParseResult<PayloadSpan> {
    let be_len = be_len as usize;
    let payload_len = read_be_int(buf, pos + 1, be_len)?;
    // a length that does not fit in usize can never be satisfied by an in-memory buffer
    let payload_len = usize::try_from(payload_len)
        .map_err(|_| RlpParseError::unexpected_end(usize::MAX, buf.len()))?;
    Ok(PayloadSpan::new(pos + 1 + be_len, payload_len))
}
