//! Canonical big-endian integer reading.

use tracing::trace;

use crate::error::{RlpParseError, RlpParseResult};

/// Widest window [`read_be_int`] accepts.
pub const MAX_BE_INT_LEN: usize = core::mem::size_of::<u64>();

/// Reads `len` bytes at `buf[pos..]` as a big-endian unsigned integer.
///
/// An empty window decodes to zero. A non-empty window must not start with a zero byte,
/// since canonical RLP never pads integers. Windows wider than eight bytes are rejected with
/// [`RlpParseError::IntegerTooLarge`].
pub fn read_be_int(buf: &[u8], pos: usize, len: usize) -> RlpParseResult<u64> {
    let end = pos.checked_add(len).unwrap_or(usize::MAX);
    let Some(window) = buf.get(pos..end) else {
        trace!(target: "rlp::parse", pos, len, buf_len = buf.len(), "integer window past end of buffer");
        return Err(RlpParseError::unexpected_end(end, buf.len()))
    };

    if len > MAX_BE_INT_LEN {
        return Err(RlpParseError::IntegerTooLarge { len, max: MAX_BE_INT_LEN })
    }
    if window.first() == Some(&0) {
        trace!(target: "rlp::parse", pos, len, "integer with leading zero");
        return Err(RlpParseError::NonCanonicalInteger { offset: pos, len })
    }

    Ok(be_u64_unchecked(window))
}

/// Accumulates `bytes` as a big-endian integer without any canonical-form checks.
///
/// Callers must ensure `bytes.len() <= 8`; excess high bytes are shifted out.
#[inline]
pub const fn be_u64_unchecked(bytes: &[u8]) -> u64 {
    let mut r = 0u64;
    let mut i = 0;
    while i < bytes.len() {
        r = (r << 8) | bytes[i] as u64;
        i += 1;
    }
    r
}
