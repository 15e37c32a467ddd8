//! Typed decoders for canonical unsigned integers.

use alloy_primitives::U256;
use tracing::trace;

use crate::{
    error::{RlpParseError, RlpParseResult},
    integer::be_u64_unchecked,
    prefix::parse_prefix,
};

/// Maximum payload width of an RLP-encoded `u64`.
pub const U64_MAX_LEN: usize = 8;
/// Maximum payload width of an RLP-encoded `U256`.
pub const U256_MAX_LEN: usize = 32;

/// Decodes a `u64` from the string element at `buf[pos]`.
///
/// Returns the offset immediately after the element and the decoded value. Zero is encoded
/// as the empty string `0x80`; any payload starting with a zero byte is rejected.
pub fn decode_u64(buf: &[u8], pos: usize) -> RlpParseResult<(usize, u64)> {
    let payload = integer_payload(buf, pos, U64_MAX_LEN)?;
    Ok((payload.end, be_u64_unchecked(payload.bytes)))
}

/// Decodes a `U256` from the string element at `buf[pos]` into `out`.
///
/// Returns the offset immediately after the element. `out` is left untouched on error.
pub fn decode_u256(buf: &[u8], pos: usize, out: &mut U256) -> RlpParseResult<usize> {
    let payload = integer_payload(buf, pos, U256_MAX_LEN)?;
    *out = U256::from_be_slice(payload.bytes);
    Ok(payload.end)
}

/// Decodes a `U256` from the string element at `buf[pos]`, returning it by value.
pub fn decode_u256_value(buf: &[u8], pos: usize) -> RlpParseResult<(usize, U256)> {
    let mut value = U256::ZERO;
    let end = decode_u256(buf, pos, &mut value)?;
    Ok((end, value))
}

/// Validated payload of an integer element.
#[derive(Debug)]
struct IntegerPayload<'a> {
    bytes: &'a [u8],
    end: usize,
}

/// Runs the checks shared by all integer decoders, in order: element kind, payload bounds,
/// width and leading zero.
fn integer_payload(buf: &[u8], pos: usize, max_len: usize) -> RlpParseResult<IntegerPayload<'_>> {
    let span = parse_prefix(buf, pos)?.into_string(pos).inspect_err(|_| {
        trace!(target: "rlp::parse", pos, "integer must be a string, not a list");
    })?;
    let end = span.checked_end(buf.len()).inspect_err(|err| {
        trace!(target: "rlp::parse", pos, %err, "integer payload out of bounds");
    })?;

    if span.payload_len > max_len {
        trace!(target: "rlp::parse", pos, len = span.payload_len, max_len, "integer too large");
        return Err(RlpParseError::IntegerTooLarge { len: span.payload_len, max: max_len })
    }

    let bytes = &buf[span.header_end..end];
    if bytes.first() == Some(&0) {
        trace!(target: "rlp::parse", pos, len = bytes.len(), "integer with leading zero");
        return Err(RlpParseError::NonCanonicalInteger { offset: span.header_end, len: bytes.len() })
    }

    Ok(IntegerPayload { bytes, end })
}
