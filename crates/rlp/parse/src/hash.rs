//! 32-byte hash extraction into a reusable buffer.

use alloc::{boxed::Box, vec, vec::Vec};

use alloy_primitives::B256;
use tracing::trace;

use crate::{
    error::{RlpParseError, RlpParseResult},
    prefix::{parse_prefix, PayloadSpan},
};

/// Length of an RLP-encoded hash payload.
pub const HASH_LENGTH: usize = 32;

/// Caller-owned scratch buffer that [`decode_hash`] writes into.
///
/// The allocation is kept across calls as long as it is large enough, so decoding many hashes
/// in a loop allocates at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashBuf {
    inner: Vec<u8>,
}

impl HashBuf {
    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates an empty buffer with at least `capacity` bytes allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity) }
    }

    /// Returns the allocated capacity.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the current contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Returns a pointer to the start of the allocation.
    pub fn as_ptr(&self) -> *const u8 {
        self.inner.as_ptr()
    }

    /// Consumes the buffer and returns the underlying vector.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Resizes the buffer to exactly `len` bytes and returns them.
    ///
    /// The existing allocation is reused when its capacity is at least `len`; otherwise it is
    /// replaced by a fresh zeroed allocation of `len` bytes.
    pub fn ensure_len(&mut self, len: usize) -> &mut [u8] {
        if self.inner.capacity() < len {
            self.inner = vec![0; len];
        } else {
            self.inner.resize(len, 0);
        }
        &mut self.inner
    }
}

impl From<Vec<u8>> for HashBuf {
    fn from(inner: Vec<u8>) -> Self {
        Self { inner }
    }
}

impl AsRef<[u8]> for HashBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Decodes the 32-byte hash at `buf[pos]` into `out`.
///
/// Returns a view of the hash inside `out` and the offset immediately after the element.
/// Header errors are wrapped in [`RlpParseError::Hash`]; everything else is reported
/// directly.
pub fn decode_hash<'a>(
    buf: &[u8],
    pos: usize,
    out: &'a mut HashBuf,
) -> RlpParseResult<(&'a [u8], usize)> {
    let (span, end) = hash_span(buf, pos)?;
    let dst = out.ensure_len(HASH_LENGTH);
    dst.copy_from_slice(&buf[span.header_end..end]);
    Ok((dst, end))
}

/// Decodes the 32-byte hash at `buf[pos]` as a [`B256`].
pub fn decode_b256(buf: &[u8], pos: usize) -> RlpParseResult<(usize, B256)> {
    let (span, end) = hash_span(buf, pos)?;
    Ok((end, B256::from_slice(&buf[span.header_end..end])))
}

fn hash_span(buf: &[u8], pos: usize) -> RlpParseResult<(PayloadSpan, usize)> {
    let prefix = parse_prefix(buf, pos).map_err(|err| RlpParseError::Hash(Box::new(err)))?;
    let span = prefix.into_string(pos).inspect_err(|_| {
        trace!(target: "rlp::parse", pos, "hash must be a string, not a list");
    })?;
    let end = span.checked_end(buf.len()).inspect_err(|err| {
        trace!(target: "rlp::parse", pos, %err, "unexpected end of payload after hash");
    })?;
    if span.payload_len != HASH_LENGTH {
        trace!(target: "rlp::parse", pos, len = span.payload_len, "invalid hash length");
        return Err(RlpParseError::InvalidHashLength { len: span.payload_len })
    }
    Ok((span, end))
}
