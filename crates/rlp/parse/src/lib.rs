//! Cursor-based RLP decoding primitives.
//!
//! Every function here takes an immutable buffer and a cursor position and returns the decoded
//! value together with the position immediately after it. Nothing is retained between calls.
//!
//! The building blocks are layered:
//! - [`parse_prefix`] classifies the element at the cursor as a string or a list and locates
//!   its payload.
//! - [`read_be_int`] reads canonical big-endian integers, including long-form length fields.
//! - [`decode_u64`] and [`decode_u256`] decode canonical unsigned integers.
//! - [`decode_hash`] extracts a 32-byte hash into a reusable [`HashBuf`].
//!
//! Non-canonical input (leading zero bytes, oversized integers, wrong element kinds) is always
//! rejected.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Decoding errors
pub mod error;
/// Hash extraction
pub mod hash;
/// Big-endian integer reading
pub mod integer;
/// Prefix classification
pub mod prefix;
/// Unsigned integer decoders
pub mod scalar;

pub use error::{RlpParseError, RlpParseResult, PARSE_HASH_ERROR_PREFIX};
pub use hash::{decode_b256, decode_hash, HashBuf, HASH_LENGTH};
pub use integer::{be_u64_unchecked, read_be_int};
pub use prefix::{parse_prefix, ElementKind, PayloadSpan, Prefix};
pub use scalar::{decode_u256, decode_u256_value, decode_u64};
