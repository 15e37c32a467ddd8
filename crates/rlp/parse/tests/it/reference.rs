//! Cross-checks against the `alloy-rlp` encoder.

use alloy_primitives::{B256, U256};
use alloy_rlp::Encodable;
use proptest::prelude::*;
use reth_rlp_parse::{
    decode_b256, decode_hash, decode_u256_value, decode_u64, parse_prefix, HashBuf, Prefix,
    RlpParseError,
};

fn encoded<T: Encodable>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    value.encode(&mut out);
    out
}

proptest! {
    #[test]
    fn u64_matches_encoder(value in any::<u64>(), lead in proptest::collection::vec(any::<u8>(), 0..4)) {
        let mut buf = lead.clone();
        buf.extend(encoded(&value));

        let (end, decoded) = decode_u64(&buf, lead.len()).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(end, buf.len());
    }

    #[test]
    fn u256_matches_encoder(limbs in any::<[u64; 4]>()) {
        let value = U256::from_limbs(limbs);
        let buf = encoded(&value);

        let (end, decoded) = decode_u256_value(&buf, 0).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(end, buf.len());
    }

    #[test]
    fn hash_matches_encoder(bytes in any::<[u8; 32]>()) {
        let hash = B256::from(bytes);
        let buf = encoded(&hash);

        let mut out = HashBuf::new();
        let (decoded, end) = decode_hash(&buf, 0, &mut out).unwrap();
        prop_assert_eq!(decoded, hash.as_slice());
        prop_assert_eq!(end, 33);
        prop_assert_eq!(decode_b256(&buf, 0), Ok((33, hash)));
    }

    #[test]
    fn string_prefix_matches_header(payload in proptest::collection::vec(any::<u8>(), 0..600)) {
        let buf = encoded(&payload.as_slice());

        let prefix = parse_prefix(&buf, 0).unwrap();
        prop_assert!(!prefix.is_list());
        prop_assert_eq!(prefix.payload_end(), Some(buf.len()));
        prop_assert_eq!(prefix.span().payload(&buf).unwrap(), payload.as_slice());
    }

    #[test]
    fn list_prefix_matches_header(items in proptest::collection::vec(any::<u64>(), 0..64)) {
        let mut buf = Vec::new();
        alloy_rlp::encode_list::<u64, u64>(&items, &mut buf);

        let prefix = parse_prefix(&buf, 0).unwrap();
        prop_assert!(matches!(prefix, Prefix::List(_)));
        prop_assert_eq!(prefix.payload_end(), Some(buf.len()));

        let mut pos = prefix.header_end();
        let mut decoded = Vec::new();
        while pos < buf.len() {
            let (next, value) = decode_u64(&buf, pos).unwrap();
            decoded.push(value);
            pos = next;
        }
        prop_assert_eq!(decoded, items);
    }

    #[test]
    fn padded_integers_are_rejected(value in 1u64.., pad in 1usize..4) {
        let be = value.to_be_bytes();
        let trimmed = &be[value.leading_zeros() as usize / 8..];
        let mut payload = vec![0u8; pad];
        payload.extend_from_slice(trimmed);
        let buf = encoded(&payload.as_slice());

        match decode_u64(&buf, 0) {
            Err(RlpParseError::NonCanonicalInteger { .. } | RlpParseError::IntegerTooLarge { .. }) => {}
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }
}
