use sha1::{Digest, Sha1};
use std::collections::HashMap;

use crate::core::types::FieldValue;

/// Fingerprints are full SHA-1 digests.
pub const FINGERPRINT_LEN: usize = 20;

/// Fixed 8-byte zigzag varint encoding of a signed integer.
///
/// Small magnitudes leave trailing zero bytes; the fixed width keeps
/// integer encodings aligned regardless of value.
pub fn encode_integer(value: i64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    let mut v = ((value << 1) ^ (value >> 63)) as u64;
    let mut i = 0;
    while v >= 0x80 && i < 7 {
        buf[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    buf[i] = v as u8;
    buf
}

/// SHA-1 digest over the scalar encodings of `values`, taken in `fields`
/// order: strings as raw bytes, integers via `encode_integer`. Absent
/// fields contribute nothing; non-indexable kinds are skipped.
///
/// There is no separator between encodings, so distinct field tuples whose
/// concatenations agree share a fingerprint and land in the same leaf.
pub fn fingerprint(fields: &[String], values: &HashMap<String, FieldValue>) -> [u8; FINGERPRINT_LEN] {
    let mut hasher = Sha1::new();
    for name in fields {
        match values.get(name) {
            Some(FieldValue::Text(s)) => hasher.update(s.as_bytes()),
            Some(FieldValue::Integer(i)) => hasher.update(encode_integer(*i)),
            Some(_) => {
                log::trace!("field {} has a non-indexable kind, skipped", name);
            }
            None => {}
        }
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, FieldValue)]) -> HashMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.clone()))
            .collect()
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn integer_encoding_is_zigzag_with_trailing_zeroes() {
        assert_eq!(encode_integer(0), [0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_integer(-1), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_integer(1), [2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_integer(-2), [3, 0, 0, 0, 0, 0, 0, 0]);
        // zigzag(300) = 600 = 0b100_1011000 -> 0xd8, 0x04
        assert_eq!(encode_integer(300), [0xd8, 0x04, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn field_order_changes_the_digest() {
        let vals = values(&[
            ("Name", FieldValue::Text("ab".to_string())),
            ("City", FieldValue::Text("cd".to_string())),
        ]);
        let forward = fingerprint(&fields(&["Name", "City"]), &vals);
        let reverse = fingerprint(&fields(&["City", "Name"]), &vals);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn absent_fields_contribute_nothing() {
        let only_name = values(&[("Name", FieldValue::Text("ab".to_string()))]);
        let wide = fingerprint(&fields(&["Name", "Age"]), &only_name);
        let narrow = fingerprint(&fields(&["Name"]), &only_name);
        assert_eq!(wide, narrow);
    }

    #[test]
    fn non_indexable_kinds_are_skipped() {
        let with_float = values(&[
            ("Name", FieldValue::Text("ab".to_string())),
            ("Score", FieldValue::Float(0.5)),
        ]);
        let without = values(&[("Name", FieldValue::Text("ab".to_string()))]);
        assert_eq!(
            fingerprint(&fields(&["Name", "Score"]), &with_float),
            fingerprint(&fields(&["Name", "Score"]), &without),
        );
    }

    #[test]
    fn concatenation_has_no_separator() {
        let ab = values(&[
            ("A", FieldValue::Text("ab".to_string())),
            ("B", FieldValue::Text("c".to_string())),
        ]);
        let a_bc = values(&[
            ("A", FieldValue::Text("a".to_string())),
            ("B", FieldValue::Text("bc".to_string())),
        ]);
        assert_eq!(
            fingerprint(&fields(&["A", "B"]), &ab),
            fingerprint(&fields(&["A", "B"]), &a_bc),
        );
    }
}
