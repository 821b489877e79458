use alloc::vec::Vec;

use crate::format::{
    CONTINUATION_PREFIX, ENCODING, MASK_6_BITS, NUL_ENCODED, THREE_BYTE_PREFIX, TWO_BYTE_PREFIX,
    encoded_width,
};

/// Outcome of [`Mutf8Encoder::encode_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeIntoResult {
    /// Number of code units consumed from the input.
    pub read: usize,
    /// Number of bytes written to the destination.
    pub written: usize,
}

/// Encoder from UTF-16 code units to Modified UTF-8.
///
/// The encoder holds no state; every code unit has exactly one encoding, so
/// encoding never fails.
///
/// # Examples
///
/// ```rust
/// use modified_utf8::Mutf8Encoder;
///
/// let encoder = Mutf8Encoder::new();
/// assert_eq!(encoder.encode_str("hi"), [0x68, 0x69]);
/// assert_eq!(encoder.encode_str("\0\u{2603}"), [0xC0, 0x80, 0xE2, 0x98, 0x83]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mutf8Encoder;

impl Mutf8Encoder {
    /// Create a new encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The encoding name, `"modified-utf8"`.
    #[must_use]
    pub const fn encoding(&self) -> &'static str {
        ENCODING
    }

    /// Encode a sequence of UTF-16 code units.
    ///
    /// Surrogates are encoded one unit at a time, three bytes each.
    #[must_use]
    pub fn encode(&self, input: &[u16]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len(input));
        for &unit in input {
            let mut buf = [0u8; 3];
            let len = encode_unit(unit, &mut buf);
            out.extend_from_slice(&buf[..len]);
        }
        out
    }

    /// Encode the UTF-16 code units of a Rust string.
    ///
    /// Characters outside the Basic Multilingual Plane become a surrogate
    /// pair, six bytes in total.
    #[must_use]
    pub fn encode_str(&self, input: &str) -> Vec<u8> {
        let units: Vec<u16> = input.encode_utf16().collect();
        self.encode(&units)
    }

    /// Encode as many whole code units as fit into `dest`.
    ///
    /// Stops before the first code unit whose encoding would not fit, so a
    /// multi-byte sequence is never split. Bytes after `written` are left
    /// untouched.
    ///
    /// ```rust
    /// use modified_utf8::{EncodeIntoResult, Mutf8Encoder};
    ///
    /// let hello: Vec<u16> = "hello".encode_utf16().collect();
    /// let mut dest = [0u8; 3];
    /// let result = Mutf8Encoder::new().encode_into(&hello, &mut dest);
    /// assert_eq!(result, EncodeIntoResult { read: 3, written: 3 });
    /// assert_eq!(&dest, b"hel");
    /// ```
    pub fn encode_into(&self, input: &[u16], dest: &mut [u8]) -> EncodeIntoResult {
        let mut result = EncodeIntoResult::default();
        for &unit in input {
            let need = encoded_width(unit);
            let Some(slot) = dest.get_mut(result.written..result.written + need) else {
                break;
            };
            encode_unit(unit, slot);
            result.written += need;
            result.read += 1;
        }
        result
    }

    /// Exact number of bytes [`encode`](Self::encode) produces for `input`.
    #[must_use]
    pub fn encoded_len(&self, input: &[u16]) -> usize {
        input.iter().map(|&unit| encoded_width(unit)).sum()
    }
}

/// Write the encoding of `unit` to the front of `dst` and return its length.
///
/// `dst` must hold at least `encoded_width(unit)` bytes. The `as u8` casts
/// truncate on purpose; the masks keep only the bits each byte carries.
#[inline]
#[expect(clippy::cast_possible_truncation)]
fn encode_unit(unit: u16, dst: &mut [u8]) -> usize {
    match unit {
        0x0000 => {
            dst[..2].copy_from_slice(&NUL_ENCODED);
            2
        }
        0x0001..=0x007F => {
            dst[0] = unit as u8;
            1
        }
        0x0080..=0x07FF => {
            dst[0] = TWO_BYTE_PREFIX | (unit >> 6) as u8;
            dst[1] = CONTINUATION_PREFIX | (unit as u8 & MASK_6_BITS);
            2
        }
        _ => {
            dst[0] = THREE_BYTE_PREFIX | (unit >> 12) as u8;
            dst[1] = CONTINUATION_PREFIX | ((unit >> 6) as u8 & MASK_6_BITS);
            dst[2] = CONTINUATION_PREFIX | (unit as u8 & MASK_6_BITS);
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn nul_is_two_bytes() {
        assert_eq!(Mutf8Encoder::new().encode(&[0x0000]), vec![0xC0, 0x80]);
    }

    #[test]
    fn range_boundaries() {
        let enc = Mutf8Encoder::new();
        assert_eq!(enc.encode(&[0x0001]), vec![0x01]);
        assert_eq!(enc.encode(&[0x007F]), vec![0x7F]);
        assert_eq!(enc.encode(&[0x0080]), vec![0xC2, 0x80]);
        assert_eq!(enc.encode(&[0x07FF]), vec![0xDF, 0xBF]);
        assert_eq!(enc.encode(&[0x0800]), vec![0xE0, 0xA0, 0x80]);
        assert_eq!(enc.encode(&[0xFFFF]), vec![0xEF, 0xBF, 0xBF]);
    }

    #[test]
    fn surrogates_are_encoded_independently() {
        // U+1F600 as a surrogate pair.
        let enc = Mutf8Encoder::new();
        assert_eq!(
            enc.encode_str("\u{1F600}"),
            vec![0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]
        );
        assert_eq!(enc.encode(&[0xDC00]), vec![0xED, 0xB0, 0x80]);
    }

    #[test]
    fn empty_input() {
        let enc = Mutf8Encoder::new();
        assert!(enc.encode(&[]).is_empty());
        assert_eq!(
            enc.encode_into(&[], &mut [0u8; 4]),
            EncodeIntoResult::default()
        );
    }

    #[test]
    fn encode_into_leaves_tail_untouched() {
        // "a" then U+2603 (3 bytes) into 3 bytes: only "a" fits.
        let mut dest = [0xAAu8; 3];
        let result = Mutf8Encoder::new().encode_into(&[0x61, 0x2603], &mut dest);
        assert_eq!(result, EncodeIntoResult { read: 1, written: 1 });
        assert_eq!(dest, [0x61, 0xAA, 0xAA]);
    }

    #[test]
    fn encode_into_exact_fit() {
        let mut dest = [0u8; 5];
        let result = Mutf8Encoder::new().encode_into(&[0x0000, 0x2603], &mut dest);
        assert_eq!(result, EncodeIntoResult { read: 2, written: 5 });
        assert_eq!(dest, [0xC0, 0x80, 0xE2, 0x98, 0x83]);
    }

    #[quickcheck_macros::quickcheck]
    fn width_matches_output(unit: u16) -> bool {
        let enc = Mutf8Encoder::new();
        enc.encode(&[unit]).len() == encoded_width(unit)
    }

    #[test]
    fn encoding_name() {
        assert_eq!(Mutf8Encoder::new().encoding(), "modified-utf8");
    }
}
