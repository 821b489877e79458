//! Bit-level layout of the Modified UTF-8 wire format.
//!
//! Modified UTF-8 differs from standard UTF-8 in two ways:
//! - NUL (U+0000) is written as the over-long pair `C0 80`, so encoded text
//!   never contains a `0x00` byte.
//! - Every UTF-16 code unit is encoded on its own. Surrogate pairs are never
//!   merged, so no sequence is longer than 3 bytes.
//!
//! See the [JVM specification, §4.4.7](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.4.7).

/// Name reported by both the encoder and the decoder.
pub const ENCODING: &str = "modified-utf8";

/// High bit of a byte; clear for single-byte sequences (`1000_0000`).
pub const ONE_BYTE_MARKER: u8 = 0x80;
/// Selects the 3-bit prefix of a 2-byte lead (`1110_0000`).
pub const TWO_BYTE_MARKER: u8 = 0xE0;
/// Prefix of a 2-byte lead (`1100_0000`).
pub const TWO_BYTE_PREFIX: u8 = 0xC0;
/// Selects the 4-bit prefix of a 3-byte lead (`1111_0000`).
pub const THREE_BYTE_MARKER: u8 = 0xF0;
/// Prefix of a 3-byte lead (`1110_0000`).
pub const THREE_BYTE_PREFIX: u8 = 0xE0;
/// Selects the 2-bit prefix of a continuation byte (`1100_0000`).
pub const CONTINUATION_MARKER: u8 = 0xC0;
/// Prefix of a continuation byte (`1000_0000`).
pub const CONTINUATION_PREFIX: u8 = 0x80;

/// Payload bits of a continuation byte.
pub const MASK_6_BITS: u8 = 0x3F;
/// Payload bits of a 2-byte lead.
pub const MASK_5_BITS: u8 = 0x1F;
/// Payload bits of a 3-byte lead.
pub const MASK_4_BITS: u8 = 0x0F;

/// The UTF-8 byte order mark, `U+FEFF` encoded in 3 bytes.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The two-byte encoding of U+0000.
pub const NUL_ENCODED: [u8; 2] = [TWO_BYTE_PREFIX, CONTINUATION_PREFIX];

/// U+FFFD, substituted for malformed input in non-fatal mode.
pub const REPLACEMENT_CHARACTER: u16 = 0xFFFD;

/// Number of bytes `unit` occupies once encoded.
#[must_use]
#[inline]
pub const fn encoded_width(unit: u16) -> usize {
    match unit {
        0x0000 => 2,
        0x0001..=0x007F => 1,
        0x0080..=0x07FF => 2,
        _ => 3,
    }
}

/// Length of the sequence introduced by `lead`, or `None` if `lead` cannot
/// start a sequence.
///
/// A raw `0x00` byte is rejected: encoders always emit NUL as `C0 80`.
#[must_use]
#[inline]
pub const fn sequence_width(lead: u8) -> Option<usize> {
    if lead == 0 {
        None
    } else if lead & ONE_BYTE_MARKER == 0 {
        Some(1)
    } else if lead & TWO_BYTE_MARKER == TWO_BYTE_PREFIX {
        Some(2)
    } else if lead & THREE_BYTE_MARKER == THREE_BYTE_PREFIX {
        Some(3)
    } else {
        None
    }
}

/// Whether `byte` has the `10xx_xxxx` continuation shape.
#[must_use]
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MARKER == CONTINUATION_PREFIX
}
