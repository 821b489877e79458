use thiserror::Error;

/// Error raised by a decoder configured with
/// [`DecoderOptions::fatal`](crate::DecoderOptions::fatal).
///
/// Offsets count bytes from the start of the decoding window, which is any
/// pending bytes carried over from a streaming call followed by the new
/// input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that cannot start a 1-, 2- or 3-byte sequence.
    #[error("invalid modified UTF-8 byte 0x{byte:02x} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Position of the byte in the decoding window.
        offset: usize,
    },
    /// A continuation byte without the `10xx_xxxx` shape. Only reported in
    /// strict mode.
    #[error("invalid modified UTF-8 continuation byte 0x{byte:02x} at offset {offset}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Position of the byte in the decoding window.
        offset: usize,
    },
    /// The input ended inside a multi-byte sequence on a non-streaming call.
    #[error("incomplete modified UTF-8 sequence ({remaining} trailing bytes)")]
    IncompleteSequence {
        /// Number of bytes left undecoded.
        remaining: usize,
    },
}
