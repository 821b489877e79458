/// Configuration for [`Mutf8Decoder`](crate::Mutf8Decoder).
///
/// Options are fixed when the decoder is built and cannot change afterwards.
///
/// # Examples
///
/// ```rust
/// use modified_utf8::{DecoderOptions, Mutf8Decoder};
///
/// let decoder = Mutf8Decoder::new(DecoderOptions {
///     fatal: true,
///     ..Default::default()
/// });
/// assert!(decoder.fatal());
/// assert!(!decoder.ignore_bom());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct DecoderOptions {
    /// Whether malformed input aborts the call with a
    /// [`DecodeError`](crate::DecodeError).
    ///
    /// When `false`, each malformed or truncated byte is replaced by U+FFFD
    /// and decoding continues.
    ///
    /// # Default
    ///
    /// `false`
    pub fatal: bool,

    /// Whether a leading byte order mark (`EF BB BF`) is kept in the output.
    ///
    /// When `false`, a BOM at the very start of a stream is consumed without
    /// producing output, provided it arrives whole in one call. A BOM cut by
    /// a chunk boundary, or later in the stream, is decoded as U+FEFF.
    ///
    /// # Default
    ///
    /// `false`
    pub ignore_bom: bool,

    /// Whether continuation bytes must have the `10xx_xxxx` shape.
    ///
    /// By default any byte is accepted in continuation position, matching
    /// the lenient decoders found in most JVM tooling. In strict mode a
    /// mismatching continuation byte makes the lead byte invalid.
    ///
    /// # Default
    ///
    /// `false`
    pub strict: bool,
}

/// Per-call options for [`Mutf8Decoder::decode_with`](crate::Mutf8Decoder::decode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DecodeOptions {
    /// Whether more input follows this call.
    ///
    /// A streaming call keeps a truncated trailing sequence for the next
    /// call instead of treating it as malformed.
    ///
    /// # Default
    ///
    /// `false`
    pub stream: bool,
}

impl DecodeOptions {
    /// Options for a call that is followed by more input.
    pub const STREAM: Self = Self { stream: true };

    /// Options for the last call of a stream.
    pub const FINAL: Self = Self { stream: false };
}
