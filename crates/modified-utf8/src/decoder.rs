//! Streaming Modified UTF-8 decoder.
//!
//! Input arrives in chunks. A multi-byte sequence cut by a chunk boundary is
//! kept in `pending` and completed by the next call:
//!
//! - `pending` is prepended to every call's input, forming the decoding
//!   window. When nothing is pending the input slice is decoded in place.
//! - A streaming call stores the undecoded tail of the window (at most two
//!   bytes: a truncated 2- or 3-byte sequence) back into `pending`.
//! - A final call empties `pending`. Each leftover byte is either reported as
//!   [`DecodeError::IncompleteSequence`] or replaced by U+FFFD.
//!
//! A byte order mark is only recognised at the start of a stream (on a fresh
//! decoder, or after a final call, while no streaming call has consumed any
//! bytes) and only when nothing is pending. A BOM cut by a chunk boundary
//! is therefore decoded as U+FEFF.

use alloc::{borrow::Cow, string::String, vec::Vec};

use tracing::{debug, trace};

use crate::{
    DecodeError,
    format::{
        BOM, ENCODING, MASK_4_BITS, MASK_5_BITS, MASK_6_BITS, REPLACEMENT_CHARACTER,
        is_continuation, sequence_width,
    },
    options::{DecodeOptions, DecoderOptions},
};

/// Decoder from Modified UTF-8 bytes to UTF-16 code units.
///
/// # Examples
///
/// ```rust
/// use modified_utf8::{DecoderOptions, Mutf8Decoder};
///
/// let mut decoder = Mutf8Decoder::new(DecoderOptions::default());
/// // The snowman (E2 98 83) split across two chunks.
/// assert!(decoder.decode_stream(&[0xE2, 0x98]).unwrap().is_empty());
/// assert_eq!(decoder.decode(&[0x83]).unwrap(), [0x2603]);
/// ```
#[derive(Debug, Clone)]
pub struct Mutf8Decoder {
    options: DecoderOptions,
    pending: Vec<u8>,
    at_stream_start: bool,
}

/// Result of scanning one sequence at the front of the window.
enum Scan {
    /// A decoded code unit and the number of bytes it spanned.
    Unit(u16, usize),
    /// The window ends inside a multi-byte sequence.
    Incomplete,
    /// The byte at the scan position cannot be decoded.
    Invalid(DecodeError),
}

impl Default for Mutf8Decoder {
    fn default() -> Self {
        Self::new(DecoderOptions::default())
    }
}

impl Mutf8Decoder {
    /// Create a decoder with the given options.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            options,
            pending: Vec::new(),
            at_stream_start: true,
        }
    }

    /// The encoding name, `"modified-utf8"`.
    #[must_use]
    pub const fn encoding(&self) -> &'static str {
        ENCODING
    }

    /// Whether malformed input is reported as an error.
    #[must_use]
    pub const fn fatal(&self) -> bool {
        self.options.fatal
    }

    /// Whether a leading byte order mark is kept in the output.
    #[must_use]
    pub const fn ignore_bom(&self) -> bool {
        self.options.ignore_bom
    }

    /// Whether continuation bytes are validated.
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.options.strict
    }

    /// The options this decoder was built with.
    #[must_use]
    pub const fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Whether a truncated sequence is waiting for more input.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop any pending bytes and start a new stream.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.at_stream_start = true;
    }

    /// Decode the last (or only) chunk of a stream.
    ///
    /// # Errors
    ///
    /// In fatal mode, returns an error for an invalid byte or for input that
    /// ends inside a multi-byte sequence.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u16>, DecodeError> {
        self.decode_with(input, DecodeOptions::FINAL)
    }

    /// Decode a chunk that will be followed by more input.
    ///
    /// # Errors
    ///
    /// In fatal mode, returns an error for an invalid byte.
    pub fn decode_stream(&mut self, input: &[u8]) -> Result<Vec<u16>, DecodeError> {
        self.decode_with(input, DecodeOptions::STREAM)
    }

    /// End the stream without further input.
    ///
    /// # Errors
    ///
    /// In fatal mode, returns an error if a truncated sequence is pending.
    pub fn flush(&mut self) -> Result<Vec<u16>, DecodeError> {
        self.decode_with(&[], DecodeOptions::FINAL)
    }

    /// Decode `input` and convert the code units to a `String`.
    ///
    /// Unpaired surrogates become U+FFFD in the returned string.
    ///
    /// # Errors
    ///
    /// Same as [`decode_with`](Self::decode_with).
    pub fn decode_to_string(
        &mut self,
        input: &[u8],
        options: DecodeOptions,
    ) -> Result<String, DecodeError> {
        let units = self.decode_with(input, options)?;
        Ok(String::from_utf16_lossy(&units))
    }

    /// Decode `input`, continuing any sequence left pending by a previous
    /// streaming call.
    ///
    /// With `options.stream` set, a truncated sequence at the end of the
    /// input is kept for the next call. Otherwise this is the end of the
    /// stream and leftover bytes are malformed.
    ///
    /// An error aborts the call without output. A final call always ends
    /// the stream; a streaming call that hits an invalid byte keeps the bytes
    /// that were pending before it.
    ///
    /// # Errors
    ///
    /// Only in fatal mode:
    /// - [`DecodeError::InvalidLeadByte`] for a byte that cannot start a
    ///   sequence;
    /// - [`DecodeError::InvalidContinuationByte`] in strict mode;
    /// - [`DecodeError::IncompleteSequence`] when a final call ends inside a
    ///   sequence.
    pub fn decode_with(
        &mut self,
        input: &[u8],
        options: DecodeOptions,
    ) -> Result<Vec<u16>, DecodeError> {
        let window: Cow<'_, [u8]> = if self.pending.is_empty() {
            Cow::Borrowed(input)
        } else {
            let mut joined = Vec::with_capacity(self.pending.len() + input.len());
            joined.extend_from_slice(&self.pending);
            joined.extend_from_slice(input);
            Cow::Owned(joined)
        };

        let mut pos = 0;
        if !self.options.ignore_bom
            && self.at_stream_start
            && self.pending.is_empty()
            && window.starts_with(&BOM)
        {
            trace!("skipping byte order mark");
            pos = BOM.len();
        }

        let mut out = Vec::with_capacity(window.len() - pos);
        while pos < window.len() {
            match scan(&window, pos, self.options.strict) {
                Scan::Unit(unit, width) => {
                    out.push(unit);
                    pos += width;
                }
                Scan::Incomplete => break,
                Scan::Invalid(err) => {
                    if self.options.fatal {
                        debug!(%err, "aborting decode");
                        if !options.stream {
                            self.reset();
                        }
                        return Err(err);
                    }
                    debug!(%err, "substituting replacement character");
                    out.push(REPLACEMENT_CHARACTER);
                    pos += 1;
                }
            }
        }

        let rest = &window[pos..];
        if options.stream {
            if !rest.is_empty() {
                trace!(pending = rest.len(), "carrying truncated sequence");
            }
            self.at_stream_start &= pos == 0;
            self.pending = rest.to_vec();
            return Ok(out);
        }

        let remaining = rest.len();
        self.pending.clear();
        self.at_stream_start = true;
        if remaining > 0 {
            if self.options.fatal {
                let err = DecodeError::IncompleteSequence { remaining };
                debug!(%err, "aborting decode");
                return Err(err);
            }
            debug!(remaining, "replacing truncated sequence");
            out.resize(out.len() + remaining, REPLACEMENT_CHARACTER);
        }
        Ok(out)
    }
}

/// Decode the sequence starting at `window[pos]`.
fn scan(window: &[u8], pos: usize, strict: bool) -> Scan {
    let lead = window[pos];
    let Some(width) = sequence_width(lead) else {
        return Scan::Invalid(DecodeError::InvalidLeadByte { byte: lead, offset: pos });
    };
    if width == 1 {
        return Scan::Unit(u16::from(lead), 1);
    }

    let end = window.len().min(pos + width);
    let tail = &window[pos + 1..end];
    if strict {
        if let Some(i) = tail.iter().position(|&b| !is_continuation(b)) {
            return Scan::Invalid(DecodeError::InvalidContinuationByte {
                byte: tail[i],
                offset: pos + 1 + i,
            });
        }
    }

    match *tail {
        [b] if width == 2 => Scan::Unit(
            (u16::from(lead & MASK_5_BITS) << 6) | u16::from(b & MASK_6_BITS),
            2,
        ),
        [b, c] => Scan::Unit(
            (u16::from(lead & MASK_4_BITS) << 12)
                | (u16::from(b & MASK_6_BITS) << 6)
                | u16::from(c & MASK_6_BITS),
            3,
        ),
        _ => Scan::Incomplete,
    }
}
