//! Encoder and streaming decoder for Java's Modified UTF-8 (MUTF-8).
//!
//! Modified UTF-8 is the string encoding of class file constant pools, JNI
//! and `DataOutput::writeUTF`. It works on UTF-16 code units rather than
//! Unicode scalar values:
//!
//! - NUL is written as `C0 80`, never as a bare `0x00` byte;
//! - each code unit, including each half of a surrogate pair, takes 1 to 3
//!   bytes, so 4-byte sequences never appear.
//!
//! ```rust
//! use modified_utf8::{DecodeOptions, DecoderOptions, Mutf8Decoder, Mutf8Encoder};
//!
//! let bytes = Mutf8Encoder::new().encode_str("nul\0\u{2603}");
//! assert_eq!(bytes, b"nul\xC0\x80\xE2\x98\x83");
//!
//! let mut decoder = Mutf8Decoder::new(DecoderOptions::default());
//! let text = decoder.decode_to_string(&bytes, DecodeOptions::FINAL).unwrap();
//! assert_eq!(text, "nul\0\u{2603}");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod error;
pub mod format;
mod options;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use decoder::Mutf8Decoder;
pub use encoder::{EncodeIntoResult, Mutf8Encoder};
pub use error::DecodeError;
pub use format::ENCODING;
pub use options::{DecodeOptions, DecoderOptions};
