#![allow(missing_docs)]

use core::fmt::Write;

use modified_utf8::{DecodeOptions, DecoderOptions, Mutf8Decoder, Mutf8Encoder};

/// Text covering every encoding class, including NUL and a surrogate pair.
pub const ORIGINAL: &str = "id\0caf\u{e9} \u{2603} \u{1F600}!";

// The encoding of `ORIGINAL`, cut so that each multi-byte class is split
// at every possible position.
#[rustfmt::skip]
pub const STREAM: [&[u8]; 9] = [
    b"id\xC0",              // NUL: lead only
    b"\x80caf\xC3",         // NUL completed, e-acute lead only
    b"\xA9 \xE2",           // e-acute completed, snowman lead only
    b"\x98",                // snowman: second byte
    b"\x83 \xED\xA0",       // snowman completed, high surrogate two bytes
    b"\xBD",                // high surrogate completed
    b"\xED",                // low surrogate lead
    b"\xB8\x80",            // low surrogate completed
    b"!",
];

fn render_units(units: &[u16]) -> String {
    let mut out = String::new();
    for (i, unit) in units.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{unit:04x}").unwrap();
    }
    out
}

/// Render one line per chunk: the chunk's bytes and the code units it
/// produced.
pub fn render_stream(options: DecoderOptions, stream: &[&[u8]]) -> String {
    let mut decoder = Mutf8Decoder::new(options);
    let mut out = String::new();
    for chunk in stream {
        let units = decoder
            .decode_with(chunk, DecodeOptions::STREAM)
            .expect("stream chunk");
        writeln!(out, "{chunk:02x?} -> [{}]", render_units(&units)).unwrap();
    }
    let units = decoder.flush().expect("flush");
    writeln!(out, "flush -> [{}]", render_units(&units)).unwrap();
    out
}

#[test]
fn stream_joins_to_encoding() {
    let streamed = STREAM.concat();
    assert_eq!(streamed, Mutf8Encoder::new().encode_str(ORIGINAL));
}
