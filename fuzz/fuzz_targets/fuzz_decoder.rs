#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use modified_utf8::{DecodeError, DecoderOptions, Mutf8Decoder, Mutf8Encoder, format::BOM};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

#[derive(Debug, Arbitrary)]
struct Input {
    fatal: bool,
    ignore_bom: bool,
    strict: bool,
    split_seed: u64,
    bytes: Vec<u8>,
    units: Vec<u16>,
}

/// Split `bytes` at random positions derived from `seed`. Chunk boundaries
/// deliberately ignore sequence boundaries.
fn split_into_chunks(bytes: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        let size = rng.random_range(1..=rest.len().min(8));
        let (head, tail) = rest.split_at(size);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

fn decode_chunked(options: DecoderOptions, chunks: &[&[u8]]) -> Result<Vec<u16>, DecodeError> {
    let mut decoder = Mutf8Decoder::new(options);
    let mut out = Vec::new();
    for chunk in chunks {
        out.extend(decoder.decode_stream(chunk)?);
    }
    out.extend(decoder.flush()?);
    Ok(out)
}

fn check(input: Input) {
    let options = DecoderOptions {
        fatal: input.fatal,
        ignore_bom: input.ignore_bom,
        strict: input.strict,
    };

    // Chunking never changes the outcome, except that a leading BOM cut by
    // the first boundary is decoded as U+FEFF instead of being stripped.
    let one_shot = Mutf8Decoder::new(options).decode(&input.bytes);
    let chunks = split_into_chunks(&input.bytes, input.split_seed);
    let cuts_bom = !options.ignore_bom
        && input.bytes.starts_with(&BOM)
        && chunks.first().is_some_and(|first| first.len() < BOM.len());
    if !cuts_bom {
        let chunked = decode_chunked(options, &chunks);
        match (&one_shot, &chunked) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => panic!("one-shot {one_shot:?} disagrees with chunked {chunked:?}"),
        }
    }

    // Lenient output never has more code units than input bytes.
    if let Ok(units) = &one_shot {
        assert!(units.len() <= input.bytes.len());
    }

    // Encoded code units always decode back, whatever the options.
    let encoder = Mutf8Encoder::new();
    let encoded = encoder.encode(&input.units);
    assert_eq!(encoded.len(), encoder.encoded_len(&input.units));
    let decoded = Mutf8Decoder::new(DecoderOptions {
        ignore_bom: true,
        ..options
    })
    .decode(&encoded)
    .expect("encoder output is well-formed");
    assert_eq!(decoded, input.units);
}

fuzz_target!(|input: Input| check(input));
