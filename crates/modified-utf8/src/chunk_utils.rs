//! Helpers for feeding byte input to a decoder in pieces.

use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Chunk boundaries ignore sequence boundaries on purpose, so multi-byte
/// sequences end up split across chunks.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return Vec::new();
    }
    let chunk_size = payload.len().div_ceil(parts);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` into chunks whose sizes are derived from `splits`.
///
/// Each split value picks a size in `1..=remaining`; whatever is left once
/// `splits` runs out forms the final chunk.
#[must_use]
pub fn produce_partition<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
