//! From-scratch message digests: SHA-1, SHA-256 and the derived 512-bit digest.
//!
//! Each module exposes a single `hash(input: &[u8]) -> [u8; N]` function. None
//! of them keeps state between calls.

pub mod derived512;
pub mod sha1;
pub mod sha256;

/// Block size shared by SHA-1 and SHA-256, in bytes.
pub const BLOCK_LEN: usize = 64;

/// Merkle-Damgård padding for 64-byte blocks.
///
/// Appends `0x80`, zero-fills to 56 mod 64, then the bit length as a 64-bit
/// big-endian integer. A message already 56 mod 64 long gains a whole block.
pub(crate) fn pad(input: &[u8]) -> Vec<u8> {
    let bit_len = (input.len() as u64).wrapping_mul(8);
    let mut msg = Vec::with_capacity(input.len() + BLOCK_LEN + 8);
    msg.extend_from_slice(input);
    msg.push(0x80);
    while msg.len() % BLOCK_LEN != 56 {
        msg.push(0);
    }
    msg.extend_from_slice(&bit_len.to_be_bytes());
    msg
}

/// Split a 64-byte block into sixteen big-endian words.
pub(crate) fn block_words(block: &[u8]) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// SHA-256 digest of `message`.
pub fn sha256(message: &[u8]) -> [u8; 32] {
    sha256::hash(message)
}

/// SHA-1 digest of `message`.
pub fn sha1(message: &[u8]) -> [u8; 20] {
    sha1::hash(message)
}

/// SHA-1 digest of `message` as 40 lowercase hex characters.
pub fn sha1_hex(message: &[u8]) -> String {
    hex::encode(sha1::hash(message))
}

/// Non-standard 512-bit digest; see [`derived512`].
pub fn derived512(message: &[u8]) -> [u8; 64] {
    derived512::hash(message)
}
