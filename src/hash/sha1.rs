//! Pure-Rust SHA-1 implementation.

use super::{block_words, pad, BLOCK_LEN};

/// Initial SHA-1 hash values (h0..h4).
pub const IV: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// SHA-1 round constant for round `t`.
#[inline]
fn k(t: usize) -> u32 {
    match t {
        0..=19  => 0x5A827999,
        20..=39 => 0x6ED9EBA1,
        40..=59 => 0x8F1BBCDC,
        _       => 0xCA62C1D6,
    }
}

/// SHA-1 nonlinear function for round `t`.
#[inline]
fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19  => (b & c) | ((!b) & d),
        20..=39 => b ^ c ^ d,
        40..=59 => (b & c) | (b & d) | (c & d),
        _       => b ^ c ^ d,
    }
}

fn compress(state: &mut [u32; 5], block: &[u8]) {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(&block_words(block));
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &wt) in w.iter().enumerate() {
        let temp = a
            .rotate_left(5)
            .wrapping_add(f(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(k(t))
            .wrapping_add(wt);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (word, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *word = word.wrapping_add(v);
    }
}

/// Compute SHA-1 digest of `input`.
///
/// # Returns
///
/// A 20-byte array containing the hash.
pub fn hash(input: &[u8]) -> [u8; 20] {
    let mut h = IV;

    for block in pad(input).chunks_exact(BLOCK_LEN) {
        compress(&mut h, block);
    }

    let mut digest = [0u8; 20];
    for (out, word) in digest.chunks_exact_mut(4).zip(h) {
        out.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc() {
        assert_eq!(hex::encode(hash(b"abc")), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn empty_input() {
        assert_eq!(hex::encode(hash(b"")), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn two_block_message() {
        assert_eq!(
            hex::encode(hash(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
    }
}
