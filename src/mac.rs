//! HMAC over the from-scratch digests.
//!
//! The generic [`hmac`] takes the hash function as a value, so the same
//! construction serves SHA-256 and SHA-1. Keys, pads and intermediate buffers
//! are zeroed before returning.

use zeroize::Zeroize;

use crate::encoding::from_hex;
use crate::error::CryptoResult;
use crate::hash::{sha1, sha256, BLOCK_LEN};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC with a 64-byte block hash producing `N` bytes (`N <= 64`).
pub fn hmac<const N: usize, F>(hash: F, key: &[u8], message: &[u8]) -> [u8; N]
where
    F: Fn(&[u8]) -> [u8; N],
{
    // Key normalized to exactly one block
    let mut block = [0u8; BLOCK_LEN];
    if key.len() > BLOCK_LEN {
        let mut digest = hash(key);
        block[..N].copy_from_slice(&digest);
        digest.zeroize();
    } else {
        block[..key.len()].copy_from_slice(key);
    }

    let mut inner_input = Vec::with_capacity(BLOCK_LEN + message.len());
    inner_input.extend(block.iter().map(|b| b ^ IPAD));
    inner_input.extend_from_slice(message);
    let mut inner = hash(&inner_input);

    let mut outer_input = Vec::with_capacity(BLOCK_LEN + N);
    outer_input.extend(block.iter().map(|b| b ^ OPAD));
    outer_input.extend_from_slice(&inner);
    let mac = hash(&outer_input);

    block.zeroize();
    inner.zeroize();
    inner_input.zeroize();
    outer_input.zeroize();
    mac
}

/// HMAC-SHA256 as lowercase hex.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> String {
    hex::encode(hmac(sha256::hash, key, message))
}

/// HMAC-SHA1 tag bytes.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    hmac(sha1::hash, key, message)
}

/// Recompute the MAC of `message` and compare it with `received_hex`.
///
/// Hex case does not matter. Input that is not hex at all is an error rather
/// than a plain mismatch.
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], received_hex: &str) -> CryptoResult<bool> {
    let received = from_hex(received_hex)?;
    let expected = hmac(sha256::hash, key, message);
    Ok(constant_time_eq(&expected, &received))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
