//! A 512-bit digest built from two SHA-256 passes.
//!
//! **This is not SHA-512.** The output is `SHA-256(m) || SHA-256(reverse(m))`,
//! where `reverse` flips the byte order of the message. It has the collision
//! resistance of SHA-256 at best and exists only so the digest lab can show a
//! 64-byte value next to SHA-1 and SHA-256. Do not swap in real SHA-512: the
//! lab output and its comparisons are defined against this construction.

use super::sha256;

/// `sha256(input) || sha256(input reversed)`.
pub fn hash(input: &[u8]) -> [u8; 64] {
    let reversed: Vec<u8> = input.iter().rev().copied().collect();

    let mut digest = [0u8; 64];
    digest[..32].copy_from_slice(&sha256::hash(input));
    digest[32..].copy_from_slice(&sha256::hash(&reversed));
    digest
}
