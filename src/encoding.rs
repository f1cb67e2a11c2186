//! Text boundary: callers hand us strings and read back hex.
//!
//! The algorithms only see bytes. Everything that turns user text into bytes,
//! or bytes into something printable, lives here.

use crate::error::CryptoResult;
use crate::math::BigUint;

/// UTF-8 bytes of user text.
pub fn text_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Lowercase hex.
pub fn to_hex<T: AsRef<[u8]>>(bytes: T) -> String {
    hex::encode(bytes)
}

/// Decode hex, ignoring surrounding whitespace. Either case is accepted.
pub fn from_hex(text: &str) -> CryptoResult<Vec<u8>> {
    Ok(hex::decode(text.trim())?)
}

/// Parse a decimal integer, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> CryptoResult<BigUint> {
    text.trim().parse()
}
