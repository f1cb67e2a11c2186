//! Error types shared by every primitive in the crate.

use thiserror::Error;

/// Result type for crypto-lab operations
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// Everything that can go wrong in the arithmetic, RSA and encoding layers.
///
/// Digest and HMAC computations are total and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A modular operation was asked to reduce by zero
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// No modular inverse exists
    #[error("{value} and {modulus} are not coprime (gcd = {gcd})")]
    NotCoprime {
        value: String,
        modulus: String,
        gcd: String,
    },

    /// Key generation input rejected before any arithmetic
    #[error("invalid prime {value}: {reason}")]
    InvalidPrime { value: String, reason: String },

    /// Signature was zero bytes long
    #[error("signature is empty")]
    EmptySignature,

    /// Signature integer does not lie in [0, n)
    #[error("signature is not smaller than the modulus")]
    SignatureOutOfRange,

    /// Text that should have been hexadecimal was not
    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    /// Text that should have been a decimal integer was not
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::InvalidHex(err.to_string())
    }
}
