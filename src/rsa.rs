//! Textbook RSA signatures over SHA-256.
//!
//! **Demonstration only.** There is no padding scheme: the SHA-256 digest is
//! read as an integer, reduced mod `n`, and exponentiated directly. With the
//! small primes the labs use, `n` is far smaller than a digest, so distinct
//! messages can share a signature after the reduction. That loss is part of
//! the exercise and is kept on purpose.

use std::fmt;

use tracing::debug;
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};
use crate::hash::sha256;
use crate::math::{mod_inverse, BigUint};

/// Fixed public exponent.
pub const PUBLIC_EXPONENT: u64 = 65537;

/// RSA public key (e, n)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

/// RSA private key (d, n)
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    d: BigUint,
    pub n: BigUint,
}

impl RsaPublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    /// See [`rsa_verify`].
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<bool> {
        rsa_verify(message, signature, self)
    }
}

impl RsaPrivateKey {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    pub fn private_exponent(&self) -> &BigUint {
        &self.d
    }

    /// See [`rsa_sign`].
    pub fn sign(&self, message: &[u8]) -> CryptoResult<Vec<u8>> {
        rsa_sign(message, self)
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("d", &"<redacted>")
            .field("n", &self.n)
            .finish()
    }
}

/// Tuple form, `(65537, 3233)`.
impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

/// Tuple form, `(2753, 3233)`. Prints the secret exponent; the labs show it.
impl fmt::Display for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

/// Build a key pair from two primes.
///
/// `n = p*q`, `phi = (p-1)(q-1)`, `e = 65537`, `d = e^-1 mod phi`. Primality
/// is the caller's responsibility; a `phi` sharing a factor with `e` fails
/// with [`CryptoError::NotCoprime`] and no key is returned.
pub fn generate_rsa_keys(p: &BigUint, q: &BigUint) -> CryptoResult<(RsaPublicKey, RsaPrivateKey)> {
    let one = BigUint::one();
    let p_minus_1 = checked_prime(p, &one)?;
    let q_minus_1 = checked_prime(q, &one)?;

    let n = p.mul(q);
    let phi = p_minus_1.mul(&q_minus_1);
    let e = BigUint::from_u64(PUBLIC_EXPONENT);

    let d = mod_inverse(&e, &phi)?;
    debug!(%n, bits = n.bits(), "generated RSA key pair");

    Ok((RsaPublicKey::new(e, n.clone()), RsaPrivateKey::new(d, n)))
}

/// `prime - 1`, refusing values below 2.
fn checked_prime(prime: &BigUint, one: &BigUint) -> CryptoResult<BigUint> {
    match prime.checked_sub(one) {
        Some(pm1) if !pm1.is_zero() => Ok(pm1),
        _ => Err(CryptoError::InvalidPrime {
            value: prime.to_string(),
            reason: "must be at least 2".into(),
        }),
    }
}

/// SHA-256 of `message` as a big-endian integer, reduced mod `n`.
fn reduced_digest(message: &[u8], n: &BigUint) -> CryptoResult<BigUint> {
    BigUint::from_bytes_be(&sha256::hash(message)).rem(n)
}

/// `(H(m) mod n)^d mod n` as minimal big-endian bytes.
pub fn rsa_sign(message: &[u8], key: &RsaPrivateKey) -> CryptoResult<Vec<u8>> {
    let h = reduced_digest(message, &key.n)?;
    let s = h.modpow(&key.d, &key.n)?;
    debug!(len = message.len(), "signed message");
    Ok(s.to_bytes_be())
}

/// True iff `signature^e mod n == H(m) mod n`.
///
/// An empty signature, or one encoding an integer not below `n`, is malformed
/// and reported as an error instead of a plain `false`.
pub fn rsa_verify(message: &[u8], signature: &[u8], key: &RsaPublicKey) -> CryptoResult<bool> {
    let expected = reduced_digest(message, &key.n)?;
    if signature.is_empty() {
        return Err(CryptoError::EmptySignature);
    }
    let s = BigUint::from_bytes_be(signature);
    if s >= key.n {
        return Err(CryptoError::SignatureOutOfRange);
    }
    let candidate = s.modpow(&key.e, &key.n)?;
    let valid = candidate == expected;
    debug!(len = message.len(), valid, "verified signature");
    Ok(valid)
}
