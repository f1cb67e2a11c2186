//! From-scratch SHA-1, SHA-256, HMAC and textbook RSA for teaching.
//!
//! **Not for production use.** Nothing here is constant-time, the RSA scheme
//! has no padding and is meant for toy primes such as 61 and 53, and the
//! 512-bit digest is two SHA-256 passes glued together rather than SHA-512.
//! These weaknesses are the point of the labs and are kept as they are.
//!
//! Digest and MAC functions are total; key generation, signing and
//! verification return [`CryptoResult`].
//!
//! ```
//! use crypto_lab::{generate_rsa_keys, rsa_sign, rsa_verify, BigUint};
//!
//! let (public, private) = generate_rsa_keys(&BigUint::from_u64(61), &BigUint::from_u64(53))?;
//! let signature = rsa_sign(b"Hello world", &private)?;
//! assert!(rsa_verify(b"Hello world", &signature, &public)?);
//! # Ok::<(), crypto_lab::CryptoError>(())
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod lab;
pub mod logging;
pub mod mac;
pub mod math;
pub mod rsa;

pub use error::{CryptoError, CryptoResult};
pub use hash::{derived512, sha1, sha1_hex, sha256};
pub use mac::{hmac_sha256, verify_hmac_sha256};
pub use math::{extended_gcd, mod_inverse, mod_pow, BigInt, BigUint};
pub use rsa::{generate_rsa_keys, rsa_sign, rsa_verify, RsaPrivateKey, RsaPublicKey};
