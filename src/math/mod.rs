//! Arbitrary-precision integers for the RSA layer.

pub mod bigint;
pub mod modular;
pub mod signed;

pub use bigint::BigUint;
pub use modular::{extended_gcd, mod_inverse, mod_pow};
pub use signed::BigInt;
