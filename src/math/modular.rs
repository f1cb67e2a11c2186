//! Modular exponentiation and the extended Euclidean algorithm.

use crate::error::{CryptoError, CryptoResult};
use crate::math::bigint::BigUint;
use crate::math::signed::BigInt;

/// `base^exponent mod modulus` by binary exponentiation.
///
/// Fails with [`CryptoError::ZeroModulus`] when `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> CryptoResult<BigUint> {
    base.modpow(exponent, modulus)
}

/// Returns `(g, x, y)` with `g = gcd(a, b) = a*x + b*y`.
///
/// `extended_gcd(0, b)` is `(b, 0, 1)`; `extended_gcd(a, 0)` is `(a, 1, 0)`.
pub fn extended_gcd(a: &BigUint, b: &BigUint) -> CryptoResult<(BigUint, BigInt, BigInt)> {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r)?;
        let q = BigInt::from(q);

        old_r = std::mem::replace(&mut r, rem);
        let next_s = old_s.sub(&q.mul(&s));
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = old_t.sub(&q.mul(&t));
        old_t = std::mem::replace(&mut t, next_t);
    }

    Ok((old_r, old_s, old_t))
}

/// Inverse of `a` modulo `m`.
///
/// A gcd other than one is a hard error, never a silent fallback.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> CryptoResult<BigUint> {
    if m.is_zero() {
        return Err(CryptoError::ZeroModulus);
    }
    let (g, x, _) = extended_gcd(a, m)?;
    if !g.is_one() {
        return Err(CryptoError::NotCoprime {
            value: a.to_string(),
            modulus: m.to_string(),
            gcd: g.to_string(),
        });
    }
    x.rem_euclid(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from_u64(v)
    }

    #[test]
    fn extended_gcd_textbook() {
        let (g, x, y) = extended_gcd(&n(240), &n(46)).unwrap();
        assert_eq!(g, n(2));
        assert_eq!(x, BigInt::from(-9));
        assert_eq!(y, BigInt::from(47));
    }

    #[test]
    fn extended_gcd_with_zero() {
        let (g, x, y) = extended_gcd(&n(0), &n(7)).unwrap();
        assert_eq!((g, x, y), (n(7), BigInt::zero(), BigInt::one()));
        let (g, x, y) = extended_gcd(&n(7), &n(0)).unwrap();
        assert_eq!((g, x, y), (n(7), BigInt::one(), BigInt::zero()));
    }

    #[test]
    fn extended_gcd_rsa_exponent() {
        let (g, x, y) = extended_gcd(&n(65537), &n(3120)).unwrap();
        assert!(g.is_one());
        assert_eq!(x, BigInt::from(-367));
        assert_eq!(y, BigInt::from(7709));
    }

    #[test]
    fn inverse_of_public_exponent() {
        assert_eq!(mod_inverse(&n(65537), &n(3120)).unwrap(), n(2753));
    }

    #[test]
    fn inverse_requires_coprime() {
        let err = mod_inverse(&n(6), &n(9)).unwrap_err();
        assert!(matches!(err, CryptoError::NotCoprime { ref gcd, .. } if gcd.as_str() == "3"));
        assert_eq!(mod_inverse(&n(3), &n(0)), Err(CryptoError::ZeroModulus));
    }

    #[test]
    fn mod_pow_matches_naive_loop() {
        for base in 0..20u64 {
            for exp in 0..12u64 {
                let m = 97u64;
                let naive = (0..exp).fold(1 % m, |acc, _| acc * base % m);
                assert_eq!(mod_pow(&n(base), &n(exp), &n(m)).unwrap(), n(naive));
            }
        }
    }
}
