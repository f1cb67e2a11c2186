//! Modular arithmetic checked against num-bigint.

use crypto_lab::{extended_gcd, mod_inverse, mod_pow, BigInt, BigUint, CryptoError};
use num_traits::Zero;
use proptest::collection::vec;
use proptest::prelude::*;

fn reference(n: &BigUint) -> num_bigint::BigUint {
    num_bigint::BigUint::from_bytes_be(&n.to_bytes_be())
}

fn reference_signed(n: &BigInt) -> num_bigint::BigInt {
    n.to_string().parse().unwrap()
}

#[test]
fn rsa_sized_modpow() {
    // 2^127 - 1 and 2^89 - 1 are Mersenne primes
    let p: BigUint = "170141183460469231731687303715884105727".parse().unwrap();
    let q: BigUint = "618970019642690137449562111".parse().unwrap();
    let n = p.mul(&q);
    let base: BigUint = "123456789012345678901234567890".parse().unwrap();
    let exp = BigUint::from_u64(65537);
    let ours = mod_pow(&base, &exp, &n).unwrap();
    let theirs = reference(&base).modpow(&reference(&exp), &reference(&n));
    assert_eq!(reference(&ours), theirs);
}

#[test]
fn zero_modulus_is_an_error() {
    let x = BigUint::from_u64(5);
    assert_eq!(mod_pow(&x, &x, &BigUint::zero()), Err(CryptoError::ZeroModulus));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mod_pow_agrees_with_num_bigint(
        base in vec(any::<u8>(), 0..32),
        exp in vec(any::<u8>(), 0..8),
        modulus in vec(any::<u8>(), 1..24),
    ) {
        let (base, exp, m) = (
            BigUint::from_bytes_be(&base),
            BigUint::from_bytes_be(&exp),
            BigUint::from_bytes_be(&modulus),
        );
        prop_assume!(!m.is_zero());
        let ours = mod_pow(&base, &exp, &m).unwrap();
        let theirs = reference(&base).modpow(&reference(&exp), &reference(&m));
        prop_assert_eq!(reference(&ours), theirs);
    }

    #[test]
    fn zero_exponent_gives_one_mod_m(x in any::<u64>(), m in 1u64..) {
        let r = mod_pow(&BigUint::from_u64(x), &BigUint::zero(), &BigUint::from_u64(m)).unwrap();
        prop_assert_eq!(r.to_u64(), Some(1 % m));
    }

    #[test]
    fn bezout_identity(a in vec(any::<u8>(), 0..20), b in vec(any::<u8>(), 0..20)) {
        let (a, b) = (BigUint::from_bytes_be(&a), BigUint::from_bytes_be(&b));
        let (g, x, y) = extended_gcd(&a, &b).unwrap();

        let (ra, rb, rg) = (reference(&a), reference(&b), reference(&g));
        let lhs = num_bigint::BigInt::from(ra.clone()) * reference_signed(&x)
            + num_bigint::BigInt::from(rb.clone()) * reference_signed(&y);
        prop_assert_eq!(lhs, num_bigint::BigInt::from(rg.clone()));

        // g divides both inputs, so with the identity above it is the gcd
        if !rg.is_zero() {
            prop_assert!((&ra % &rg).is_zero());
            prop_assert!((&rb % &rg).is_zero());
        } else {
            prop_assert!(ra.is_zero() && rb.is_zero());
        }
    }

    #[test]
    fn inverse_multiplies_to_one(a in 1u64.., m in 2u64..) {
        let (a, m) = (BigUint::from_u64(a), BigUint::from_u64(m));
        match mod_inverse(&a, &m) {
            Ok(inv) => prop_assert!(a.mul_mod(&inv, &m).unwrap().is_one()),
            Err(CryptoError::NotCoprime { .. }) => {
                let (g, _, _) = extended_gcd(&a, &m).unwrap();
                prop_assert!(!g.is_one());
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}
