use std::fmt;

use crate::error::CryptoResult;
use crate::math::bigint::BigUint;

/// Sign-magnitude integer, just enough for Bezout coefficients.
///
/// Zero is always stored as non-negative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigInt {
    negative: bool,
    magnitude: BigUint,
}

impl BigInt {
    pub fn new(negative: bool, magnitude: BigUint) -> BigInt {
        let negative = negative && !magnitude.is_zero();
        BigInt { negative, magnitude }
    }

    pub fn zero() -> BigInt {
        BigInt::default()
    }

    pub fn one() -> BigInt {
        BigInt::from(BigUint::one())
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    pub fn neg(&self) -> BigInt {
        BigInt::new(!self.negative, self.magnitude.clone())
    }

    pub fn add(&self, other: &BigInt) -> BigInt {
        if self.negative == other.negative {
            return BigInt::new(self.negative, self.magnitude.add(&other.magnitude));
        }
        // Opposite signs: the larger magnitude decides the sign.
        match self.magnitude.checked_sub(&other.magnitude) {
            Some(diff) => BigInt::new(self.negative, diff),
            None => {
                let diff = other.magnitude.checked_sub(&self.magnitude).unwrap_or_default();
                BigInt::new(other.negative, diff)
            }
        }
    }

    pub fn sub(&self, other: &BigInt) -> BigInt {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &BigInt) -> BigInt {
        BigInt::new(
            self.negative != other.negative,
            self.magnitude.mul(&other.magnitude),
        )
    }

    /// Least non-negative residue mod `m`.
    pub fn rem_euclid(&self, m: &BigUint) -> CryptoResult<BigUint> {
        let r = self.magnitude.rem(m)?;
        if self.negative && !r.is_zero() {
            Ok(m.checked_sub(&r).unwrap_or_default())
        } else {
            Ok(r)
        }
    }
}

impl From<BigUint> for BigInt {
    fn from(magnitude: BigUint) -> Self {
        BigInt::new(false, magnitude)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::new(value < 0, BigUint::from_u64(value.unsigned_abs()))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude.to_string();
        f.pad_integral(!self.negative, "", &digits)
    }
}
