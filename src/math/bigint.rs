use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};

/// Arbitrary-precision unsigned integer (base 2³² limbs, least significant first).
///
/// The limb vector never carries high zero limbs, so zero is the empty vector
/// and derived equality is numeric equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigUint(Vec<u32>);

impl BigUint {
    pub fn zero() -> BigUint {
        BigUint(Vec::new())
    }

    pub fn one() -> BigUint {
        BigUint(vec![1])
    }

    pub fn from_u64(value: u64) -> BigUint {
        let mut n = BigUint(vec![value as u32, (value >> 32) as u32]);
        n.normalize();
        n
    }

    /// Construct from big-endian bytes. An empty slice is zero.
    pub fn from_bytes_be(bytes: &[u8]) -> BigUint {
        let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);
        for chunk in bytes.rchunks(4) {
            let mut buf = [0u8; 4];
            buf[4 - chunk.len()..].copy_from_slice(chunk);
            limbs.push(u32::from_be_bytes(buf));
        }
        let mut n = BigUint(limbs);
        n.normalize();
        n
    }

    /// Emit minimal big-endian bytes. Zero is a single `0x00` byte.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() * 4);
        for limb in self.0.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let first = out.iter().position(|&b| b != 0).unwrap_or(out.len());
        out.drain(..first);
        if out.is_empty() {
            out.push(0);
        }
        out
    }

    /// Value as `u64` when it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.0.as_slice() {
            [] => Some(0),
            [lo] => Some(*lo as u64),
            [lo, hi] => Some(*lo as u64 | (*hi as u64) << 32),
            _ => None,
        }
    }

    fn normalize(&mut self) {
        while self.0.last() == Some(&0) {
            self.0.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.0 == [1]
    }

    /// Number of significant bits.
    pub fn bits(&self) -> usize {
        match self.0.last() {
            None => 0,
            Some(&top) => (self.0.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
        }
    }

    /// Bit `i`, counting from the least significant.
    pub fn bit(&self, i: usize) -> bool {
        self.0
            .get(i / 32)
            .map_or(false, |limb| (limb >> (i % 32)) & 1 == 1)
    }

    /// Add two BigUint.
    pub fn add(&self, other: &BigUint) -> BigUint {
        let (long, short) = if self.0.len() >= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        let mut res = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u64;
        for (i, &limb) in long.iter().enumerate() {
            let sum = limb as u64 + *short.get(i).unwrap_or(&0) as u64 + carry;
            res.push(sum as u32);
            carry = sum >> 32;
        }
        if carry > 0 {
            res.push(carry as u32);
        }
        BigUint(res)
    }

    /// Subtract `other` from `self`, or `None` if the result would be negative.
    pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
        if *self < *other {
            return None;
        }
        let mut res = self.clone();
        res.sub_assign(other);
        Some(res)
    }

    /// In-place subtraction. Callers guarantee `self >= other`.
    fn sub_assign(&mut self, other: &BigUint) {
        let mut borrow = false;
        for (i, limb) in self.0.iter_mut().enumerate() {
            let (d1, b1) = limb.overflowing_sub(*other.0.get(i).unwrap_or(&0));
            let (d2, b2) = d1.overflowing_sub(borrow as u32);
            *limb = d2;
            borrow = b1 || b2;
        }
        self.normalize();
    }

    /// Schoolbook multiplication.
    pub fn mul(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        let mut res = vec![0u32; self.0.len() + other.0.len()];
        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.0.iter().enumerate() {
                let cur = res[i + j] as u64 + a as u64 * b as u64 + carry;
                res[i + j] = cur as u32;
                carry = cur >> 32;
            }
            res[i + other.0.len()] = carry as u32;
        }
        let mut n = BigUint(res);
        n.normalize();
        n
    }

    /// `self = self * mul + add` for single-limb operands.
    fn mul_add_small(&mut self, mul: u32, add: u32) {
        let mut carry = add as u64;
        for limb in self.0.iter_mut() {
            let cur = *limb as u64 * mul as u64 + carry;
            *limb = cur as u32;
            carry = cur >> 32;
        }
        if carry > 0 {
            self.0.push(carry as u32);
        }
        self.normalize();
    }

    /// Shift left by one bit, feeding `low` into bit zero.
    fn shl1_with(&mut self, low: bool) {
        let mut carry = low as u32;
        for limb in self.0.iter_mut() {
            let next = *limb >> 31;
            *limb = (*limb << 1) | carry;
            carry = next;
        }
        if carry != 0 {
            self.0.push(carry);
        }
    }

    /// Divide by a small integer, returning (quotient, remainder).
    fn div_rem_u32(&self, rhs: u32) -> (BigUint, u32) {
        let mut rem: u64 = 0;
        let mut quo = vec![0u32; self.0.len()];
        for (i, &limb) in self.0.iter().enumerate().rev() {
            let acc = (rem << 32) | limb as u64;
            quo[i] = (acc / rhs as u64) as u32;
            rem = acc % rhs as u64;
        }
        let mut q = BigUint(quo);
        q.normalize();
        (q, rem as u32)
    }

    /// Long division returning (quotient, remainder).
    pub fn div_rem(&self, divisor: &BigUint) -> CryptoResult<(BigUint, BigUint)> {
        if divisor.is_zero() {
            return Err(CryptoError::ZeroModulus);
        }
        if *self < *divisor {
            return Ok((BigUint::zero(), self.clone()));
        }
        if let [small] = divisor.0.as_slice() {
            let (q, r) = self.div_rem_u32(*small);
            return Ok((q, BigUint::from_u64(r as u64)));
        }

        // Restoring binary division, one dividend bit at a time.
        let mut quo = vec![0u32; self.0.len()];
        let mut rem = BigUint::zero();
        for i in (0..self.bits()).rev() {
            rem.shl1_with(self.bit(i));
            if rem >= *divisor {
                rem.sub_assign(divisor);
                quo[i / 32] |= 1 << (i % 32);
            }
        }
        let mut q = BigUint(quo);
        q.normalize();
        Ok((q, rem))
    }

    /// `self mod m`.
    pub fn rem(&self, m: &BigUint) -> CryptoResult<BigUint> {
        Ok(self.div_rem(m)?.1)
    }

    /// Compute (self * other) mod m.
    pub fn mul_mod(&self, other: &BigUint, m: &BigUint) -> CryptoResult<BigUint> {
        self.mul(other).rem(m)
    }

    /// Modular exponentiation: self^exp mod m, right-to-left square-and-multiply.
    pub fn modpow(&self, exp: &BigUint, m: &BigUint) -> CryptoResult<BigUint> {
        // 1 mod m, which is 0 when m == 1
        let mut result = BigUint::one().rem(m)?;
        let mut base = self.rem(m)?;
        let bits = exp.bits();
        for i in 0..bits {
            if exp.bit(i) {
                result = result.mul_mod(&base, m)?;
            }
            if i + 1 < bits {
                base = base.mul_mod(&base, m)?;
            }
        }
        Ok(result)
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        BigUint::from_u64(value)
    }
}

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        BigUint::from_u64(value as u64)
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &BigUint) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zeroize for BigUint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Decimal display, nine digits per division step.
impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CHUNK: u32 = 1_000_000_000;
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        let mut chunks = Vec::new();
        let mut cur = self.clone();
        while !cur.is_zero() {
            let (q, r) = cur.div_rem_u32(CHUNK);
            chunks.push(r);
            cur = q;
        }
        let mut digits = String::with_capacity(chunks.len() * 9);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            digits.push_str(&top.to_string());
        }
        for chunk in iter {
            digits.push_str(&format!("{:09}", chunk));
        }
        f.pad_integral(true, "", &digits)
    }
}

/// Parse an unsigned decimal integer.
impl FromStr for BigUint {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CryptoError::InvalidInteger("empty string".into()));
        }
        let mut n = BigUint::zero();
        for ch in s.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| CryptoError::InvalidInteger(format!("unexpected character {ch:?} in {s:?}")))?;
            n.mul_add_small(10, digit);
        }
        Ok(n)
    }
}
