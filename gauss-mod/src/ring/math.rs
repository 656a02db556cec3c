//! Implementation of ring ops: plain rational arithmetic for p = 1, modular arithmetic otherwise.

use crate::errors::GaussError;

use super::{Scalar, extended_gcd};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use serde::{Deserialize, Serialize};

/// Arithmetic used by the elimination engine.
///
/// A modulus of 1 is the sentinel for ordinary rational arithmetic; any other modulus `p`
/// reduces every result into `[0, p)`. Primality of `p` is not checked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Ring {
    modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Self::rational()
    }
}

impl TryFrom<u64> for Ring {
    type Error = GaussError;

    fn try_from(modulus: u64) -> Result<Self, Self::Error> {
        Ring::try_with(modulus)
    }
}

impl From<Ring> for u64 {
    fn from(ring: Ring) -> Self {
        ring.modulus
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be positive; 1 selects ordinary arithmetic.
    pub fn try_with(modulus: u64) -> Result<Self, GaussError> {
        if modulus == 0 {
            return Err(GaussError::InvalidModulus(
                "Modulus must be a positive integer, got 0".to_string(),
            ));
        }

        Ok(Ring { modulus })
    }

    /// Ordinary arithmetic over the rationals (modulus 1).
    pub const fn rational() -> Self {
        Ring { modulus: 1 }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// assert_eq!(Ring::rational().modulus(), 1);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn is_modular(&self) -> bool {
        self.modulus != 1
    }

    fn big_modulus(&self) -> BigInt {
        BigInt::from(self.modulus)
    }

    /// Reduces a value into `[0, modulus)`, or returns it unchanged when the modulus is 1.
    ///
    /// Negative values land in range as well. A non-integral `a/b` under a modulus maps to
    /// `a * b^-1`, with `b^-1` following the rules of [`Ring::inv`].
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::{Ring, int, ratio};
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(&int(15)), int(5));
    /// assert_eq!(ring.normalize(&int(-3)), int(7));
    /// assert_eq!(ring.normalize(&int(10)), int(0));
    ///
    /// let plain = Ring::rational();
    /// assert_eq!(plain.normalize(&int(-3)), int(-3));
    /// assert_eq!(plain.normalize(&ratio(1, 3)), ratio(1, 3));
    /// ```
    pub fn normalize(&self, value: &Scalar) -> Scalar {
        if !self.is_modular() {
            return value.clone();
        }

        let p = self.big_modulus();
        let numer = value.numer().mod_floor(&p);
        if value.is_integer() {
            return Scalar::from_integer(numer);
        }

        let denom_inv = self.inverse_residue(&value.denom().mod_floor(&p));
        Scalar::from_integer((numer * denom_inv).mod_floor(&p))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::{Ring, int};
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(&int(7), &int(5)), int(5));
    /// assert_eq!(ring.mul(&int(-2), &int(6)), int(8));
    /// ```
    pub fn mul(&self, a: &Scalar, b: &Scalar) -> Scalar {
        self.normalize(&(a * b))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::{Ring, int};
    /// let ring = Ring::try_with(5).unwrap();
    /// assert_eq!(ring.sub(&int(1), &int(3)), int(3));
    /// assert_eq!(Ring::rational().sub(&int(1), &int(3)), int(-2));
    /// ```
    pub fn sub(&self, a: &Scalar, b: &Scalar) -> Scalar {
        self.normalize(&(a - b))
    }

    /// Computes the multiplicative inverse of `a`.
    ///
    /// With modulus 1 this is the ordinary reciprocal `1/a`. Otherwise `a` is reduced and the
    /// extended Euclidean algorithm runs on `(a, modulus)`. When `gcd(a, modulus) != 1` no
    /// inverse exists and **0 is returned** instead of an error, so callers must supply a
    /// prime modulus and a non-zero residue to get a meaningful answer.
    ///
    /// # Errors
    ///
    /// Returns `GaussError::DivisionByZero` if the modulus is 1 and `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::ring::{Ring, int, ratio};
    /// let ring = Ring::try_with(5).unwrap();
    /// assert_eq!(ring.inv(&int(2)).unwrap(), int(3)); // 2 * 3 = 6 = 1 mod 5
    /// assert_eq!(ring.inv(&int(0)).unwrap(), int(0));
    ///
    /// let composite = Ring::try_with(10).unwrap();
    /// assert_eq!(composite.inv(&int(4)).unwrap(), int(0)); // gcd(4, 10) = 2
    ///
    /// assert_eq!(Ring::rational().inv(&int(-3)).unwrap(), ratio(-1, 3));
    /// assert!(Ring::rational().inv(&int(0)).is_err());
    /// ```
    pub fn inv(&self, a: &Scalar) -> Result<Scalar, GaussError> {
        if !self.is_modular() {
            if a.is_zero() {
                return Err(GaussError::DivisionByZero);
            }
            return Ok(a.recip());
        }

        let a_norm = self.normalize(a);
        Ok(Scalar::from_integer(self.inverse_residue(a_norm.numer())))
    }

    /// Inverse of a residue in `[0, modulus)`, or 0 when none exists.
    fn inverse_residue(&self, a: &BigInt) -> BigInt {
        let p = self.big_modulus();
        let (old_r, old_s, _) = extended_gcd(a.clone(), p.clone());
        if !old_r.is_one() {
            return BigInt::zero();
        }

        old_s.mod_floor(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{int, ratio};

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const PRIMES: [u64; 6] = [2, 3, 5, 7, 13, 101];

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(11).is_ok());
        assert!(Ring::try_with(1).is_ok());
        assert!(Ring::try_with(0).is_err());
        assert_eq!(Ring::default(), Ring::rational());
    }

    #[test]
    fn test_element_normalization() -> Result<(), GaussError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.normalize(&int(5)), int(5));
        assert_eq!(ring.normalize(&int(16)), int(5));
        assert_eq!(ring.normalize(&int(-6)), int(5));
        assert_eq!(ring.normalize(&int(-22)), int(0));
        Ok(())
    }

    #[test]
    fn test_fraction_normalization() -> Result<(), GaussError> {
        let ring = Ring::try_with(7)?;
        // 1/2 = 4 mod 7 since 2 * 4 = 8
        assert_eq!(ring.normalize(&ratio(1, 2)), int(4));
        assert_eq!(ring.normalize(&ratio(-3, 2)), int(2));
        // 2 has no inverse mod 10, the fraction collapses to 0
        let composite = Ring::try_with(10)?;
        assert_eq!(composite.normalize(&ratio(3, 2)), int(0));
        Ok(())
    }

    #[test]
    fn test_multiplication() -> Result<(), GaussError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.mul(&int(5), &int(8)), int(7));
        assert_eq!(ring.mul(&int(-2), &int(8)), int(6));
        assert_eq!(Ring::rational().mul(&ratio(2, 3), &int(3)), int(2));
        Ok(())
    }

    #[test]
    fn test_subtraction() -> Result<(), GaussError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.sub(&int(5), &int(8)), int(8));
        assert_eq!(ring.sub(&int(8), &int(5)), int(3));
        Ok(())
    }

    #[test]
    fn test_inversion() -> Result<(), GaussError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.inv(&int(5))?, int(9));
        assert_eq!(ring.inv(&int(-6))?, int(9));
        assert_eq!(ring.inv(&int(1))?, int(1));
        Ok(())
    }

    #[test]
    fn test_inversion_without_coprime_is_zero() -> Result<(), GaussError> {
        let ring = Ring::try_with(12)?;
        assert_eq!(ring.inv(&int(6))?, int(0));
        assert_eq!(ring.inv(&int(8))?, int(0));
        assert_eq!(ring.inv(&int(0))?, int(0));
        assert_eq!(ring.inv(&int(5))?, int(5));
        Ok(())
    }

    #[test]
    fn test_rational_inversion_of_zero_fails() {
        let result = Ring::rational().inv(&int(0));
        assert!(matches!(result, Err(GaussError::DivisionByZero)));
    }

    #[test]
    fn test_serde_roundtrip_validates_modulus() {
        let ring = Ring::try_with(7).unwrap();
        assert_eq!(serde_json::to_string(&ring).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Ring>("7").unwrap(), ring);
        assert!(serde_json::from_str::<Ring>("0").is_err());
    }

    #[quickcheck]
    fn prop_normalize_lands_in_range(n: i64, pick: usize) -> bool {
        let p = PRIMES[pick % PRIMES.len()];
        let ring = Ring::try_with(p).unwrap();
        let reduced = ring.normalize(&int(n));
        reduced >= int(0) && reduced < int(p as i64)
    }

    #[quickcheck]
    fn prop_normalize_without_modulus_is_identity(n: i64) -> bool {
        Ring::rational().normalize(&int(n)) == int(n)
    }

    #[quickcheck]
    fn prop_inverse_times_value_is_one(a: i64, pick: usize) -> TestResult {
        let p = PRIMES[pick % PRIMES.len()];
        let ring = Ring::try_with(p).unwrap();
        if ring.normalize(&int(a)) == int(0) {
            return TestResult::discard();
        }

        let inverse = ring.inv(&int(a)).unwrap();
        TestResult::from_bool(ring.mul(&inverse, &int(a)) == int(1))
    }
}
