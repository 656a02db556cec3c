//! # Ring Module
//!
//! Provides the [`Ring`] struct that selects between ordinary rational arithmetic (p = 1)
//! and arithmetic modulo p, together with the [`Scalar`] entry type.

pub mod helper;
pub mod math;

use num_bigint::BigInt;
use num_rational::BigRational;

/// Matrix entry: an exact rational. Entries are integral under a modulus.
pub type Scalar = BigRational;

pub use helper::extended_gcd;
pub use math::Ring;

/// Builds an integral [`Scalar`].
pub fn int(n: i64) -> Scalar {
    Scalar::from_integer(BigInt::from(n))
}

/// Builds the reduced fraction `numer / denom`.
///
/// Panics if `denom` is zero.
pub fn ratio(numer: i64, denom: i64) -> Scalar {
    Scalar::new(BigInt::from(numer), BigInt::from(denom))
}

/// Serde adapter writing a [`Scalar`] as `"3"` or `"-1/3"`.
pub mod scalar_str {
    use super::Scalar;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &Scalar, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Scalar, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse::<Scalar>().map_err(de::Error::custom)
    }
}
