use num_integer::Integer;
use num_traits::{One, Zero};

/// Finds (g, x, y) such that ax + by = g, where |g| = gcd(a, b).
///
/// Iterative form of the extended Euclidean algorithm: the remainder sequence starts at
/// `(a, b)` and stops once the remainder reaches zero, `g` being the last non-zero one.
/// Quotients are floored, so for non-negative inputs `g` is non-negative as well.
pub fn extended_gcd<T>(a: T, b: T) -> (T, T, T)
where
    T: Integer + Clone,
{
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (T::one(), T::zero());
    let (mut old_t, mut t) = (T::zero(), T::one());

    while !r.is_zero() {
        let quotient = old_r.div_floor(&r);

        let next_r = old_r - quotient.clone() * r.clone();
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = old_s - quotient.clone() * s.clone();
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = old_t - quotient * t.clone();
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}
