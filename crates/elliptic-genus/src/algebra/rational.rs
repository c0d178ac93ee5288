//! Exact rationals and the small number-theoretic helpers built on them.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// Exact rational number used throughout the crate.
pub type Rational = BigRational;

/// Converts an integer into a [`Rational`].
#[inline]
#[must_use]
pub fn integer(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// The fraction `numer / denom`; `denom` must be nonzero.
#[inline]
#[must_use]
pub fn fraction(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// `base^exp` by repeated squaring.
#[must_use]
pub fn power(base: &Rational, mut exp: u32) -> Rational {
    let mut result = Rational::one();
    let mut square = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result *= &square;
        }
        square = &square * &square;
        exp >>= 1;
    }
    result
}

/// `n!`
#[must_use]
pub fn factorial(n: usize) -> BigInt {
    (1..=n).fold(BigInt::one(), |acc, k| acc * BigInt::from(k))
}

/// The binomial coefficient `C(n, k)`.
#[must_use]
pub fn binomial(n: usize, k: usize) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigInt::one();
    for i in 0..k {
        acc = acc * BigInt::from(n - i) / BigInt::from(i + 1);
    }
    acc
}

/// Bernoulli numbers `B_0 ..= B_n` with `B_1 = -1/2`.
///
/// Uses the recurrence `Σ_{j=0}^{m} C(m+1, j) B_j = 0`.
#[must_use]
pub fn bernoulli_numbers(n: usize) -> Vec<Rational> {
    let mut numbers: Vec<Rational> = Vec::with_capacity(n + 1);
    numbers.push(Rational::one());
    for m in 1..=n {
        let mut acc = Rational::zero();
        for (j, b) in numbers.iter().enumerate() {
            acc += Rational::from_integer(binomial(m + 1, j)) * b;
        }
        numbers.push(-acc / Rational::from_integer(BigInt::from(m + 1)));
    }
    numbers
}

/// The divisor sum `σ_k(n) = Σ_{d | n} d^k`.
#[must_use]
pub fn divisor_sigma(n: usize, k: u32) -> BigInt {
    (1..=n)
        .filter(|d| n % d == 0)
        .map(|d| BigInt::from(d).pow(k))
        .fold(BigInt::zero(), |acc, term| acc + term)
}

/// The first `count` primes.
#[must_use]
pub fn primes(count: usize) -> Vec<u64> {
    let mut found: Vec<u64> = Vec::with_capacity(count);
    let mut candidate = 2u64;
    while found.len() < count {
        if found
            .iter()
            .take_while(|p| **p * **p <= candidate)
            .all(|p| candidate % p != 0)
        {
            found.push(candidate);
        }
        candidate += 1;
    }
    found
}

/// Converts an integral rational to `i64`.
///
/// # Errors
///
/// Returns [`Error::Arithmetic`] when `value` is not an integer or does not fit.
pub fn to_i64(value: &Rational) -> Result<i64> {
    if !value.is_integer() {
        return Err(Error::Arithmetic(format!("{value} is not an integer")));
    }
    value
        .to_integer()
        .to_i64()
        .ok_or_else(|| Error::Arithmetic(format!("{value} does not fit in i64")))
}

/// Converts a nonnegative integral rational to `usize`.
///
/// # Errors
///
/// Returns [`Error::Arithmetic`] when `value` is negative or not an integer.
pub fn to_usize(value: &Rational) -> Result<usize> {
    if value.is_negative() || !value.is_integer() {
        return Err(Error::Arithmetic(format!(
            "{value} is not a nonnegative integer"
        )));
    }
    value
        .to_integer()
        .to_usize()
        .ok_or_else(|| Error::Arithmetic(format!("{value} does not fit in usize")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bernoulli_values() {
        let b = bernoulli_numbers(8);
        assert_eq!(b[1], fraction(-1, 2));
        assert_eq!(b[2], fraction(1, 6));
        assert_eq!(b[3], Rational::zero());
        assert_eq!(b[4], fraction(-1, 30));
        assert_eq!(b[6], fraction(1, 42));
        assert_eq!(b[8], fraction(-1, 30));
    }

    #[test]
    fn divisor_sums() {
        assert_eq!(divisor_sigma(6, 1), BigInt::from(12));
        assert_eq!(divisor_sigma(2, 3), BigInt::from(9));
        assert_eq!(divisor_sigma(3, 5), BigInt::from(244));
    }

    #[test]
    fn binomials_and_factorials() {
        assert_eq!(binomial(6, 2), BigInt::from(15));
        assert_eq!(binomial(2, 5), BigInt::zero());
        assert_eq!(factorial(5), BigInt::from(120));
        assert_eq!(power(&fraction(-1, 2), 3), fraction(-1, 8));
    }

    #[test]
    fn first_primes() {
        assert_eq!(primes(6), vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn integral_conversions() {
        assert_eq!(to_i64(&integer(-7)).ok(), Some(-7));
        assert!(to_i64(&fraction(1, 2)).is_err());
        assert!(to_usize(&integer(-1)).is_err());
    }
}
