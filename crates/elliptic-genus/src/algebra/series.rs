//! Truncated power series in `q`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::rational::Rational;
use super::{format_term, join_terms, Coefficient};
use crate::error::{Error, Result};

/// `Σ_{n < precision} a_n q^n + O(q^precision)`.
///
/// The number of stored coefficients *is* the precision, so a coefficient
/// that is zero is still known to be zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series<R> {
    coefficients: Vec<R>,
}

impl<R: Coefficient> Series<R> {
    /// A series with the given coefficients; its precision is their count.
    #[must_use]
    pub fn new(coefficients: Vec<R>) -> Self {
        Self { coefficients }
    }

    /// A series whose `n`-th coefficient is `f(n)`.
    pub fn from_fn(precision: usize, f: impl FnMut(usize) -> R) -> Self {
        Self {
            coefficients: (0..precision).map(f).collect(),
        }
    }

    /// `0 + O(q^precision)`.
    #[must_use]
    pub fn zero(precision: usize) -> Self {
        Self::from_fn(precision, |_| R::zero())
    }

    /// `1 + O(q^precision)`.
    #[must_use]
    pub fn one(precision: usize) -> Self {
        Self::constant(R::one(), precision)
    }

    /// `c + O(q^precision)`.
    #[must_use]
    pub fn constant(c: R, precision: usize) -> Self {
        Self::monomial(0, c, precision)
    }

    /// `c q^degree + O(q^precision)`; zero when `degree >= precision`.
    #[must_use]
    pub fn monomial(degree: usize, c: R, precision: usize) -> Self {
        let mut out = Self::zero(precision);
        if let Some(slot) = out.coefficients.get_mut(degree) {
            *slot = c;
        }
        out
    }

    /// Number of known coefficients.
    #[inline]
    #[must_use]
    pub fn precision(&self) -> usize {
        self.coefficients.len()
    }

    /// The coefficient of `q^n`, or `None` beyond the precision.
    #[inline]
    #[must_use]
    pub fn coefficient(&self, n: usize) -> Option<&R> {
        self.coefficients.get(n)
    }

    /// All known coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[R] {
        &self.coefficients
    }

    /// True when every known coefficient vanishes.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(R::is_zero)
    }

    /// Drops every term from `q^precision` on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionExceeded`] when more coefficients are
    /// requested than the series knows.
    pub fn truncate(&self, precision: usize) -> Result<Self> {
        if precision > self.precision() {
            return Err(Error::PrecisionExceeded {
                requested: precision,
                available: self.precision(),
            });
        }
        Ok(Self {
            coefficients: self.coefficients[..precision].to_vec(),
        })
    }

    /// Applies `f` to every coefficient.
    pub fn map<S: Coefficient>(&self, f: impl FnMut(&R) -> S) -> Series<S> {
        Series {
            coefficients: self.coefficients.iter().map(f).collect(),
        }
    }

    /// Multiplies every coefficient by a rational.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        self.map(|c| c.scale(factor))
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn mul_coefficient(&self, c: &R) -> Self {
        self.map(|a| a.clone() * c.clone())
    }

    /// `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::one(self.precision()), |acc, _| acc * self.clone())
    }

    /// The multiplicative inverse, defined when the constant term is a unit.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let precision = self.precision();
        let lead = self.coefficients.first()?.try_inverse()?;
        let mut out: Vec<R> = Vec::with_capacity(precision);
        out.push(lead.clone());
        for n in 1..precision {
            let mut acc = R::zero();
            for i in 1..=n {
                acc = acc + self.coefficients[i].clone() * out[n - i].clone();
            }
            out.push(-(lead.clone() * acc));
        }
        Some(Self { coefficients: out })
    }
}

impl<R: Coefficient> Add for Series<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let coefficients = self
            .coefficients
            .into_iter()
            .zip(rhs.coefficients)
            .map(|(a, b)| a + b)
            .collect();
        Self { coefficients }
    }
}

impl<R: Coefficient> Sub for Series<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let coefficients = self
            .coefficients
            .into_iter()
            .zip(rhs.coefficients)
            .map(|(a, b)| a - b)
            .collect();
        Self { coefficients }
    }
}

impl<R: Coefficient> Neg for Series<R> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
        }
    }
}

impl<R: Coefficient> Mul for Series<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let precision = self.precision().min(rhs.precision());
        let mut coefficients = vec![R::zero(); precision];
        for (i, a) in self.coefficients.iter().take(precision).enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coefficients.iter().take(precision - i).enumerate() {
                if b.is_zero() {
                    continue;
                }
                let slot = &mut coefficients[i + j];
                *slot = slot.clone() + a.clone() * b.clone();
            }
        }
        Self { coefficients }
    }
}

impl<R: Coefficient + fmt::Display> fmt::Display for Series<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(n, c)| {
                let name = match n {
                    0 => String::new(),
                    1 => "q".to_string(),
                    _ => format!("q^{n}"),
                };
                format_term(&c.to_string(), &name)
            })
            .collect();
        rendered.push(format!("O(q^{})", self.precision()));
        f.write_str(&join_terms(&rendered))
    }
}

impl<R: Coefficient + Serialize> Serialize for Series<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Series", 2)?;
        state.serialize_field("precision", &self.precision())?;
        state.serialize_field("coefficients", &self.coefficients)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{fraction, integer};

    fn s(coeffs: &[i64]) -> Series<Rational> {
        Series::new(coeffs.iter().map(|&c| integer(c)).collect())
    }

    #[test]
    fn product_keeps_smaller_precision() {
        let p = s(&[1, 1, 0, 0]) * s(&[1, 1, 0]);
        assert_eq!(p, s(&[1, 2, 1]));
    }

    #[test]
    fn geometric_inverse() {
        let inv = s(&[1, -1, 0, 0, 0]).inverse().expect("unit constant");
        assert_eq!(inv, s(&[1, 1, 1, 1, 1]));
        assert!(s(&[0, 1]).inverse().is_none());
    }

    #[test]
    fn inverse_of_non_monic_series() {
        let f = s(&[2, 3, 5]);
        let g = f.inverse().expect("unit constant");
        assert_eq!(g.coefficient(0), Some(&fraction(1, 2)));
        assert_eq!(f * g, Series::one(3));
    }

    #[test]
    fn truncation_is_validated() {
        let f = s(&[1, 2, 3]);
        assert_eq!(f.truncate(2).expect("within precision"), s(&[1, 2]));
        assert_eq!(
            f.truncate(4),
            Err(Error::PrecisionExceeded {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn display_shows_error_term() {
        assert_eq!(s(&[1, 0, -3]).to_string(), "1 - 3*q^2 + O(q^3)");
        assert_eq!(Series::<Rational>::zero(2).to_string(), "O(q^2)");
    }

    #[test]
    fn monomial_beyond_precision_is_zero() {
        assert!(Series::monomial(5, integer(1), 3).is_zero());
        assert_eq!(s(&[1, 1, 0]).pow(2), s(&[1, 2, 1]));
    }
}
