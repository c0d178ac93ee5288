//! Laurent polynomials in a single variable `y`.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::rational::Rational;
use super::{format_term, join_terms, Coefficient};

/// A finite sum `Σ c_e y^e` with `e ∈ Z`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Laurent<R> {
    terms: BTreeMap<i32, R>,
}

fn accumulate<R: Coefficient>(terms: &mut BTreeMap<i32, R>, exponent: i32, coeff: R) {
    if coeff.is_zero() {
        return;
    }
    match terms.remove(&exponent) {
        Some(existing) => {
            let sum = existing + coeff;
            if !sum.is_zero() {
                terms.insert(exponent, sum);
            }
        }
        None => {
            terms.insert(exponent, coeff);
        }
    }
}

impl<R> Default for Laurent<R> {
    fn default() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }
}

impl<R: Coefficient> Laurent<R> {
    /// The single term `coeff * y^exponent`.
    #[must_use]
    pub fn monomial(exponent: i32, coeff: R) -> Self {
        let mut terms = BTreeMap::new();
        accumulate(&mut terms, exponent, coeff);
        Self { terms }
    }

    /// The constant `coeff`.
    #[must_use]
    pub fn constant(coeff: R) -> Self {
        Self::monomial(0, coeff)
    }

    /// The variable `y`.
    #[must_use]
    pub fn y() -> Self {
        Self::monomial(1, R::one())
    }

    /// Builds `Σ coeff * y^exponent` from pairs; repeated exponents add up.
    pub fn from_terms(pairs: impl IntoIterator<Item = (i32, R)>) -> Self {
        let mut terms = BTreeMap::new();
        for (e, c) in pairs {
            accumulate(&mut terms, e, c);
        }
        Self { terms }
    }

    /// Coefficient of `y^exponent`.
    #[must_use]
    pub fn coefficient(&self, exponent: i32) -> R {
        self.terms.get(&exponent).cloned().unwrap_or_else(R::zero)
    }

    /// Nonzero terms in increasing exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (i32, &R)> {
        self.terms.iter().map(|(e, c)| (*e, c))
    }

    /// Exponents with a nonzero coefficient.
    pub fn exponents(&self) -> impl Iterator<Item = i32> + '_ {
        self.terms.keys().copied()
    }

    /// Lowest exponent present.
    #[must_use]
    pub fn valuation(&self) -> Option<i32> {
        self.terms.keys().next().copied()
    }

    /// Highest exponent present.
    #[must_use]
    pub fn degree(&self) -> Option<i32> {
        self.terms.keys().next_back().copied()
    }

    /// Multiplies by `y^by`.
    #[must_use]
    pub fn shift(&self, by: i32) -> Self {
        Self {
            terms: self.terms.iter().map(|(e, c)| (e + by, c.clone())).collect(),
        }
    }

    /// Applies `f` to every coefficient.
    pub fn map<S: Coefficient>(&self, mut f: impl FnMut(&R) -> S) -> Laurent<S> {
        Laurent::from_terms(self.terms.iter().map(|(e, c)| (*e, f(c))))
    }

    /// The value at `y = 1`.
    #[must_use]
    pub fn sum_coefficients(&self) -> R {
        self.terms
            .values()
            .fold(R::zero(), |acc, c| acc + c.clone())
    }

    /// `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::one(), |acc, _| acc * self.clone())
    }
}

impl<R: Coefficient> Zero for Laurent<R> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<R: Coefficient> One for Laurent<R> {
    fn one() -> Self {
        Self::constant(R::one())
    }
}

impl<R: Coefficient> Coefficient for Laurent<R> {
    fn scale(&self, factor: &Rational) -> Self {
        self.map(|c| c.scale(factor))
    }

    fn try_inverse(&self) -> Option<Self> {
        let mut terms = self.terms.iter();
        match (terms.next(), terms.next()) {
            (Some((e, c)), None) => c.try_inverse().map(|inv| Self::monomial(-e, inv)),
            _ => None,
        }
    }
}

impl<R: Coefficient> Add for Laurent<R> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (e, c) in rhs.terms {
            accumulate(&mut self.terms, e, c);
        }
        self
    }
}

impl<R: Coefficient> Sub for Laurent<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<R: Coefficient> Neg for Laurent<R> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            terms: self.terms.into_iter().map(|(e, c)| (e, -c)).collect(),
        }
    }
}

impl<R: Coefficient> Mul for Laurent<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut terms = BTreeMap::new();
        for (ea, ca) in &self.terms {
            for (eb, cb) in &rhs.terms {
                accumulate(&mut terms, ea + eb, ca.clone() * cb.clone());
            }
        }
        Self { terms }
    }
}

impl<R: Coefficient + fmt::Display> fmt::Display for Laurent<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|(e, c)| {
                let name = match e {
                    0 => String::new(),
                    1 => "y".to_string(),
                    _ => format!("y^{e}"),
                };
                format_term(&c.to_string(), &name)
            })
            .collect();
        f.write_str(&join_terms(&rendered))
    }
}

/// Serializes as a map from exponent to the coefficient's text.
impl<R: Coefficient + fmt::Display> Serialize for Laurent<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.terms.len()))?;
        for (e, c) in &self.terms {
            map.serialize_entry(e, &c.to_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::integer;

    fn lp(pairs: &[(i32, i64)]) -> Laurent<Rational> {
        Laurent::from_terms(pairs.iter().map(|&(e, c)| (e, integer(c))))
    }

    #[test]
    fn product_with_inverse_powers() {
        let a = lp(&[(-1, 1), (1, 1)]);
        let b = lp(&[(1, 1), (-1, -1)]);
        // (y^-1 + y)(y - y^-1) = y^2 - y^-2
        assert_eq!(a * b, lp(&[(2, 1), (-2, -1)]));
    }

    #[test]
    fn monomials_are_units() {
        let m = lp(&[(3, 2)]);
        let inv = m.try_inverse().expect("monomial is a unit");
        assert_eq!(m * inv, Laurent::one());
        assert_eq!(lp(&[(0, 1), (1, 1)]).try_inverse(), None);
    }

    #[test]
    fn evaluation_at_one() {
        assert_eq!(lp(&[(-1, -1), (1, 1), (2, 1), (4, -1)]).sum_coefficients(), integer(0));
        assert_eq!(lp(&[(0, 1), (1, 10), (2, 1)]).sum_coefficients(), integer(12));
    }

    #[test]
    fn display_and_json() {
        let p = lp(&[(1, -100), (2, -100)]);
        assert_eq!(p.to_string(), "-100*y - 100*y^2");
        assert_eq!(lp(&[(-1, 1), (0, -2)]).to_string(), "y^-1 - 2");
        let json = serde_json::to_string(&p).expect("serializable");
        assert_eq!(json, r#"{"1":"-100","2":"-100"}"#);
    }

    #[test]
    fn shift_and_bounds() {
        let p = lp(&[(0, 1), (2, 3)]).shift(-1);
        assert_eq!(p.valuation(), Some(-1));
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.coefficient(1), integer(3));
        assert_eq!(p.exponents().collect::<Vec<_>>(), vec![-1, 1]);
    }
}
