//! Sparse multivariate polynomials over Q.
//!
//! A monomial is its exponent vector with trailing zeros removed, so
//! polynomials never need to declare how many variables they use: `x_3` and
//! `1` can be multiplied without padding either side first.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::rational::{power, Rational};
use super::{format_term, join_terms, Coefficient};

/// Exponent vector of a monomial, without trailing zeros.
pub type Monomial = Vec<u32>;

/// A polynomial in `x_0, x_1, …` with rational coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Rational>,
}

fn trim(mut exponents: Monomial) -> Monomial {
    while exponents.last() == Some(&0) {
        exponents.pop();
    }
    exponents
}

fn degree(monomial: &[u32]) -> u32 {
    monomial.iter().sum()
}

fn multiply_monomials(a: &[u32], b: &[u32]) -> Monomial {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0))
        .collect()
}

impl Polynomial {
    /// The constant polynomial `c`.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::from_term(Vec::new(), c)
    }

    /// The variable `x_index`.
    #[must_use]
    pub fn variable(index: usize) -> Self {
        let mut exponents = vec![0; index + 1];
        exponents[index] = 1;
        Self::from_term(exponents, Rational::one())
    }

    /// A single term `coeff * x^exponents`.
    #[must_use]
    pub fn from_term(exponents: Monomial, coeff: Rational) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(trim(exponents), coeff);
        }
        Self { terms }
    }

    /// The linear form `Σ coeffs[i] x_i`.
    #[must_use]
    pub fn linear_form(coeffs: &[Rational]) -> Self {
        let mut out = Self::zero();
        for (i, c) in coeffs.iter().enumerate() {
            if !c.is_zero() {
                let mut exponents = vec![0; i + 1];
                exponents[i] = 1;
                out.terms.insert(exponents, c.clone());
            }
        }
        out
    }

    /// Iterates over `(exponents, coefficient)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> {
        self.terms.iter()
    }

    /// Number of nonzero terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Coefficient of `x^exponents`.
    #[must_use]
    pub fn coefficient(&self, exponents: &[u32]) -> Rational {
        self.terms
            .get(&trim(exponents.to_vec()))
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    /// Largest total degree of a term, or `None` for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> Option<u32> {
        self.terms.keys().map(|m| degree(m)).max()
    }

    /// The terms of total degree exactly `d`.
    #[must_use]
    pub fn homogeneous_part(&self, d: u32) -> Self {
        self.filter_terms(|m| degree(m) == d)
    }

    /// The terms of total degree at most `max_degree`.
    #[must_use]
    pub fn truncated(&self, max_degree: u32) -> Self {
        self.filter_terms(|m| degree(m) <= max_degree)
    }

    fn filter_terms(&self, keep: impl Fn(&[u32]) -> bool) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|(m, _)| keep(m))
                .map(|(m, c)| (m.clone(), c.clone()))
                .collect(),
        }
    }

    fn accumulate(&mut self, monomial: Monomial, coeff: Rational) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.remove(&monomial) {
            Some(existing) => {
                let sum = existing + coeff;
                if !sum.is_zero() {
                    self.terms.insert(monomial, sum);
                }
            }
            None => {
                self.terms.insert(monomial, coeff);
            }
        }
    }

    /// The product, dropping every term of total degree above `max_degree`.
    #[must_use]
    pub fn mul_truncated(&self, other: &Self, max_degree: u32) -> Self {
        let mut out = Self::zero();
        for (ma, ca) in &self.terms {
            let da = degree(ma);
            if da > max_degree {
                continue;
            }
            for (mb, cb) in &other.terms {
                if da + degree(mb) <= max_degree {
                    out.accumulate(multiply_monomials(ma, mb), ca * cb);
                }
            }
        }
        out
    }

    /// `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::one(), |acc, _| &acc * self)
    }

    /// Evaluates at `point`; variables past the end of `point` are zero.
    #[must_use]
    pub fn evaluate(&self, point: &[Rational]) -> Rational {
        let mut total = Rational::zero();
        'terms: for (monomial, coeff) in &self.terms {
            let mut value = coeff.clone();
            for (i, &e) in monomial.iter().enumerate() {
                if e == 0 {
                    continue;
                }
                match point.get(i) {
                    Some(x) => value *= power(x, e),
                    None => continue 'terms,
                }
            }
            total += value;
        }
        total
    }

    /// Applies the linear functional sending each monomial to `f(monomial)`.
    pub fn apply_linear(&self, mut f: impl FnMut(&Monomial) -> Rational) -> Rational {
        self.terms
            .iter()
            .fold(Rational::zero(), |acc, (m, c)| acc + c * f(m))
    }

    /// Formats the polynomial with custom variable names.
    ///
    /// Terms are listed by decreasing total degree.
    pub fn format_with(&self, name: impl Fn(usize) -> String) -> String {
        let mut ordered: Vec<(&Monomial, &Rational)> = self.terms.iter().collect();
        ordered.sort_by(|(a, _), (b, _)| degree(b).cmp(&degree(a)).then_with(|| b.cmp(a)));
        let rendered: Vec<String> = ordered
            .into_iter()
            .map(|(monomial, coeff)| {
                let factors: Vec<String> = monomial
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| **e > 0)
                    .map(|(i, &e)| {
                        if e == 1 {
                            name(i)
                        } else {
                            format!("{}^{e}", name(i))
                        }
                    })
                    .collect();
                format_term(&coeff.to_string(), &factors.join("*"))
            })
            .collect();
        join_terms(&rendered)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(|i| format!("x{i}")))
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(Rational::one())
    }
}

impl Coefficient for Polynomial {
    fn scale(&self, factor: &Rational) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c * factor))
                .collect(),
        }
    }

    fn try_inverse(&self) -> Option<Self> {
        match self.terms.iter().next() {
            Some((m, c)) if self.terms.len() == 1 && m.is_empty() => {
                Some(Self::constant(c.recip()))
            }
            _ => None,
        }
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'a Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (m, c) in &rhs.terms {
            out.accumulate(m.clone(), c.clone());
        }
        out
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &'a Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (m, c) in &rhs.terms {
            out.accumulate(m.clone(), -c.clone());
        }
        out
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        let mut out = Polynomial::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                out.accumulate(multiply_monomials(ma, mb), ca * cb);
            }
        }
        out
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &'a Polynomial) -> Polynomial {
                $imp::$method(&self, rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            terms: self.terms.into_iter().map(|(m, c)| (m, -c)).collect(),
        }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -self.clone()
    }
}
